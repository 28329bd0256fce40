//! Feedback calculation for Wordle guesses.
//!
//! This module computes the feedback pattern (green/yellow/gray) a guess
//! receives against a target word, and parses patterns typed in by a user.

use crate::error::{Result, SolverError};
use crate::word::Word;
use crate::{ALPHABET_SIZE, WORD_LENGTH};

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in correct position (green)
    Correct,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word (gray)
    Absent,
}

impl Feedback {
    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Single-letter code: G, Y or B
    pub fn to_letter(self) -> char {
        match self {
            Feedback::Correct => 'G',
            Feedback::Present => 'Y',
            Feedback::Absent => 'B',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }

    fn digit(self) -> u8 {
        match self {
            Feedback::Absent => 0,
            Feedback::Present => 1,
            Feedback::Correct => 2,
        }
    }
}

/// A complete feedback pattern for a 5-letter guess.
/// Encoded as a single u8 value (0-242) for efficiency.
/// Each position can be 0 (absent), 1 (present), or 2 (correct).
/// Pattern = p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedbackPattern(u8);

impl FeedbackPattern {
    /// The pattern indicating all correct (winning)
    pub const ALL_CORRECT: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    /// The pattern with no matching letters at all
    pub const ALL_ABSENT: Self = Self(0);

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    /// Create a new pattern from individual feedback values
    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            pattern += fb.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Rebuild a pattern from its numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        (usize::from(code) < Self::NUM_PATTERNS).then_some(Self(code))
    }

    /// Numeric code in `0..NUM_PATTERNS`, usable as a bucket index.
    pub fn code(self) -> u8 {
        self.0
    }

    /// Calculate the feedback pattern for a guess against a target word.
    ///
    /// This implements the standard Wordle feedback rules:
    /// - Green (Correct): Letter is in the correct position
    /// - Yellow (Present): Letter is in the word but wrong position
    /// - Gray (Absent): Letter is not in the word (or all instances accounted for)
    ///
    /// Greens are assigned before any yellow so that a repeated guess letter
    /// cannot claim more yellows than the target has unmatched copies.
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let guess_bytes = guess.as_bytes();
        let target_bytes = target.as_bytes();

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut target_remaining = [0u8; ALPHABET_SIZE];

        for i in 0..WORD_LENGTH {
            if guess_bytes[i] == target_bytes[i] {
                feedback[i] = Feedback::Correct;
            } else {
                target_remaining[target.letter_index(i)] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] != Feedback::Correct {
                let idx = guess.letter_index(i);
                if target_remaining[idx] > 0 {
                    feedback[i] = Feedback::Present;
                    target_remaining[idx] -= 1;
                }
            }
        }

        Self::new(feedback)
    }

    /// Convert pattern to array of feedbacks
    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                _ => Feedback::Correct,
            };
            pattern /= 3;
        }
        feedbacks
    }

    /// Check if this pattern represents a win (all correct)
    pub fn is_win(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Parse a pattern from a string like "gybbb", "GYBBB" or "21000"
    pub fn parse(s: &str) -> Result<Self> {
        let feedbacks = s
            .chars()
            .map(|c| {
                Feedback::from_char(c).ok_or_else(|| {
                    SolverError::InvalidInput(format!(
                        "{c:?} in {s:?} is not a feedback symbol (use g/y/b)"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let arr: [Feedback; WORD_LENGTH] = feedbacks.try_into().map_err(|v: Vec<_>| {
            SolverError::InvalidInput(format!(
                "pattern {s:?} has {} symbols, expected {WORD_LENGTH}",
                v.len()
            ))
        })?;
        Ok(Self::new(arr))
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_char()).collect()
    }

    /// Display as a G/Y/B letter string
    pub fn to_letter_string(self) -> String {
        self.to_feedbacks().iter().map(|f| f.to_letter()).collect()
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

/// Score `guess` against `target`.
pub fn evaluate(guess: &Word, target: &Word) -> FeedbackPattern {
    FeedbackPattern::calculate(guess, target)
}

/// Score two raw strings, validating both as words first.
///
/// Fails with [`SolverError::InvalidInput`] when either side is malformed
/// or the lengths differ.
pub fn evaluate_str(guess: &str, target: &str) -> Result<FeedbackPattern> {
    if guess.len() != target.len() {
        return Err(SolverError::InvalidInput(format!(
            "guess {guess:?} and target {target:?} differ in length"
        )));
    }
    Ok(FeedbackPattern::calculate(&Word::parse(guess)?, &Word::parse(target)?))
}
