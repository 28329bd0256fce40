//! The fixed-length word value type.

use crate::error::{Result, SolverError};
use crate::{ALPHABET_SIZE, WORD_LENGTH};
use std::fmt;
use std::str::FromStr;

/// A validated word of exactly [`WORD_LENGTH`] lowercase ASCII letters.
///
/// Ordering is lexicographic, which the selectors rely on for
/// deterministic tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Validate and build a word from a string slice.
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != WORD_LENGTH {
            return Err(SolverError::InvalidInput(format!(
                "{s:?} has {} letters, expected {WORD_LENGTH}",
                s.chars().count()
            )));
        }
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(SolverError::InvalidInput(format!(
                "{s:?} contains {bad:?}, only lowercase a-z is allowed"
            )));
        }

        let mut letters = [0u8; WORD_LENGTH];
        letters.copy_from_slice(bytes);
        Ok(Self(letters))
    }

    pub fn as_bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Alphabet index (0 for 'a') of the letter at `position`.
    pub fn letter_index(&self, position: usize) -> usize {
        (self.0[position] - b'a') as usize
    }

    /// Per-letter occurrence counts, indexed by alphabet position.
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for position in 0..WORD_LENGTH {
            counts[self.letter_index(position)] += 1;
        }
        counts
    }

    /// Number of distinct letters in the word.
    pub fn unique_letters(&self) -> usize {
        self.letter_counts().iter().filter(|&&c| c > 0).count()
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }
}

impl FromStr for Word {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = SolverError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.0 {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
