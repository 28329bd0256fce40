//! Letter-frequency heuristics used to shortlist guesses.
//!
//! Scoring is cheap (linear in the word length) compared to the entropy
//! pass, so every allowed guess is scored and only the best few are handed
//! to the [`Selector`](crate::entropy::Selector).

use crate::candidates::CandidateSet;
use crate::config::ScoringWeights;
use crate::dictionary::Dictionary;
use crate::word::Word;
use crate::{ALPHABET_SIZE, WORD_LENGTH};
use std::collections::HashMap;

const BIGRAM_TABLE_SIZE: usize = 20;
const TRIGRAM_TABLE_SIZE: usize = 10;
const VOWELS: &[u8] = b"aeiou";

/// Ranks words by how well they cover the remaining candidates.
///
/// Implementations must be deterministic: the same guesses and candidates
/// always produce the same scores.
pub trait Scorer: Send + Sync {
    /// Score every word in `guesses` against `remaining`.
    fn scores(&self, guesses: &[Word], remaining: &CandidateSet) -> Vec<f64>;

    fn score(&self, word: &Word, remaining: &CandidateSet) -> f64 {
        self.scores(std::slice::from_ref(word), remaining)
            .first()
            .copied()
            .unwrap_or(0.0)
    }

    fn name(&self) -> &'static str;
}

/// A word with its heuristic score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: f64,
    pub is_possible_answer: bool,
}

/// Letter counts over a candidate set.
#[derive(Debug, Clone)]
pub struct LetterStats {
    /// `positional[i][l]`: candidates with letter `l` at position `i`.
    positional: [[u32; ALPHABET_SIZE]; WORD_LENGTH],
    /// `containing[l]`: candidates containing letter `l` at least once.
    containing: [u32; ALPHABET_SIZE],
    total: u32,
}

impl LetterStats {
    pub fn from_candidates(remaining: &CandidateSet) -> Self {
        let mut stats = Self {
            positional: [[0; ALPHABET_SIZE]; WORD_LENGTH],
            containing: [0; ALPHABET_SIZE],
            total: 0,
        };
        for word in remaining.iter() {
            for (i, row) in stats.positional.iter_mut().enumerate() {
                row[word.letter_index(i)] += 1;
            }
            for (letter, &count) in word.letter_counts().iter().enumerate() {
                if count > 0 {
                    stats.containing[letter] += 1;
                }
            }
            stats.total += 1;
        }
        stats
    }

    /// Share of candidates with `word[i]` at position `i`, summed over `i`.
    pub fn positional_frequency(&self, word: &Word) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let hits: u32 = (0..WORD_LENGTH)
            .map(|i| self.positional[i][word.letter_index(i)])
            .sum();
        f64::from(hits) / f64::from(self.total)
    }

    /// Share of candidates containing each distinct letter of `word`,
    /// summed over the distinct letters.
    pub fn global_frequency(&self, word: &Word) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let hits: u32 = word
            .letter_counts()
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(letter, _)| self.containing[letter])
            .sum();
        f64::from(hits) / f64::from(self.total)
    }
}

/// Repeated letters of a word with their counts, e.g. `[(e, 3)]` for "eerie".
type RepeatSignature = Vec<(u8, u8)>;

fn repeat_signature(word: &Word) -> RepeatSignature {
    word.letter_counts()
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 1)
        .map(|(letter, &count)| (letter as u8, count))
        .collect()
}

/// Most frequent letter combinations of length `n` in the dictionary,
/// weighted relative to the most frequent one.
fn common_combinations(dictionary: &Dictionary, n: usize, keep: usize) -> Vec<(Vec<u8>, f64)> {
    let mut counts: HashMap<&[u8], u32> = HashMap::new();
    for word in dictionary {
        for combo in word.as_bytes().windows(n) {
            *counts.entry(combo).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&[u8], u32)> = counts.into_iter().collect();
    ranked.sort_unstable_by(|(a, ca), (b, cb)| cb.cmp(ca).then_with(|| a.cmp(b)));
    ranked.truncate(keep);

    let top = ranked.first().map_or(1, |&(_, count)| count).max(1);
    ranked
        .into_iter()
        .map(|(combo, count)| (combo.to_vec(), f64::from(count) / f64::from(top)))
        .collect()
}

fn vowel_count(word: &Word) -> usize {
    word.as_bytes().iter().filter(|b| VOWELS.contains(b)).count()
}

/// Weighted blend of positional frequency, global letter frequency and
/// static dictionary features.
#[derive(Debug, Clone)]
pub struct HeuristicScorer {
    weights: ScoringWeights,
    combinations: Vec<(Vec<u8>, f64)>,
    repeat_patterns: HashMap<RepeatSignature, f64>,
}

impl HeuristicScorer {
    pub fn new(dictionary: &Dictionary, weights: ScoringWeights) -> Self {
        let mut combinations = common_combinations(dictionary, 2, BIGRAM_TABLE_SIZE);
        combinations.extend(common_combinations(dictionary, 3, TRIGRAM_TABLE_SIZE));

        let mut pattern_counts: HashMap<RepeatSignature, u32> = HashMap::new();
        for word in dictionary {
            let signature = repeat_signature(word);
            if !signature.is_empty() {
                *pattern_counts.entry(signature).or_insert(0) += 1;
            }
        }
        let top = pattern_counts.values().copied().max().unwrap_or(1).max(1);
        let repeat_patterns = pattern_counts
            .into_iter()
            .map(|(signature, count)| (signature, f64::from(count) / f64::from(top)))
            .collect();

        Self {
            weights,
            combinations,
            repeat_patterns,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Common bigrams and trigrams with their relative weights.
    pub fn combinations(&self) -> &[(Vec<u8>, f64)] {
        &self.combinations
    }

    /// Sum of the weights of the table combinations found in `word`.
    pub fn combination_bonus(&self, word: &Word) -> f64 {
        let bytes = word.as_bytes();
        self.combinations
            .iter()
            .filter(|(combo, _)| bytes.windows(combo.len()).any(|w| w == combo.as_slice()))
            .map(|(_, weight)| weight)
            .sum()
    }

    fn static_score(&self, word: &Word) -> f64 {
        let w = &self.weights;
        let mut score = w.combination * self.combination_bonus(word);
        score += w.unique_letter * word.unique_letters() as f64;
        if (1..=3).contains(&vowel_count(word)) {
            score += w.vowel_balance;
        }
        if let Some(share) = self.repeat_patterns.get(&repeat_signature(word)) {
            score += w.repeated_pattern * share;
        }
        score
    }

    fn score_with(&self, stats: &LetterStats, word: &Word, remaining: &CandidateSet) -> f64 {
        let w = &self.weights;
        let mut score = w.position * stats.positional_frequency(word)
            + w.global * stats.global_frequency(word)
            + self.static_score(word);
        if remaining.contains(word) {
            score += w.candidate;
        }
        score
    }
}

impl Scorer for HeuristicScorer {
    fn scores(&self, guesses: &[Word], remaining: &CandidateSet) -> Vec<f64> {
        let stats = LetterStats::from_candidates(remaining);
        guesses
            .iter()
            .map(|word| self.score_with(&stats, word, remaining))
            .collect()
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Global letter coverage only: distinct-letter frequency plus a bonus per
/// distinct letter.
#[derive(Debug, Clone)]
pub struct FrequencyScorer {
    weights: ScoringWeights,
}

impl FrequencyScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }
}

impl Scorer for FrequencyScorer {
    fn scores(&self, guesses: &[Word], remaining: &CandidateSet) -> Vec<f64> {
        let stats = LetterStats::from_candidates(remaining);
        guesses
            .iter()
            .map(|word| {
                self.weights.global * stats.global_frequency(word)
                    + self.weights.unique_letter * word.unique_letters() as f64
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "frequency"
    }
}

/// Order by score, highest first, then alphabetically.
pub fn compare_scored(a: &ScoredWord, b: &ScoredWord) -> std::cmp::Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.word.cmp(&b.word))
}

/// Pick the guesses worth an entropy evaluation.
///
/// Returns the `size` best remaining candidates followed by the `probes`
/// best dictionary words that are no longer possible answers. Both groups
/// are ordered by [`compare_scored`].
pub fn shortlist(
    scorer: &dyn Scorer,
    remaining: &CandidateSet,
    size: usize,
    probes: usize,
) -> Vec<ScoredWord> {
    let dictionary = remaining.dictionary();
    let mut is_candidate = vec![false; dictionary.len()];
    for &idx in remaining.indices() {
        is_candidate[idx] = true;
    }

    let scores = scorer.scores(dictionary.words(), remaining);
    let (mut candidates, mut others): (Vec<ScoredWord>, Vec<ScoredWord>) = dictionary
        .iter()
        .zip(scores)
        .zip(is_candidate)
        .map(|((&word, score), is_possible_answer)| ScoredWord {
            word,
            score,
            is_possible_answer,
        })
        .partition(|scored| scored.is_possible_answer);

    candidates.sort_by(compare_scored);
    candidates.truncate(size);
    others.sort_by(compare_scored);
    others.truncate(probes);

    candidates.extend(others);
    candidates
}
