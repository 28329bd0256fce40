//! Tunable solver settings.
//!
//! Everything here is plain data passed into the solver at construction.
//! The binary loads it from JSON; keys that are left out keep their defaults.

use crate::error::{Result, SolverError};
use crate::word::Word;
use serde::{Deserialize, Serialize};

/// Openers that split a typical five-letter word list well.
pub const DEFAULT_STARTER_WORDS: &[&str] = &[
    "raise", "stare", "crane", "slate", "audio", "roate", "soare", "arise", "irate", "orate",
    "least", "steal", "tears",
];

/// Relative weights of the heuristic score components.
///
/// Frequencies are normalized by the number of remaining candidates, so
/// every component lives on a comparable `0..=1`-per-letter scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Frequency of each letter at its own position.
    pub position: f64,
    /// Frequency of each distinct letter anywhere in a word.
    pub global: f64,
    /// Bonus per common bigram/trigram contained in the word.
    pub combination: f64,
    /// Bonus per distinct letter.
    pub unique_letter: f64,
    /// Bonus for words with one to three vowels.
    pub vowel_balance: f64,
    /// Bonus for repeated-letter signatures common in the dictionary.
    pub repeated_pattern: f64,
    /// Bonus for words that are still possible answers.
    pub candidate: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            position: 1.0,
            global: 1.0,
            combination: 0.05,
            unique_letter: 0.1,
            vowel_balance: 0.1,
            repeated_pattern: 0.05,
            candidate: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Ranked opening guesses; the first one in the dictionary is played.
    pub starter_words: Vec<String>,
    /// Guesses allowed per game.
    pub max_attempts: usize,
    /// Remaining candidates kept for the entropy pass.
    pub shortlist_size: usize,
    /// Extra non-candidate words kept as information probes.
    pub probe_size: usize,
    pub weights: ScoringWeights,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            starter_words: DEFAULT_STARTER_WORDS.iter().map(|s| s.to_string()).collect(),
            max_attempts: 6,
            shortlist_size: 20,
            probe_size: 10,
            weights: ScoringWeights::default(),
        }
    }
}

impl SolverConfig {
    /// Parse a JSON document; missing keys fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SolverError::InvalidInput(format!("config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(SolverError::InvalidInput(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if self.shortlist_size == 0 {
            return Err(SolverError::InvalidInput(
                "shortlist_size must be at least 1".to_string(),
            ));
        }
        self.starters()?;
        Ok(())
    }

    /// The starter list as validated words, in order.
    pub fn starters(&self) -> Result<Vec<Word>> {
        self.starter_words
            .iter()
            .map(|s| Word::parse(s))
            .collect()
    }
}
