//! # Wordle Engine
//!
//! A Wordle solving engine built on information theory.
//!
//! Given a fixed dictionary and the feedback observed so far, the engine
//! narrows the set of possible answers and picks the next guess: a curated
//! starter word on the first turn, afterwards a shortlist ranked by letter
//! frequency heuristics from which the guess with the highest expected
//! information gain (entropy) is chosen.

pub mod candidates;
pub mod config;
pub mod dictionary;
pub mod entropy;
pub mod error;
pub mod feedback;
pub mod scorer;
pub mod simulation;
pub mod solver;
pub mod strategy;
pub mod word;

pub use candidates::CandidateSet;
pub use config::{ScoringWeights, SolverConfig};
pub use dictionary::{load_dictionary, Dictionary};
pub use entropy::{entropy, EntropySelector, GreedySelector, Selector};
pub use error::{Result, SolverError};
pub use feedback::{Feedback, FeedbackPattern};
pub use scorer::{FrequencyScorer, HeuristicScorer, Scorer};
pub use simulation::{benchmark, Benchmark};
pub use solver::{GameStatus, GuessAnalysis, GuessSource, WordleSolver};
pub use strategy::Strategy;
pub use word::Word;

/// Word length for Wordle
pub const WORD_LENGTH: usize = 5;

/// Number of symbols in the alphabet (`a..=z`)
pub const ALPHABET_SIZE: usize = 26;
