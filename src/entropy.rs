//! Guess selection over a shortlist.
//!
//! The key insight is that we want to maximize the expected information
//! gain (entropy) from each guess, which minimizes the expected number of
//! remaining possible words.

use crate::candidates::CandidateSet;
use crate::error::{Result, SolverError};
use crate::feedback::FeedbackPattern;
use crate::scorer::{compare_scored, ScoredWord};
use crate::solver::{GuessAnalysis, GuessSource};
use crate::word::Word;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Entropies are compared in units of 1e-9 bits.
const ENTROPY_SCALE: f64 = 1e9;

/// Picks the next guess from a scored shortlist.
pub trait Selector: Send + Sync {
    /// Rank the whole shortlist, best guess first.
    fn rank(&self, shortlist: &[ScoredWord], remaining: &CandidateSet) -> Vec<GuessAnalysis>;

    fn name(&self) -> &'static str;

    /// Best guess for `remaining`.
    ///
    /// A lone candidate is returned directly without ranking anything.
    fn select(&self, shortlist: &[ScoredWord], remaining: &CandidateSet) -> Result<GuessAnalysis> {
        if remaining.is_empty() {
            return Err(SolverError::ExhaustedCandidates(
                "nothing left to select from".to_string(),
            ));
        }
        if let Some(&word) = remaining.sole() {
            let score = shortlist
                .iter()
                .find(|scored| scored.word == word)
                .map_or(0.0, |scored| scored.score);
            return Ok(GuessAnalysis {
                word,
                entropy: 0.0,
                expected_remaining: 1.0,
                score,
                is_possible_answer: true,
                source: GuessSource::SoleCandidate,
            });
        }
        self.rank(shortlist, remaining)
            .into_iter()
            .next()
            .ok_or_else(|| SolverError::InvalidInput("empty shortlist".to_string()))
    }
}

/// Shannon entropy, in bits, of the feedback patterns `guess` induces
/// over `remaining`.
///
/// Always within `0..=log2(remaining.len())`.
pub fn entropy(guess: &Word, remaining: &CandidateSet) -> f64 {
    let n = remaining.len() as f64;
    if n <= 1.0 {
        return 0.0;
    }

    let mut pattern_counts = [0u32; FeedbackPattern::NUM_PATTERNS];

    for answer in remaining.iter() {
        let pattern = FeedbackPattern::calculate(guess, answer);
        pattern_counts[pattern.code() as usize] += 1;
    }

    let mut entropy = 0.0;
    for &count in &pattern_counts {
        if count > 0 {
            let p = count as f64 / n;
            entropy -= p * p.log2();
        }
    }

    entropy
}

fn entropy_key(entropy: f64) -> i64 {
    (entropy * ENTROPY_SCALE).round() as i64
}

/// Entropy first, then heuristic score, then alphabetical.
pub fn compare_analyses(a: &GuessAnalysis, b: &GuessAnalysis) -> Ordering {
    entropy_key(b.entropy)
        .cmp(&entropy_key(a.entropy))
        .then_with(|| b.score.total_cmp(&a.score))
        .then_with(|| a.word.cmp(&b.word))
}

fn analyze(scored: &ScoredWord, remaining: &CandidateSet) -> GuessAnalysis {
    let entropy = entropy(&scored.word, remaining);
    GuessAnalysis {
        word: scored.word,
        entropy,
        expected_remaining: remaining.len() as f64 / 2_f64.powf(entropy),
        score: scored.score,
        is_possible_answer: scored.is_possible_answer,
        source: GuessSource::Selected,
    }
}

/// Maximum expected information gain.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropySelector;

impl Selector for EntropySelector {
    fn rank(&self, shortlist: &[ScoredWord], remaining: &CandidateSet) -> Vec<GuessAnalysis> {
        let mut analyses: Vec<GuessAnalysis> = shortlist
            .par_iter()
            .map(|scored| analyze(scored, remaining))
            .collect();

        for analysis in &analyses {
            log::trace!(
                "{}: {:.4} bits, score {:.3}",
                analysis.word,
                analysis.entropy,
                analysis.score
            );
        }

        analyses.sort_by(compare_analyses);
        analyses
    }

    fn name(&self) -> &'static str {
        "entropy"
    }
}

/// Highest heuristic score among the possible answers, no lookahead.
/// Probes rank after every possible answer. Entropy is still reported but
/// does not affect the ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySelector;

impl Selector for GreedySelector {
    fn rank(&self, shortlist: &[ScoredWord], remaining: &CandidateSet) -> Vec<GuessAnalysis> {
        let mut ranked = shortlist.to_vec();
        ranked.sort_by(|a, b| {
            b.is_possible_answer
                .cmp(&a.is_possible_answer)
                .then_with(|| compare_scored(a, b))
        });
        ranked
            .iter()
            .map(|scored| analyze(scored, remaining))
            .collect()
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}
