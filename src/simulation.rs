//! Batch simulation over many target words.

use crate::config::SolverConfig;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::feedback::FeedbackPattern;
use crate::solver::{GameStatus, WordleSolver};
use crate::strategy::Strategy;
use crate::word::Word;
use rayon::prelude::*;
use std::sync::Arc;

/// One finished simulated game.
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub target: Word,
    pub guesses: Vec<(Word, FeedbackPattern)>,
    pub solved: bool,
}

impl GameOutcome {
    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }
}

/// Aggregate results of a batch of games.
#[derive(Debug, Clone, Default)]
pub struct Benchmark {
    pub outcomes: Vec<GameOutcome>,
}

impl Benchmark {
    pub fn games(&self) -> usize {
        self.outcomes.len()
    }

    pub fn solved(&self) -> usize {
        self.outcomes.iter().filter(|o| o.solved).count()
    }

    pub fn solve_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.solved() as f64 / self.games() as f64
    }

    /// Mean number of guesses over the solved games.
    pub fn average_guesses(&self) -> f64 {
        let solved = self.solved();
        if solved == 0 {
            return 0.0;
        }
        let total: usize = self
            .outcomes
            .iter()
            .filter(|o| o.solved)
            .map(GameOutcome::attempts)
            .sum();
        total as f64 / solved as f64
    }

    /// `(guesses, games)` pairs for the solved games, fewest guesses first.
    pub fn distribution(&self) -> Vec<(usize, usize)> {
        let max_guesses = self
            .outcomes
            .iter()
            .map(GameOutcome::attempts)
            .max()
            .unwrap_or(0);
        let mut distribution = vec![0usize; max_guesses + 1];

        for outcome in self.outcomes.iter().filter(|o| o.solved) {
            distribution[outcome.attempts()] += 1;
        }

        distribution
            .into_iter()
            .enumerate()
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    pub fn failed_words(&self) -> Vec<Word> {
        self.outcomes
            .iter()
            .filter(|o| !o.solved)
            .map(|o| o.target)
            .collect()
    }
}

/// Play one game against `target` starting from a fresh copy of `template`.
pub fn simulate(template: &WordleSolver, target: &Word) -> Result<GameOutcome> {
    let mut solver = template.clone();
    solver.reset();
    let guesses = solver.solve_for_target(target)?;
    Ok(GameOutcome {
        target: *target,
        guesses,
        solved: matches!(solver.status(), GameStatus::Solved { .. }),
    })
}

/// Play every target in parallel, each game with its own solver state.
pub fn benchmark(
    dictionary: Arc<Dictionary>,
    targets: &[Word],
    config: &SolverConfig,
    strategy: &Strategy,
) -> Result<Benchmark> {
    let template = WordleSolver::with_strategy(dictionary, config.clone(), strategy.clone())?;
    let outcomes = targets
        .par_iter()
        .map(|target| simulate(&template, target))
        .collect::<Result<Vec<_>>>()?;

    let benchmark = Benchmark { outcomes };
    log::info!(
        "simulated {} games: {:.1}% solved, {:.3} guesses on average",
        benchmark.games(),
        benchmark.solve_rate() * 100.0,
        benchmark.average_guesses()
    );
    Ok(benchmark)
}
