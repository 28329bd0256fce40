//! The game loop: starter word, then shortlist and entropy selection,
//! narrowing the candidates after every piece of feedback.

use crate::candidates::CandidateSet;
use crate::config::SolverConfig;
use crate::dictionary::Dictionary;
use crate::entropy::entropy;
use crate::error::{Result, SolverError};
use crate::feedback::FeedbackPattern;
use crate::scorer::shortlist;
use crate::strategy::Strategy;
use crate::word::Word;
use std::sync::Arc;

/// Where a suggested guess came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessSource {
    /// The configured opening list.
    Starter,
    /// Exactly one candidate was left.
    SoleCandidate,
    /// Ranked by the strategy's selector.
    Selected,
}

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: Word,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub score: f64,
    pub is_possible_answer: bool,
    pub source: GuessSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the guess of the given (1-based) turn.
    AwaitingGuess { turn: usize },
    Solved { attempts: usize },
    Failed { attempts: usize },
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::AwaitingGuess { .. })
    }
}

/// One game's worth of solver state.
///
/// The dictionary and strategy are shared; candidates and history belong
/// to this game alone. Clone a fresh solver to run another game in
/// parallel.
#[derive(Debug, Clone)]
pub struct WordleSolver {
    dictionary: Arc<Dictionary>,
    config: SolverConfig,
    starters: Vec<Word>,
    strategy: Strategy,
    candidates: CandidateSet,
    history: Vec<(Word, FeedbackPattern)>,
    status: GameStatus,
}

impl WordleSolver {
    /// A solver using [`Strategy::optimized`].
    pub fn new(dictionary: Arc<Dictionary>, config: SolverConfig) -> Result<Self> {
        let strategy = Strategy::optimized(&dictionary, &config.weights);
        Self::with_strategy(dictionary, config, strategy)
    }

    pub fn with_strategy(
        dictionary: Arc<Dictionary>,
        config: SolverConfig,
        strategy: Strategy,
    ) -> Result<Self> {
        config.validate()?;
        let starters = config.starters()?;
        Ok(Self {
            candidates: CandidateSet::full(Arc::clone(&dictionary)),
            dictionary,
            config,
            starters,
            strategy,
            history: Vec::new(),
            status: GameStatus::AwaitingGuess { turn: 1 },
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of guesses applied so far.
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn possible_answers(&self) -> Vec<Word> {
        self.candidates.iter().copied().collect()
    }

    pub fn history(&self) -> &[(Word, FeedbackPattern)] {
        &self.history
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Start a new game against the same dictionary.
    pub fn reset(&mut self) {
        self.candidates = CandidateSet::full(Arc::clone(&self.dictionary));
        self.history.clear();
        self.status = GameStatus::AwaitingGuess { turn: 1 };
    }

    fn ensure_running(&self) -> Result<usize> {
        match self.status {
            GameStatus::AwaitingGuess { turn } => Ok(turn),
            GameStatus::Solved { attempts } => Err(SolverError::InvalidState(format!(
                "game already solved in {attempts} attempts"
            ))),
            GameStatus::Failed { attempts } => Err(SolverError::InvalidState(format!(
                "game already lost after {attempts} attempts"
            ))),
        }
    }

    /// First starter word still among the candidates.
    fn starter(&self) -> Option<GuessAnalysis> {
        let word = self.starters.iter().find(|word| {
            if !self.dictionary.contains(word) {
                log::warn!("starter word {word} is not in the dictionary, skipping");
                return false;
            }
            self.candidates.contains(word)
        })?;
        let entropy = entropy(word, &self.candidates);
        Some(GuessAnalysis {
            word: *word,
            entropy,
            expected_remaining: self.candidates.len() as f64 / 2_f64.powf(entropy),
            score: self.strategy.scorer().score(word, &self.candidates),
            is_possible_answer: true,
            source: GuessSource::Starter,
        })
    }

    /// Choose the next guess.
    ///
    /// Turn one plays the first usable starter word; later turns shortlist
    /// with the scorer and pick with the selector.
    pub fn find_best_guess(&self) -> Result<GuessAnalysis> {
        let turn = self.ensure_running()?;

        if turn == 1 {
            if let Some(analysis) = self.starter() {
                log::debug!("turn 1: starter {}", analysis.word);
                return Ok(analysis);
            }
        }

        let shortlist = shortlist(
            self.strategy.scorer(),
            &self.candidates,
            self.config.shortlist_size,
            self.config.probe_size,
        );
        let analysis = self.strategy.selector().select(&shortlist, &self.candidates)?;
        log::debug!(
            "turn {turn}: {} ({:.3} bits, {} candidates, {:?})",
            analysis.word,
            analysis.entropy,
            self.candidates.len(),
            analysis.source
        );
        Ok(analysis)
    }

    /// The shortlist ranked by the strategy's selector, best first.
    pub fn top_guesses(&self, n: usize) -> Result<Vec<GuessAnalysis>> {
        self.ensure_running()?;
        if self.candidates.is_empty() {
            return Err(SolverError::ExhaustedCandidates(
                "nothing left to rank".to_string(),
            ));
        }
        let shortlist = shortlist(
            self.strategy.scorer(),
            &self.candidates,
            self.config.shortlist_size.max(n),
            self.config.probe_size,
        );
        let mut ranked = self.strategy.selector().rank(&shortlist, &self.candidates);
        ranked.truncate(n);
        Ok(ranked)
    }

    /// Record the feedback `guess` received and advance the game.
    ///
    /// Feedback that no candidate could have produced is rejected with
    /// [`SolverError::ExhaustedCandidates`] and leaves the state untouched.
    pub fn apply_feedback(&mut self, guess: &Word, pattern: FeedbackPattern) -> Result<GameStatus> {
        let turn = self.ensure_running()?;

        if pattern.is_win() {
            self.history.push((*guess, pattern));
            self.status = GameStatus::Solved { attempts: turn };
            log::debug!("solved with {guess} in {turn} attempts");
            return Ok(self.status);
        }

        if turn >= self.config.max_attempts {
            self.history.push((*guess, pattern));
            self.status = GameStatus::Failed { attempts: turn };
            log::debug!("out of attempts after {guess}");
            return Ok(self.status);
        }

        let narrowed = self.candidates.filter(guess, pattern);
        log::debug!(
            "{guess} {}: {} -> {} candidates",
            pattern.to_letter_string(),
            self.candidates.len(),
            narrowed.len()
        );
        if narrowed.is_empty() {
            return Err(SolverError::ExhaustedCandidates(format!(
                "{guess} -> {} matches none of {} words",
                pattern.to_letter_string(),
                self.candidates.len()
            )));
        }

        self.history.push((*guess, pattern));
        self.candidates = narrowed;
        self.status = GameStatus::AwaitingGuess { turn: turn + 1 };
        Ok(self.status)
    }

    /// Play until the game ends, asking `get_feedback` to score each guess.
    /// Returns the sequence of guesses made.
    pub fn solve_with_feedback<F>(&mut self, mut get_feedback: F) -> Result<Vec<(Word, FeedbackPattern)>>
    where
        F: FnMut(&Word) -> FeedbackPattern,
    {
        while !self.status.is_terminal() {
            let best = self.find_best_guess()?;
            let pattern = get_feedback(&best.word);
            self.apply_feedback(&best.word, pattern)?;
        }
        Ok(self.history.clone())
    }

    /// Solve a puzzle knowing the target word (for testing/benchmarking)
    pub fn solve_for_target(&mut self, target: &Word) -> Result<Vec<(Word, FeedbackPattern)>> {
        self.solve_with_feedback(|guess| FeedbackPattern::calculate(guess, target))
    }
}
