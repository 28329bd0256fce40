//! Scorer and selector pairs.

use crate::config::ScoringWeights;
use crate::dictionary::Dictionary;
use crate::entropy::{EntropySelector, GreedySelector, Selector};
use crate::scorer::{FrequencyScorer, HeuristicScorer, Scorer};
use std::fmt;
use std::sync::Arc;

/// How guesses are chosen after the opening move: a [`Scorer`] builds the
/// shortlist, a [`Selector`] picks from it.
///
/// Both halves are shared trait objects, so one strategy can drive many
/// games at once.
#[derive(Clone)]
pub struct Strategy {
    scorer: Arc<dyn Scorer>,
    selector: Arc<dyn Selector>,
}

impl Strategy {
    pub fn new(scorer: Arc<dyn Scorer>, selector: Arc<dyn Selector>) -> Self {
        Self { scorer, selector }
    }

    /// Full heuristic shortlist, entropy selection. The default.
    pub fn optimized(dictionary: &Dictionary, weights: &ScoringWeights) -> Self {
        Self::new(
            Arc::new(HeuristicScorer::new(dictionary, weights.clone())),
            Arc::new(EntropySelector),
        )
    }

    /// Letter coverage only, highest score wins.
    pub fn basic(weights: &ScoringWeights) -> Self {
        Self::new(
            Arc::new(FrequencyScorer::new(weights.clone())),
            Arc::new(GreedySelector),
        )
    }

    pub fn scorer(&self) -> &dyn Scorer {
        self.scorer.as_ref()
    }

    pub fn selector(&self) -> &dyn Selector {
        self.selector.as_ref()
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strategy")
            .field("scorer", &self.scorer.name())
            .field("selector", &self.selector.name())
            .finish()
    }
}
