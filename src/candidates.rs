//! The set of words still consistent with the feedback seen so far.

use crate::dictionary::Dictionary;
use crate::feedback::FeedbackPattern;
use crate::word::Word;
use std::sync::Arc;

/// A view into a shared [`Dictionary`], stored as ascending indices.
///
/// Filtering produces a new view; the dictionary itself is never copied or
/// mutated.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    dictionary: Arc<Dictionary>,
    indices: Vec<usize>,
}

impl CandidateSet {
    /// Every word in the dictionary.
    pub fn full(dictionary: Arc<Dictionary>) -> Self {
        let indices = (0..dictionary.len()).collect();
        Self { dictionary, indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Dictionary positions of the remaining words, ascending.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.dictionary
            .index_of(word)
            .is_some_and(|idx| self.indices.binary_search(&idx).is_ok())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> + '_ {
        self.indices.iter().map(|&idx| &self.dictionary.words()[idx])
    }

    /// The only remaining word, if exactly one is left.
    pub fn sole(&self) -> Option<&Word> {
        match self.indices.as_slice() {
            [only] => self.dictionary.get(*only),
            _ => None,
        }
    }

    /// Keep the words that would have produced `pattern` had they been the
    /// target for `guess`.
    ///
    /// Re-running the evaluator covers every positional and letter-count
    /// constraint the feedback implies, repeated letters included.
    pub fn filter(&self, guess: &Word, pattern: FeedbackPattern) -> Self {
        let words = self.dictionary.words();
        let indices = self
            .indices
            .iter()
            .copied()
            .filter(|&idx| FeedbackPattern::calculate(guess, &words[idx]) == pattern)
            .collect();
        Self {
            dictionary: Arc::clone(&self.dictionary),
            indices,
        }
    }
}

impl PartialEq for CandidateSet {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.dictionary, &other.dictionary) && self.indices == other.indices
    }
}

impl Eq for CandidateSet {}

/// Free-function form of [`CandidateSet::filter`].
pub fn filter(candidates: &CandidateSet, guess: &Word, pattern: FeedbackPattern) -> CandidateSet {
    candidates.filter(guess, pattern)
}
