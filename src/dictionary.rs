//! The immutable word list shared by every game.

use crate::error::{Result, SolverError};
use crate::word::Word;
use std::collections::HashMap;

/// A validated, deduplicated, ordered list of words.
///
/// Built once and then only read; wrap it in an `Arc` to share it between
/// games running on different threads.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: HashMap<Word, usize>,
}

impl Dictionary {
    /// Validate a parsed word list.
    ///
    /// Every entry must be a lowercase word of [`crate::WORD_LENGTH`]
    /// letters, entries must be unique, and the list must not be empty.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let mut index = HashMap::new();

        for (line, entry) in entries.into_iter().enumerate() {
            let entry = entry.as_ref();
            let word = Word::parse(entry).map_err(|e| {
                SolverError::InvalidDictionary(format!("entry {}: {e}", line + 1))
            })?;
            if index.insert(word, words.len()).is_some() {
                return Err(SolverError::InvalidDictionary(format!(
                    "entry {}: duplicate word {entry:?}",
                    line + 1
                )));
            }
            words.push(word);
        }

        if words.is_empty() {
            return Err(SolverError::InvalidDictionary("no words".to_string()));
        }

        Ok(Self { words, index })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Position of `word` in the dictionary, if present.
    pub fn index_of(&self, word: &Word) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Load the dictionary from the embedded word list
pub fn load_dictionary() -> Result<Dictionary> {
    Dictionary::new(
        include_str!("../dictionary/dictionary.txt")
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_dictionary_is_valid() {
        let dictionary = load_dictionary().unwrap();
        assert!(dictionary.len() > 500);
        let raise = Word::parse("raise").unwrap();
        assert!(dictionary.contains(&raise));
        assert_eq!(dictionary.get(0), Some(&raise));
    }

    #[test]
    fn test_rejects_empty() {
        let empty: Vec<&str> = vec![];
        assert!(matches!(
            Dictionary::new(empty),
            Err(SolverError::InvalidDictionary(_))
        ));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let result = Dictionary::new(["crane", "slates"]);
        assert!(matches!(result, Err(SolverError::InvalidDictionary(_))));
    }

    #[test]
    fn test_rejects_uppercase() {
        let result = Dictionary::new(["crane", "SLATE"]);
        assert!(matches!(result, Err(SolverError::InvalidDictionary(_))));
    }

    #[test]
    fn test_rejects_duplicates() {
        let result = Dictionary::new(["crane", "slate", "crane"]);
        match result {
            Err(SolverError::InvalidDictionary(msg)) => assert!(msg.contains("duplicate")),
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn test_index_of_preserves_order() {
        let dictionary = Dictionary::new(["crane", "slate", "trace"]).unwrap();
        let slate = Word::parse("slate").unwrap();
        assert_eq!(dictionary.index_of(&slate), Some(1));
        assert_eq!(dictionary.index_of(&Word::parse("zebra").unwrap()), None);
    }
}
