use std::sync::Arc;
use wordle_engine::candidates::filter;
use wordle_engine::{load_dictionary, CandidateSet, Dictionary, FeedbackPattern, Word};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn full_set() -> CandidateSet {
    CandidateSet::full(Arc::new(load_dictionary().unwrap()))
}

#[test]
fn test_full_set_covers_dictionary() {
    let set = full_set();
    assert_eq!(set.len(), set.dictionary().len());
    assert!(set.contains(&w("seeds")));
    assert!(!set.contains(&w("zzzzz")));
    assert!(set.sole().is_none());
}

#[test]
fn test_filter_keeps_only_consistent_words() {
    let set = full_set();
    let guess = w("raise");
    let pattern = FeedbackPattern::calculate(&guess, &w("seeds"));

    let narrowed = set.filter(&guess, pattern);
    assert!(narrowed.contains(&w("seeds")));
    assert!(narrowed.len() < set.len());

    for word in narrowed.iter() {
        assert_eq!(FeedbackPattern::calculate(&guess, word), pattern, "{word}");
    }
    for word in set.iter().filter(|word| !narrowed.contains(word)) {
        assert_ne!(FeedbackPattern::calculate(&guess, word), pattern, "{word}");
    }
}

#[test]
fn test_filter_handles_repeated_letters() {
    let dictionary = Arc::new(Dictionary::new(["seeds", "speed", "steer", "sheep", "eerie"]).unwrap());
    let set = CandidateSet::full(dictionary);

    // "eerie" against "seeds": one yellow 'e', one green 'e', the last 'e' gray
    let pattern = FeedbackPattern::parse("ygbbb").unwrap();
    let narrowed = set.filter(&w("eerie"), pattern);

    let words: Vec<String> = narrowed.iter().map(|w| w.to_string()).collect();
    assert!(words.contains(&"seeds".to_string()));
    assert!(!words.contains(&"eerie".to_string()));
}

#[test]
fn test_filter_is_idempotent() {
    let set = full_set();
    for (guess, target) in [("raise", "seeds"), ("crane", "eerie"), ("slate", "fuzzy")] {
        let guess = w(guess);
        let pattern = FeedbackPattern::calculate(&guess, &w(target));
        let once = filter(&set, &guess, pattern);
        let twice = filter(&once, &guess, pattern);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_filter_never_grows() {
    let set = full_set();
    let guess = w("stare");
    for code in 0..FeedbackPattern::NUM_PATTERNS as u8 {
        let pattern = FeedbackPattern::from_code(code).unwrap();
        let narrowed = set.filter(&guess, pattern);
        assert!(narrowed.len() <= set.len());
        assert!(narrowed.filter(&guess, pattern).len() <= narrowed.len());
    }
}

#[test]
fn test_filter_patterns_partition_the_set() {
    let set = full_set();
    let guess = w("crane");
    let total: usize = (0..FeedbackPattern::NUM_PATTERNS as u8)
        .map(|code| set.filter(&guess, FeedbackPattern::from_code(code).unwrap()).len())
        .sum();
    assert_eq!(total, set.len());
}

#[test]
fn test_filter_does_not_touch_dictionary() {
    let set = full_set();
    let dictionary = Arc::clone(set.dictionary());
    let before = dictionary.len();

    let narrowed = set.filter(&w("raise"), FeedbackPattern::ALL_ABSENT);
    assert!(Arc::ptr_eq(narrowed.dictionary(), &dictionary));
    assert_eq!(dictionary.len(), before);
    assert_eq!(set.len(), before);
}

#[test]
fn test_impossible_feedback_empties_set() {
    let set = full_set();
    let narrowed = set.filter(&w("zzzzz"), FeedbackPattern::ALL_CORRECT);
    assert!(narrowed.is_empty());
}

#[test]
fn test_sole_candidate() {
    let dictionary = Arc::new(Dictionary::new(["crane", "slate", "trace"]).unwrap());
    let set = CandidateSet::full(dictionary);
    let narrowed = set.filter(&w("slate"), FeedbackPattern::ALL_CORRECT);
    assert_eq!(narrowed.sole(), Some(&w("slate")));
    assert_eq!(narrowed.indices(), &[1]);
}
