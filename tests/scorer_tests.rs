use std::sync::Arc;
use wordle_engine::scorer::{shortlist, LetterStats};
use wordle_engine::{
    load_dictionary, CandidateSet, Dictionary, FeedbackPattern, FrequencyScorer,
    HeuristicScorer, Scorer, ScoringWeights, Word,
};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn small_set(words: &[&str]) -> CandidateSet {
    CandidateSet::full(Arc::new(Dictionary::new(words).unwrap()))
}

#[test]
fn test_positional_frequency() {
    let set = small_set(&["crane", "crate", "trace"]);
    let stats = LetterStats::from_candidates(&set);
    // c:2/3, r:3/3, a:3/3, n:1/3, e:3/3
    let expected = 4.0;
    assert!((stats.positional_frequency(&w("crane")) - expected).abs() < 1e-12);
}

#[test]
fn test_global_frequency_counts_each_letter_once() {
    let set = small_set(&["eerie", "steer"]);
    let stats = LetterStats::from_candidates(&set);
    // e: 2 words, r: 2 words, i: 1 word; the repeated 'e's count once
    assert!((stats.global_frequency(&w("eerie")) - 2.5).abs() < 1e-12);
}

#[test]
fn test_stats_on_empty_set() {
    let set = small_set(&["crane", "slate"]).filter(&w("zzzzz"), FeedbackPattern::ALL_CORRECT);
    let stats = LetterStats::from_candidates(&set);
    assert_eq!(stats.positional_frequency(&w("crane")), 0.0);
    assert_eq!(stats.global_frequency(&w("crane")), 0.0);
}

#[test]
fn test_score_matches_batch_scores() {
    let dictionary = load_dictionary().unwrap();
    let scorer = HeuristicScorer::new(&dictionary, ScoringWeights::default());
    let set = CandidateSet::full(Arc::new(dictionary));
    let words = [w("raise"), w("fuzzy"), w("eerie")];

    let batch = scorer.scores(&words, &set);
    for (word, score) in words.iter().zip(&batch) {
        assert_eq!(scorer.score(word, &set), *score);
    }
    assert_eq!(scorer.scores(&words, &set), batch);
}

#[test]
fn test_common_letters_outscore_rare_ones() {
    let dictionary = load_dictionary().unwrap();
    let scorer = HeuristicScorer::new(&dictionary, ScoringWeights::default());
    let set = CandidateSet::full(Arc::new(dictionary));
    assert!(scorer.score(&w("stare"), &set) > scorer.score(&w("fuzzy"), &set));
}

#[test]
fn test_candidate_bonus() {
    let dictionary = Arc::new(Dictionary::new(["crane", "crate", "trace", "slate"]).unwrap());
    let scorer = HeuristicScorer::new(&dictionary, ScoringWeights::default());
    let full = CandidateSet::full(Arc::clone(&dictionary));
    // "slate" -> "crane" leaves crane only
    let narrowed = full.filter(&w("slate"), FeedbackPattern::calculate(&w("slate"), &w("crane")));
    assert!(narrowed.contains(&w("crane")));
    assert!(!narrowed.contains(&w("crate")));

    let weights = ScoringWeights {
        candidate: 0.0,
        ..ScoringWeights::default()
    };
    let unbiased = HeuristicScorer::new(&dictionary, weights);
    let bonus = scorer.score(&w("crane"), &narrowed) - unbiased.score(&w("crane"), &narrowed);
    assert!((bonus - ScoringWeights::default().candidate).abs() < 1e-12);
    let no_bonus = scorer.score(&w("crate"), &narrowed) - unbiased.score(&w("crate"), &narrowed);
    assert!(no_bonus.abs() < 1e-12);
}

#[test]
fn test_combination_table() {
    let dictionary = load_dictionary().unwrap();
    let scorer = HeuristicScorer::new(&dictionary, ScoringWeights::default());
    let table = scorer.combinations();
    assert_eq!(table.len(), 30);
    assert!(table.iter().all(|(_, weight)| *weight > 0.0 && *weight <= 1.0));
    assert_eq!(table.iter().filter(|(combo, _)| combo.len() == 2).count(), 20);

    let (top, _) = &table[0];
    let word = dictionary
        .iter()
        .find(|word| word.as_bytes().windows(2).any(|pair| pair == top.as_slice()))
        .unwrap();
    assert!(scorer.combination_bonus(word) >= 1.0);
}

#[test]
fn test_frequency_scorer_rewards_distinct_letters() {
    let dictionary = Arc::new(load_dictionary().unwrap());
    let scorer = FrequencyScorer::new(ScoringWeights::default());
    let set = CandidateSet::full(dictionary);
    assert!(scorer.score(&w("crane"), &set) > scorer.score(&w("eerie"), &set));
    assert_eq!(scorer.name(), "frequency");
}

#[test]
fn test_shortlist_layout() {
    let dictionary = load_dictionary().unwrap();
    let scorer = HeuristicScorer::new(&dictionary, ScoringWeights::default());
    let set = CandidateSet::full(Arc::new(dictionary));
    let guess = w("raise");
    let narrowed = set.filter(&guess, FeedbackPattern::calculate(&guess, &w("seeds")));
    assert!(narrowed.len() > 2);

    let list = shortlist(&scorer, &narrowed, 2, 3);
    assert_eq!(list.len(), 5);
    assert!(list[..2].iter().all(|s| s.is_possible_answer));
    assert!(list[2..].iter().all(|s| !s.is_possible_answer));
    assert!(list[0].score >= list[1].score);
    assert!(list[2].score >= list[3].score && list[3].score >= list[4].score);
    for scored in &list {
        assert_eq!(scored.is_possible_answer, narrowed.contains(&scored.word));
    }
}

#[test]
fn test_shortlist_is_capped_by_candidates() {
    let set = small_set(&["crane", "slate", "trace"]);
    let scorer = FrequencyScorer::new(ScoringWeights::default());
    let list = shortlist(&scorer, &set, 20, 10);
    // every word is a candidate, so there are no probes
    assert_eq!(list.len(), 3);
}
