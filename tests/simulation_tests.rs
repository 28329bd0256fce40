use std::sync::Arc;
use wordle_engine::simulation::simulate;
use wordle_engine::{
    benchmark, load_dictionary, Dictionary, SolverConfig, SolverError, Strategy, Word,
    WordleSolver,
};

fn w(s: &str) -> Word {
    Word::parse(s).unwrap()
}

#[test]
fn test_benchmark_full_dictionary() {
    let dictionary = Arc::new(load_dictionary().unwrap());
    let config = SolverConfig::default();
    let strategy = Strategy::optimized(&dictionary, &config.weights);
    let targets = dictionary.words().to_vec();

    let report = benchmark(Arc::clone(&dictionary), &targets, &config, &strategy).unwrap();

    assert_eq!(report.games(), targets.len());
    assert!(
        report.solve_rate() > 0.95,
        "solve rate {:.3}, failed: {:?}",
        report.solve_rate(),
        report.failed_words()
    );
    assert!(report.average_guesses() <= 6.0);

    let distributed: usize = report.distribution().iter().map(|(_, count)| count).sum();
    assert_eq!(distributed, report.solved());
    assert!(report
        .distribution()
        .iter()
        .all(|(guesses, _)| *guesses >= 1 && *guesses <= config.max_attempts));
}

#[test]
fn test_benchmark_keeps_target_order() {
    let dictionary = Arc::new(load_dictionary().unwrap());
    let config = SolverConfig::default();
    let strategy = Strategy::basic(&config.weights);
    let targets = vec![w("fuzzy"), w("seeds"), w("raise")];

    let report = benchmark(dictionary, &targets, &config, &strategy).unwrap();
    let played: Vec<Word> = report.outcomes.iter().map(|o| o.target).collect();
    assert_eq!(played, targets);
    for outcome in &report.outcomes {
        assert!(outcome.attempts() >= 1);
        assert!(outcome.attempts() <= config.max_attempts);
    }
}

#[test]
fn test_unknown_target_reports_exhaustion() {
    let dictionary = Arc::new(Dictionary::new(["crane", "slate", "trace"]).unwrap());
    let config = SolverConfig::default();
    let strategy = Strategy::optimized(&dictionary, &config.weights);

    let result = benchmark(dictionary, &[w("zzzzz")], &config, &strategy);
    assert!(matches!(result, Err(SolverError::ExhaustedCandidates(_))));
}

#[test]
fn test_simulate_uses_fresh_state() {
    let dictionary = Arc::new(load_dictionary().unwrap());
    let mut template = WordleSolver::new(Arc::clone(&dictionary), SolverConfig::default()).unwrap();
    template.solve_for_target(&w("crane")).unwrap();

    let outcome = simulate(&template, &w("seeds")).unwrap();
    assert!(outcome.solved);
    assert_eq!(outcome.guesses.last().unwrap().0, w("seeds"));
    // the template itself is untouched
    assert!(template.status().is_terminal());
}

#[test]
fn test_empty_benchmark() {
    let report = wordle_engine::Benchmark::default();
    assert_eq!(report.solve_rate(), 0.0);
    assert_eq!(report.average_guesses(), 0.0);
    assert!(report.distribution().is_empty());
}
