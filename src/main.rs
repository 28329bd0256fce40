//! Wordle Engine CLI
//!
//! Interactive command-line interface and simulation runner for the solver.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use wordle_engine::{
    benchmark, load_dictionary, Dictionary, FeedbackPattern, GameStatus, GuessAnalysis,
    GuessSource, SolverConfig, Strategy, Word, WordleSolver,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word list with one word per line (defaults to the embedded list)
    #[arg(long, global = true)]
    words: Option<PathBuf>,

    /// Solver configuration as JSON; missing keys keep their defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// How guesses are picked after the opening move
    #[arg(long, global = true, value_enum, default_value_t = StrategyKind::Optimized)]
    strategy: StrategyKind,

    /// Enable debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyKind {
    /// Heuristic shortlist with entropy selection
    Optimized,
    /// Letter frequency only
    Basic,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Suggest guesses for a game played elsewhere (default)
    Interactive,
    /// Watch the solver play against a target word
    Solve { target: String },
    /// Print the opening guess
    Suggest,
    /// Play every dictionary word and report the guess distribution
    Benchmark(BenchmarkArg),
}

#[derive(Debug, Args)]
struct BenchmarkArg {
    /// Only play the first N dictionary words
    #[arg(long)]
    limit: Option<usize>,
}

struct Engine {
    dictionary: Arc<Dictionary>,
    config: SolverConfig,
    strategy: Strategy,
}

impl Engine {
    fn load(cli: &Cli) -> anyhow::Result<Self> {
        let dictionary = match &cli.words {
            Some(path) => read_word_list(path)?,
            None => load_dictionary().context("embedded word list")?,
        };
        let config = match &cli.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                SolverConfig::from_json(&json)
                    .with_context(|| format!("failed to load config {}", path.display()))?
            }
            None => SolverConfig::default(),
        };
        let strategy = match cli.strategy {
            StrategyKind::Optimized => Strategy::optimized(&dictionary, &config.weights),
            StrategyKind::Basic => Strategy::basic(&config.weights),
        };
        Ok(Self {
            dictionary: Arc::new(dictionary),
            config,
            strategy,
        })
    }

    fn solver(&self) -> anyhow::Result<WordleSolver> {
        Ok(WordleSolver::with_strategy(
            Arc::clone(&self.dictionary),
            self.config.clone(),
            self.strategy.clone(),
        )?)
    }
}

fn read_word_list(path: &Path) -> anyhow::Result<Dictionary> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;
    let words: Vec<String> = text
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();
    Dictionary::new(&words).with_context(|| format!("bad word list {}", path.display()))
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            while running_clone.load(Ordering::Relaxed) {
                print!("\r{} {}", frames[i % frames.len()], message);
                let _ = io::stdout().flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            print!("\r{}\r", " ".repeat(message.len() + 3));
            let _ = io::stdout().flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn print_banner() {
    for line in BANNER_TEXT.lines().take(6) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

fn print_analysis(analysis: &GuessAnalysis, remaining: usize) {
    println!();
    println!("Best guess: {} ", analysis.word.to_string().to_uppercase());
    match analysis.source {
        GuessSource::Starter => println!("  Opening word from the starter list"),
        GuessSource::SoleCandidate => println!("  Only one possibility left"),
        GuessSource::Selected => {}
    }
    println!("  Entropy: {:.3} bits", analysis.entropy);
    println!("  Expected remaining: {:.1} words", analysis.expected_remaining);
    println!("  Heuristic score: {:.3}", analysis.score);
    if analysis.is_possible_answer {
        println!("  ✓ This word is a possible answer");
    } else {
        println!("  ✗ This word is NOT a possible answer");
    }
    println!();
    println!("Remaining possibilities: {}", remaining);
    println!();
}

fn print_game(guesses: &[(Word, FeedbackPattern)], status: GameStatus) {
    for (i, (guess, pattern)) in guesses.iter().enumerate() {
        println!(
            "Guess {}: {} → {}",
            i + 1,
            guess.to_string().to_uppercase(),
            pattern
        );
    }
    println!();
    match status {
        GameStatus::Solved { attempts } => println!("✓ Solved in {} guesses!", attempts),
        GameStatus::Failed { attempts } => {
            println!("✗ Failed to solve within {} guesses.", attempts)
        }
        GameStatus::AwaitingGuess { .. } => {}
    }
}

fn parse_word(input: &str) -> Option<Word> {
    match Word::parse(&input.to_lowercase()) {
        Ok(word) => Some(word),
        Err(e) => {
            println!("{}", e);
            None
        }
    }
}

fn run_interactive(engine: &Engine) -> anyhow::Result<()> {
    print_banner();
    println!("Loaded {} words.", engine.dictionary.len());
    println!();

    let mut solver = engine.solver()?;
    println!("Type 'help' for commands or 'suggest' to get started.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => {
                print_help();
            }
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "suggest" | "s" | "best" => match solver.find_best_guess() {
                Ok(analysis) => print_analysis(&analysis, solver.remaining_count()),
                Err(e) => {
                    println!("{}", e);
                    println!("Use 'reset' to start over.");
                }
            },
            "top" | "t" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);
                match solver.top_guesses(n) {
                    Ok(top) => {
                        println!();
                        println!("Top {} guesses:", top.len());
                        println!(
                            "{:>4} {:>8} {:>8} {:>12} {:>8} Possible?",
                            "#", "Word", "Entropy", "Exp. Remain", "Score"
                        );
                        println!("{}", "-".repeat(60));
                        for (i, analysis) in top.iter().enumerate() {
                            println!(
                                "{:>4} {:>8} {:>8.3} {:>12.1} {:>8.3} {}",
                                i + 1,
                                analysis.word.to_string().to_uppercase(),
                                analysis.entropy,
                                analysis.expected_remaining,
                                analysis.score,
                                if analysis.is_possible_answer { "✓" } else { "" }
                            );
                        }
                        println!();
                    }
                    Err(e) => println!("{}", e),
                }
            }
            "feedback" | "f" | "fb" => {
                if parts.len() < 3 {
                    println!("Usage: feedback <word> <pattern>");
                    println!("Example: feedback raise gybbb");
                    continue;
                }

                let Some(word) = parse_word(parts[1]) else {
                    continue;
                };
                let pattern = match FeedbackPattern::parse(parts[2]) {
                    Ok(pattern) => pattern,
                    Err(e) => {
                        println!("{}", e);
                        println!("Use g=green, y=yellow, b=black (5 characters)");
                        continue;
                    }
                };

                let prev_count = solver.remaining_count();
                match solver.apply_feedback(&word, pattern) {
                    Ok(status) => {
                        let new_count = solver.remaining_count();
                        println!();
                        println!("Guess: {}", word.to_string().to_uppercase());
                        println!("Feedback: {}", pattern);
                        match status {
                            GameStatus::Solved { attempts } => {
                                println!();
                                println!("🎉 Solved in {} guesses!", attempts);
                            }
                            GameStatus::Failed { attempts } => {
                                println!();
                                println!("Out of guesses after {} attempts.", attempts);
                            }
                            GameStatus::AwaitingGuess { .. } => {
                                println!(
                                    "Eliminated {} words ({} → {})",
                                    prev_count - new_count,
                                    prev_count,
                                    new_count
                                );
                                if new_count <= 10 {
                                    println!();
                                    println!(
                                        "Remaining words: {:?}",
                                        solver
                                            .possible_answers()
                                            .iter()
                                            .map(|w| w.to_string().to_uppercase())
                                            .collect::<Vec<_>>()
                                    );
                                }
                            }
                        }
                        println!();
                    }
                    Err(e) => {
                        println!();
                        println!("⚠️  {}", e);
                        println!("The feedback was not applied; check it and try again.");
                        println!();
                    }
                }
            }
            "remaining" | "r" | "left" => {
                let remaining = solver.possible_answers();
                println!();
                println!("Remaining possibilities: {}", remaining.len());
                if remaining.len() <= 20 {
                    for (i, word) in remaining.iter().enumerate() {
                        if i > 0 && i % 10 == 0 {
                            println!();
                        }
                        print!("{:>8}", word.to_string().to_uppercase());
                    }
                    println!();
                }
                println!();
            }
            "history" => {
                println!();
                print_game(solver.history(), solver.status());
                println!();
            }
            "solve" => {
                if parts.len() < 2 {
                    println!("Usage: solve <target_word>");
                    continue;
                }
                let Some(target) = parse_word(parts[1]) else {
                    continue;
                };

                println!();
                println!("Solving for: {}", target.to_string().to_uppercase());
                println!();

                let mut game = engine.solver()?;
                match game.solve_for_target(&target) {
                    Ok(guesses) => print_game(&guesses, game.status()),
                    Err(e) => println!("{}", e),
                }
                println!();
            }
            "reset" => {
                solver.reset();
                println!(
                    "Reset to initial state. {} words available.",
                    solver.remaining_count()
                );
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }
    Ok(())
}

fn run_solve(engine: &Engine, target: &str) -> anyhow::Result<()> {
    let target = Word::parse(&target.to_lowercase())?;
    let mut solver = engine.solver()?;

    println!("Solving for: {}", target.to_string().to_uppercase());
    println!();

    let guesses = solver.solve_for_target(&target)?;
    print_game(&guesses, solver.status());
    Ok(())
}

fn run_suggest(engine: &Engine) -> anyhow::Result<()> {
    let solver = engine.solver()?;
    let analysis = solver.find_best_guess()?;
    println!("Best opening guess: {}", analysis.word.to_string().to_uppercase());
    println!("Entropy: {:.3} bits", analysis.entropy);
    Ok(())
}

fn run_benchmark(engine: &Engine, arg: &BenchmarkArg) -> anyhow::Result<()> {
    let words = engine.dictionary.words();
    let targets = &words[..arg.limit.unwrap_or(words.len()).min(words.len())];
    if targets.is_empty() {
        bail!("nothing to benchmark");
    }

    println!();
    println!("Running benchmark on {} words...", targets.len());

    let spinner = Spinner::new("Computing...");
    let start = std::time::Instant::now();
    let result = benchmark(
        Arc::clone(&engine.dictionary),
        targets,
        &engine.config,
        &engine.strategy,
    );
    let elapsed = start.elapsed();
    spinner.stop();
    let report = result?;

    let total = report.games();
    println!("Results:");
    println!("{}", "=".repeat(40));
    println!();
    println!("Guess distribution:");
    for (guesses, count) in report.distribution() {
        let pct = count as f64 / total as f64 * 100.0;
        let bar = "█".repeat((count * 40 / total).max(1));
        println!("  {} guesses: {:>5} ({:>5.1}%) {}", guesses, count, pct, bar);
    }
    println!();
    println!("Average guesses: {:.3}", report.average_guesses());
    println!("Solve rate: {:.1}%", report.solve_rate() * 100.0);
    println!("Total words: {}", total);
    println!("Time elapsed: {:.2?}", elapsed);

    let failures = report.failed_words();
    if failures.is_empty() {
        println!(
            "✓ All words solved within {} guesses!",
            engine.config.max_attempts
        );
    } else {
        println!(
            "Words not solved in {} guesses: {}",
            engine.config.max_attempts,
            failures.len()
        );
        for word in failures {
            println!("  {}", word.to_string().to_uppercase());
        }
    }
    println!();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    let engine = Engine::load(&cli)?;

    match cli.mode.unwrap_or(Mode::Interactive) {
        Mode::Interactive => run_interactive(&engine),
        Mode::Solve { target } => run_solve(&engine, &target),
        Mode::Suggest => run_suggest(&engine),
        Mode::Benchmark(arg) => run_benchmark(&engine, &arg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_is_a_global_flag() {
        let cli =
            Cli::try_parse_from(["wordle-engine", "benchmark", "--limit", "3", "--strategy", "basic"])
                .unwrap();
        assert!(matches!(cli.strategy, StrategyKind::Basic));
        assert!(matches!(
            cli.mode,
            Some(Mode::Benchmark(BenchmarkArg { limit: Some(3) }))
        ));

        let cli = Cli::try_parse_from(["wordle-engine", "suggest"]).unwrap();
        assert!(matches!(cli.strategy, StrategyKind::Optimized));
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(Cli::try_parse_from(["wordle-engine", "--strategy", "greedy", "suggest"]).is_err());
    }
}
