//! Wordle Coverage Solver - CLI
//!
//! Play Wordle at the terminal, watch the greedy coverage solver work through
//! a target, or measure a strategy's mean score over many random games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use wordle_coverage::{
    commands::{EvaluateConfig, SolveConfig, run_evaluation, run_play, solve_word},
    core::Word,
    output::{print_evaluation_result, print_solve_result},
    solver::StrategyType,
    wordlists::{WordBank, loader::bank_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_coverage",
    about = "Wordle solver that greedily maximizes letter coverage over the remaining candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Increase log output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against a random word (default)
    Play {
        /// Show the solution and lift the guess limit
        #[arg(long)]
        god: bool,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Strategy: coverage (default), positional, random, opening
        #[arg(short, long, default_value = "coverage")]
        strategy: String,

        /// Fixed first guess (selects the opening strategy)
        #[arg(long)]
        opening: Option<String>,
    },

    /// Measure a strategy's mean score over random targets
    Evaluate {
        /// Number of random targets to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Strategy: coverage (default), positional, random, opening
        #[arg(short, long, default_value = "coverage")]
        strategy: String,

        /// Fixed first guess (selects the opening strategy)
        #[arg(long)]
        opening: Option<String>,

        /// Seed for a reproducible target sample
        #[arg(long)]
        seed: Option<u64>,

        /// Play games in parallel
        #[arg(long)]
        parallel: bool,

        /// Show a progress bar
        #[arg(long)]
        progress: bool,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load the word bank based on the -w flag
fn load_bank(wordlist: &str) -> Result<WordBank> {
    match wordlist {
        "embedded" => WordBank::embedded().context("embedded word list is malformed"),
        path => bank_from_file(path).with_context(|| format!("failed to load word list '{path}'")),
    }
}

fn resolve_strategy(name: &str, opening: Option<&str>) -> Result<StrategyType> {
    let opening = opening
        .map(Word::new)
        .transpose()
        .context("invalid opening word")?;
    Ok(StrategyType::from_name(name, opening)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let bank = load_bank(&cli.wordlist)?;
    log::info!("loaded {} words of length {}", bank.len(), bank.word_length());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { god: false });

    match command {
        Commands::Play { god } => run_play_command(&bank, god),
        Commands::Solve {
            word,
            strategy,
            opening,
        } => run_solve_command(&bank, word, &strategy, opening.as_deref(), cli.verbose > 0),
        Commands::Evaluate {
            count,
            strategy,
            opening,
            seed,
            parallel,
            progress,
        } => {
            let config = EvaluateConfig {
                trials: count,
                strategy: resolve_strategy(&strategy, opening.as_deref())?,
                seed,
                parallel,
                progress,
            };
            run_evaluate_command(&bank, &config)
        }
    }
}

fn run_play_command(bank: &WordBank, god: bool) -> Result<()> {
    let stdin = io::stdin();
    run_play(bank, god, &mut rand::rng(), stdin.lock(), io::stdout())
        .context("interactive session failed")?;
    Ok(())
}

fn run_solve_command(
    bank: &WordBank,
    word: String,
    strategy: &str,
    opening: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let config = SolveConfig::new(word, resolve_strategy(strategy, opening)?);
    let result = solve_word(bank, config).context("could not solve word")?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_evaluate_command(bank: &WordBank, config: &EvaluateConfig) -> Result<()> {
    println!(
        "Evaluating {} on {} random words...",
        config.strategy.name(),
        config.trials.min(bank.len())
    );

    let result = run_evaluation(bank, config).context("evaluation failed")?;
    print_evaluation_result(&result);
    Ok(())
}
