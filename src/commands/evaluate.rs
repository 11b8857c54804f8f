//! Evaluate command
//!
//! Measures a strategy's mean score over many random targets.

use crate::harness::{DEFAULT_TRIALS, Harness, HarnessError};
use crate::solver::StrategyType;
use crate::wordlists::WordBank;
use std::time::{Duration, Instant};

/// Configuration for an evaluation run
#[derive(Debug, Clone)]
pub struct EvaluateConfig {
    pub trials: usize,
    pub strategy: StrategyType,
    pub seed: Option<u64>,
    pub parallel: bool,
    pub progress: bool,
}

impl Default for EvaluateConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            strategy: StrategyType::default(),
            seed: None,
            parallel: false,
            progress: false,
        }
    }
}

impl EvaluateConfig {
    #[must_use]
    pub fn new(trials: usize, strategy: StrategyType) -> Self {
        Self {
            trials,
            strategy,
            ..Self::default()
        }
    }
}

/// Result of an evaluation run
#[derive(Debug, Clone)]
pub struct EvaluationResult {
    pub strategy: &'static str,
    pub games: usize,
    pub mean_score: f64,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run the harness for the configured strategy
///
/// # Errors
///
/// Returns `HarnessError` if the trial count is zero or a game fails.
pub fn run_evaluation(
    bank: &WordBank,
    config: &EvaluateConfig,
) -> Result<EvaluationResult, HarnessError> {
    let mut harness = Harness::new(bank).trials(config.trials);
    if let Some(seed) = config.seed {
        harness = harness.seed(seed);
    }
    if config.parallel {
        harness = harness.parallel();
    }
    if config.progress {
        harness = harness.progress();
    }

    let start = Instant::now();
    let mean_score = harness.run(|game| config.strategy.build(game.bank()))?;
    let duration = start.elapsed();
    let games = config.trials.min(bank.len());

    Ok(EvaluationResult {
        strategy: config.strategy.name(),
        games,
        mean_score,
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
