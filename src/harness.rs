//! Batch evaluation of solvers
//!
//! A [`Harness`] plays one game per sampled target, each with a fresh solver,
//! and reports the mean [`Game::score`]. Lower is better.

use crate::core::Word;
use crate::game::{Game, GameError, MAX_GUESSES};
use crate::solver::Solver;
use crate::wordlists::WordBank;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rayon::prelude::*;
use std::time::Instant;
use thiserror::Error;

/// Default number of games per evaluation
pub const DEFAULT_TRIALS: usize = 100;

/// Errors raised by an evaluation run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    #[error("trial count must be positive, got {0}")]
    InvalidTrialCount(usize),
    #[error("trial aborted")]
    Game(#[from] GameError),
}

/// Runs a solver over many random targets
///
/// Configuration methods consume the harness and return a new one.
///
/// # Examples
///
/// ```
/// use wordle_coverage::harness::Harness;
/// use wordle_coverage::solver::CoverageSolver;
/// use wordle_coverage::wordlists::WordBank;
///
/// let bank = WordBank::embedded().unwrap();
/// let mean = Harness::new(&bank)
///     .trials(20)
///     .seed(7)
///     .run(|game| CoverageSolver::new(game.bank()))
///     .unwrap();
///
/// assert!((1.0..=7.0).contains(&mean));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Harness<'a> {
    bank: &'a WordBank,
    trials: usize,
    max_guesses: usize,
    parallel: bool,
    progress: bool,
    seed: Option<u64>,
}

impl<'a> Harness<'a> {
    /// Creates a harness with default configuration.
    ///
    /// Defaults:
    /// 1. 100 games on targets drawn at random without replacement
    /// 2. the standard six-guess budget
    /// 3. sequential, no progress bar, unseeded
    #[must_use]
    pub const fn new(bank: &'a WordBank) -> Self {
        Self {
            bank,
            trials: DEFAULT_TRIALS,
            max_guesses: MAX_GUESSES,
            parallel: false,
            progress: false,
            seed: None,
        }
    }

    /// Number of games to play; capped at the bank size when run
    #[must_use]
    pub const fn trials(self, trials: usize) -> Self {
        Self { trials, ..self }
    }

    /// Guess budget per game; a budget of zero is raised to one
    #[must_use]
    pub const fn max_guesses(self, max_guesses: usize) -> Self {
        Self {
            max_guesses: if max_guesses == 0 { 1 } else { max_guesses },
            ..self
        }
    }

    /// Play games on the rayon thread pool
    #[must_use]
    pub const fn parallel(self) -> Self {
        Self {
            parallel: true,
            ..self
        }
    }

    /// Show a progress bar on stderr
    #[must_use]
    pub const fn progress(self) -> Self {
        Self {
            progress: true,
            ..self
        }
    }

    /// Make the target sample reproducible
    #[must_use]
    pub const fn seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Targets that a run will play, in play order
    ///
    /// # Errors
    /// Returns `HarnessError::InvalidTrialCount` when the trial count is zero.
    pub fn targets(&self) -> Result<Vec<&'a Word>, HarnessError> {
        if self.trials == 0 {
            return Err(HarnessError::InvalidTrialCount(self.trials));
        }

        let words = self.bank.words();
        let amount = self.trials.min(words.len());
        let indices = match self.seed {
            Some(seed) => sample(&mut StdRng::seed_from_u64(seed), words.len(), amount),
            None => sample(&mut rand::rng(), words.len(), amount),
        };

        Ok(indices.iter().map(|i| &words[i]).collect())
    }

    /// Play every sampled target and return the per-game scores
    ///
    /// `make_solver` is called once per game with the fresh game, so solvers
    /// never share state across games.
    ///
    /// # Errors
    /// Returns `HarnessError::InvalidTrialCount` for zero trials, or
    /// `HarnessError::Game` if a solver makes an illegal guess.
    pub fn scores<S, F>(&self, make_solver: F) -> Result<Vec<usize>, HarnessError>
    where
        S: Solver,
        F: Fn(&Game<'a>) -> S + Sync,
    {
        let targets = self.targets()?;
        let bar = self.progress_bar(targets.len());

        let play = |target: &Word| {
            let score = self.play_one(target, &make_solver);
            bar.inc(1);
            score
        };

        let scores = if self.parallel {
            targets
                .par_iter()
                .map(|&target| play(target))
                .collect::<Result<Vec<_>, _>>()
        } else {
            targets
                .iter()
                .map(|&target| play(target))
                .collect::<Result<Vec<_>, _>>()
        };

        bar.finish_and_clear();
        Ok(scores?)
    }

    /// Play every sampled target and return the mean score
    ///
    /// # Errors
    /// Same as [`scores`](Harness::scores).
    pub fn run<S, F>(&self, make_solver: F) -> Result<f64, HarnessError>
    where
        S: Solver,
        F: Fn(&Game<'a>) -> S + Sync,
    {
        let start = Instant::now();
        let scores = self.scores(make_solver)?;

        let total: usize = scores.iter().sum();
        let mean = total as f64 / scores.len() as f64;

        info!(
            "evaluated {} games in {:.2?}: mean score {mean:.4}",
            scores.len(),
            start.elapsed()
        );
        Ok(mean)
    }

    fn play_one<S, F>(&self, target: &Word, make_solver: &F) -> Result<usize, GameError>
    where
        S: Solver,
        F: Fn(&Game<'a>) -> S,
    {
        let mut game = Game::new(self.bank, target)?.max_guesses(self.max_guesses);
        let mut solver = make_solver(&game);
        let status = game.play(&mut solver)?;

        debug!(
            "target {target}: {status:?} in {} guesses, score {}",
            game.num_guesses_taken(),
            game.score()
        );
        Ok(game.score())
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.progress {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({eta})",
        ) {
            bar.set_style(style.progress_chars("=>-"));
        }
        bar
    }
}

/// Mean score of `make_solver` over `trials` random targets from `bank`
///
/// # Errors
/// See [`Harness::run`].
pub fn evaluate_solver<'a, S, F>(
    bank: &'a WordBank,
    trials: usize,
    make_solver: F,
) -> Result<f64, HarnessError>
where
    S: Solver,
    F: Fn(&Game<'a>) -> S + Sync,
{
    Harness::new(bank).trials(trials).run(make_solver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{CoverageSolver, RandomSolver, StrategyType};
    use crate::wordlists::loader::words_from_slice;

    fn toy_bank() -> WordBank {
        WordBank::new(words_from_slice(&["cat", "car", "bar", "bat"])).unwrap()
    }

    /// Always guesses a word outside the bank
    struct Cheater;

    impl Solver for Cheater {
        fn next_guess(&mut self, _game: &Game<'_>) -> Option<Word> {
            Word::new("zzz").ok()
        }
    }

    #[test]
    fn zero_trials_rejected_up_front() {
        let bank = toy_bank();
        let result = evaluate_solver(&bank, 0, |game| CoverageSolver::new(game.bank()));
        assert_eq!(result, Err(HarnessError::InvalidTrialCount(0)));
    }

    #[test]
    fn trials_capped_at_bank_size() {
        let bank = toy_bank();
        let targets = Harness::new(&bank).trials(50).targets().unwrap();
        assert_eq!(targets.len(), bank.len());

        let mut texts: Vec<&str> = targets.iter().map(|w| w.text()).collect();
        texts.sort_unstable();
        assert_eq!(texts, ["bar", "bat", "car", "cat"]);
    }

    #[test]
    fn toy_bank_mean_is_exact() {
        // cat in 1, car/bar/bat in 2 each
        let bank = toy_bank();
        let mean = Harness::new(&bank)
            .trials(4)
            .run(|game| CoverageSolver::new(game.bank()))
            .unwrap();
        assert!((mean - 7.0 / 4.0).abs() < 1e-12);
    }

    #[test]
    fn zero_budget_plays_one_guess() {
        // Only "cat" is found with a single guess
        let bank = toy_bank();
        let mut scores = Harness::new(&bank)
            .trials(4)
            .max_guesses(0)
            .scores(|game| CoverageSolver::new(game.bank()))
            .unwrap();
        scores.sort_unstable();
        assert_eq!(scores, [1, 2, 2, 2]);
    }

    #[test]
    fn positional_strategy_mean_within_bounds() {
        let bank = WordBank::embedded().unwrap();
        let mean = Harness::new(&bank)
            .trials(30)
            .seed(3)
            .run(|game| StrategyType::Positional.build(game.bank()))
            .unwrap();
        assert!((1.0..=(MAX_GUESSES + 1) as f64).contains(&mean));
    }

    #[test]
    fn mean_within_bounds() {
        let bank = WordBank::embedded().unwrap();
        for trials in [1, 10, 40] {
            let mean =
                evaluate_solver(&bank, trials, |game| RandomSolver::new(game.bank())).unwrap();
            assert!((1.0..=(MAX_GUESSES + 1) as f64).contains(&mean));
        }
    }

    #[test]
    fn seeded_runs_repeat() {
        let bank = WordBank::embedded().unwrap();
        let harness = Harness::new(&bank).trials(25).seed(42);

        assert_eq!(harness.targets().unwrap(), harness.targets().unwrap());
        let first = harness.run(|game| CoverageSolver::new(game.bank())).unwrap();
        let second = harness.run(|game| CoverageSolver::new(game.bank())).unwrap();
        assert!((first - second).abs() < f64::EPSILON);
    }

    #[test]
    fn parallel_matches_sequential() {
        let bank = WordBank::embedded().unwrap();
        let harness = Harness::new(&bank).trials(30).seed(9);

        let sequential = harness.scores(|game| CoverageSolver::new(game.bank())).unwrap();
        let parallel = harness
            .parallel()
            .scores(|game| CoverageSolver::new(game.bank()))
            .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn accepts_boxed_strategies() {
        let bank = WordBank::embedded().unwrap();
        let strategy = StrategyType::from_name("opening", Word::new("slate").ok()).unwrap();

        let mean = Harness::new(&bank)
            .trials(10)
            .seed(1)
            .run(|game| strategy.build(game.bank()))
            .unwrap();
        assert!((1.0..=7.0).contains(&mean));
    }

    #[test]
    fn illegal_guess_aborts_evaluation() {
        let bank = toy_bank();
        let result = Harness::new(&bank).trials(2).run(|_| Cheater);
        assert_eq!(
            result,
            Err(HarnessError::Game(GameError::NotInWordBank("zzz".to_string())))
        );
    }
}
