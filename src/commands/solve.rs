//! Word solving command
//!
//! Plays one game against a known target and records the solution path.

use crate::core::{Pattern, Word, WordError};
use crate::game::{Game, GameError, Guess, MAX_GUESSES};
use crate::solver::{ConstraintSet, FilterRules, Solver, StrategyType};
use crate::wordlists::WordBank;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("invalid target word")]
    InvalidTarget(#[from] WordError),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub strategy: StrategyType,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, strategy: StrategyType) -> Self {
        Self {
            target,
            strategy,
            max_guesses: MAX_GUESSES,
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
    pub strategy: &'static str,
}

/// A single guess step in the solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Wraps a solver and tracks how each guess narrows the bank
struct Recorder<'a, S> {
    inner: S,
    bank: &'a WordBank,
    rules: FilterRules,
    constraints: ConstraintSet,
    steps: Vec<GuessStep>,
}

impl<S: Solver> Solver for Recorder<'_, S> {
    fn next_guess(&mut self, game: &Game<'_>) -> Option<Word> {
        self.inner.next_guess(game)
    }

    fn on_feedback(&mut self, guess: &Guess) {
        let candidates_before = self.rules.count(self.bank, &self.constraints);
        self.constraints.update(guess.word(), guess.pattern().as_slice());

        self.steps.push(GuessStep {
            word: guess.word().text().to_string(),
            pattern: guess.pattern().clone(),
            candidates_before,
            candidates_after: self.rules.count(self.bank, &self.constraints),
        });

        self.inner.on_feedback(guess);
    }

    fn on_game_end(&mut self, game: &Game<'_>) {
        self.inner.on_game_end(game);
    }
}

/// Solve a specific word with the configured strategy
///
/// # Errors
///
/// Returns an error if:
/// - The target word is not a valid word
/// - The target is not in the bank
/// - The strategy plays a word outside the bank
pub fn solve_word(bank: &WordBank, config: SolveConfig) -> Result<SolveResult, SolveError> {
    let target = Word::new(config.target)?;
    let mut game = Game::new(bank, &target)?.max_guesses(config.max_guesses);

    let mut recorder = Recorder {
        inner: config.strategy.build(bank),
        bank,
        rules: config.strategy.filter_rules(),
        constraints: ConstraintSet::new(bank.word_length()),
        steps: Vec::new(),
    };
    game.play(&mut recorder)?;

    Ok(SolveResult {
        success: game.won(),
        guesses: recorder.steps,
        target: target.text().to_string(),
        strategy: config.strategy.name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(target: &str, strategy: StrategyType) -> Result<SolveResult, SolveError> {
        let bank = WordBank::embedded().unwrap();
        solve_word(&bank, SolveConfig::new(target.to_string(), strategy))
    }

    #[test]
    fn solve_word_succeeds() {
        let result = solve("those", StrategyType::Coverage).unwrap();

        assert!(result.success || result.guesses.len() == MAX_GUESSES);
        assert!(!result.guesses.is_empty());
        assert_eq!(result.strategy, "coverage");
        if result.success {
            assert_eq!(result.guesses.last().unwrap().word, "those");
            assert_eq!(result.guesses.last().unwrap().candidates_after, 1);
        }
    }

    #[test]
    fn candidates_never_grow() {
        let result = solve("moist", StrategyType::Coverage).unwrap();

        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
        for pair in result.guesses.windows(2) {
            assert_eq!(pair[0].candidates_after, pair[1].candidates_before);
        }
    }

    #[test]
    fn toy_bank_path() {
        let bank = WordBank::new(crate::wordlists::loader::words_from_slice(&[
            "cat", "car", "bar", "bat",
        ]))
        .unwrap();
        let result =
            solve_word(&bank, SolveConfig::new("car".to_string(), StrategyType::Coverage)).unwrap();

        assert!(result.success);
        let path: Vec<(&str, usize, usize)> = result
            .guesses
            .iter()
            .map(|s| (s.word.as_str(), s.candidates_before, s.candidates_after))
            .collect();
        assert_eq!(path, [("cat", 4, 1), ("car", 1, 1)]);
    }

    #[test]
    fn positional_counts_use_positional_rules() {
        let bank = WordBank::embedded().unwrap();
        let result = solve("heart", StrategyType::Positional).unwrap();
        assert_eq!(result.strategy, "positional");
        assert!(result.success || result.guesses.len() == MAX_GUESSES);

        let first = &result.guesses[0];
        let mut constraints = ConstraintSet::new(5);
        constraints.update(&Word::new(first.word.as_str()).unwrap(), first.pattern.as_slice());
        assert_eq!(
            first.candidates_after,
            FilterRules::Positional.count(&bank, &constraints)
        );
    }

    #[test]
    fn opening_word_played_first() {
        let result = solve("heart", StrategyType::Opening(Word::new("slate").unwrap())).unwrap();
        assert_eq!(result.guesses[0].word, "slate");
        assert_eq!(result.strategy, "opening");
    }

    #[test]
    fn invalid_target_returns_error() {
        assert!(matches!(
            solve("sh0rt", StrategyType::Coverage),
            Err(SolveError::InvalidTarget(_))
        ));
        assert!(matches!(
            solve("zzzzz", StrategyType::Coverage),
            Err(SolveError::Game(GameError::TargetNotInWordBank(_)))
        ));
    }

    #[test]
    fn respects_max_guesses() {
        let bank = WordBank::embedded().unwrap();
        let mut config = SolveConfig::new("those".to_string(), StrategyType::Random);
        config.max_guesses = 2;

        let result = solve_word(&bank, config).unwrap();
        assert!(result.guesses.len() <= 2);
    }
}
