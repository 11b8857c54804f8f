//! Solver trait and runtime strategy selection
//!
//! A [`Solver`] proposes guesses and listens to the feedback a [`Game`]
//! hands back. [`StrategyType`] picks one of the built-in solvers by name.

use super::{CoverageSolver, FilterRules, OpeningSolver, RandomSolver};
use crate::core::Word;
use crate::game::{Game, Guess};
use crate::wordlists::WordBank;
use thiserror::Error;

/// A player of Wordle games
///
/// The game calls [`next_guess`](Solver::next_guess) once per turn, then
/// [`on_feedback`](Solver::on_feedback) with the evaluated guess, and finally
/// [`on_game_end`](Solver::on_game_end) once the game is decided.
pub trait Solver {
    /// Propose the next guess, or `None` to give up
    fn next_guess(&mut self, game: &Game<'_>) -> Option<Word>;

    /// Observe the feedback for the guess just played
    fn on_feedback(&mut self, _guess: &Guess) {}

    /// Observe the finished game
    fn on_game_end(&mut self, _game: &Game<'_>) {}
}

impl<S: Solver + ?Sized> Solver for Box<S> {
    fn next_guess(&mut self, game: &Game<'_>) -> Option<Word> {
        (**self).next_guess(game)
    }

    fn on_feedback(&mut self, guess: &Guess) {
        (**self).on_feedback(guess);
    }

    fn on_game_end(&mut self, game: &Game<'_>) {
        (**self).on_game_end(game);
    }
}

impl<S: Solver + ?Sized> Solver for &mut S {
    fn next_guess(&mut self, game: &Game<'_>) -> Option<Word> {
        (**self).next_guess(game)
    }

    fn on_feedback(&mut self, guess: &Guess) {
        (**self).on_feedback(guess);
    }

    fn on_game_end(&mut self, game: &Game<'_>) {
        (**self).on_game_end(game);
    }
}

/// Errors raised when resolving a strategy name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("unknown strategy '{0}' (expected coverage, positional, random or opening)")]
    Unknown(String),
    #[error("the opening strategy needs an opening word")]
    MissingOpening,
}

/// Built-in strategies, selectable at runtime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StrategyType {
    /// Greedy letter coverage over the remaining candidates
    #[default]
    Coverage,
    /// Greedy coverage that also rules out yellow letters at the position
    /// they were seen
    Positional,
    /// Uniformly random word from the bank each turn
    Random,
    /// Fixed first word, then greedy coverage
    Opening(Word),
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "coverage", "positional", "random", "opening". Passing an opening
    /// word to "coverage" upgrades it to the opening strategy.
    ///
    /// # Errors
    /// Returns `StrategyError::Unknown` for any other name and
    /// `StrategyError::MissingOpening` for "opening" without a word.
    pub fn from_name(name: &str, opening: Option<Word>) -> Result<Self, StrategyError> {
        match (name.to_ascii_lowercase().as_str(), opening) {
            ("coverage" | "greedy", None) => Ok(Self::Coverage),
            ("coverage" | "greedy" | "opening", Some(word)) => Ok(Self::Opening(word)),
            ("opening", None) => Err(StrategyError::MissingOpening),
            ("positional", _) => Ok(Self::Positional),
            ("random", _) => Ok(Self::Random),
            (other, _) => Err(StrategyError::Unknown(other.to_string())),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Coverage => "coverage",
            Self::Positional => "positional",
            Self::Random => "random",
            Self::Opening(_) => "opening",
        }
    }

    /// Filter rules the built solver narrows candidates with
    #[must_use]
    pub const fn filter_rules(&self) -> FilterRules {
        match self {
            Self::Positional => FilterRules::Positional,
            Self::Coverage | Self::Random | Self::Opening(_) => FilterRules::Coverage,
        }
    }

    /// Build a fresh solver for one game over `bank`
    #[must_use]
    pub fn build<'a>(&self, bank: &'a WordBank) -> Box<dyn Solver + 'a> {
        match self {
            Self::Coverage => Box::new(CoverageSolver::new(bank)),
            Self::Positional => Box::new(CoverageSolver::positional(bank)),
            Self::Random => Box::new(RandomSolver::new(bank)),
            Self::Opening(word) => Box::new(OpeningSolver::new(bank, word.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn from_name_resolves_builtin_strategies() {
        assert_eq!(StrategyType::from_name("coverage", None), Ok(StrategyType::Coverage));
        assert_eq!(StrategyType::from_name("Coverage", None), Ok(StrategyType::Coverage));
        assert_eq!(StrategyType::from_name("random", None), Ok(StrategyType::Random));
        assert_eq!(
            StrategyType::from_name("Positional", None),
            Ok(StrategyType::Positional)
        );
        assert_eq!(
            StrategyType::from_name("opening", Some(word("crane"))),
            Ok(StrategyType::Opening(word("crane")))
        );
        assert_eq!(
            StrategyType::from_name("coverage", Some(word("slate"))),
            Ok(StrategyType::Opening(word("slate")))
        );
    }

    #[test]
    fn from_name_rejects_bad_input() {
        assert_eq!(
            StrategyType::from_name("frequency", None),
            Err(StrategyError::Unknown("frequency".to_string()))
        );
        assert_eq!(
            StrategyType::from_name("opening", None),
            Err(StrategyError::MissingOpening)
        );
    }

    #[test]
    fn names_round_trip() {
        for strategy in [
            StrategyType::Coverage,
            StrategyType::Positional,
            StrategyType::Random,
            StrategyType::Opening(word("crane")),
        ] {
            let opening = match &strategy {
                StrategyType::Opening(w) => Some(w.clone()),
                _ => None,
            };
            assert_eq!(StrategyType::from_name(strategy.name(), opening), Ok(strategy));
        }
    }

    #[test]
    fn built_solvers_play_through_box() {
        let bank = WordBank::new(words_from_slice(&["cat", "car", "bar", "bat"])).unwrap();

        for strategy in [
            StrategyType::Coverage,
            StrategyType::Positional,
            StrategyType::Opening(word("bar")),
        ] {
            let mut solver = strategy.build(&bank);
            let mut game = Game::new(&bank, &word("car")).unwrap();
            assert_eq!(game.play(&mut solver), Ok(GameStatus::Won));
        }
    }

    #[test]
    fn only_positional_uses_positional_rules() {
        assert_eq!(StrategyType::Positional.filter_rules(), FilterRules::Positional);
        assert_eq!(StrategyType::Coverage.filter_rules(), FilterRules::Coverage);
        assert_eq!(StrategyType::Random.filter_rules(), FilterRules::Coverage);
    }

    #[test]
    fn mutable_reference_is_a_solver() {
        let bank = WordBank::new(words_from_slice(&["cat", "car", "bar", "bat"])).unwrap();
        let mut inner = CoverageSolver::new(&bank);
        let mut by_ref = &mut inner;

        let mut game = Game::new(&bank, &word("car")).unwrap();
        assert_eq!(game.play(&mut by_ref), Ok(GameStatus::Won));
        assert_eq!(inner.candidates(), vec![&word("car")]);
    }
}
