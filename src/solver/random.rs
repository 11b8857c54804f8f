//! Random baseline solver

use super::Solver;
use crate::core::Word;
use crate::game::Game;
use crate::wordlists::WordBank;

/// Guesses a uniformly random bank word every turn, ignoring all feedback
///
/// Repeats are allowed. Useful as a floor when comparing strategies.
#[derive(Debug, Clone, Copy)]
pub struct RandomSolver<'a> {
    bank: &'a WordBank,
}

impl<'a> RandomSolver<'a> {
    #[must_use]
    pub const fn new(bank: &'a WordBank) -> Self {
        Self { bank }
    }
}

impl Solver for RandomSolver<'_> {
    fn next_guess(&mut self, _game: &Game<'_>) -> Option<Word> {
        Some(self.bank.choose(&mut rand::rng()).clone())
    }
}
