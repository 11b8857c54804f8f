//! Fixed opening word followed by greedy coverage

use super::{CoverageSolver, Solver};
use crate::core::Word;
use crate::game::{Game, Guess};
use crate::wordlists::WordBank;

/// Always opens with the same word, then plays like [`CoverageSolver`]
#[derive(Debug, Clone)]
pub struct OpeningSolver<'a> {
    opening: Word,
    inner: CoverageSolver<'a>,
}

impl<'a> OpeningSolver<'a> {
    #[must_use]
    pub fn new(bank: &'a WordBank, opening: Word) -> Self {
        Self {
            opening,
            inner: CoverageSolver::new(bank),
        }
    }

    #[must_use]
    pub const fn opening(&self) -> &Word {
        &self.opening
    }
}

impl Solver for OpeningSolver<'_> {
    fn next_guess(&mut self, game: &Game<'_>) -> Option<Word> {
        if game.guesses().is_empty() {
            return Some(self.opening.clone());
        }
        self.inner.next_guess(game)
    }

    fn on_feedback(&mut self, guess: &Guess) {
        self.inner.on_feedback(guess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn opens_with_fixed_word() {
        let bank = WordBank::embedded().unwrap();
        let mut game = Game::new(&bank, &word("those")).unwrap();
        let mut solver = OpeningSolver::new(&bank, word("slate"));

        game.play(&mut solver).unwrap();
        assert_eq!(game.guesses()[0].word().text(), "slate");
        assert!(solver.inner.constraints().has_guessed(&word("slate")));
    }

    #[test]
    fn opening_that_is_the_target_wins_at_once() {
        let bank = WordBank::embedded().unwrap();
        let mut game = Game::new(&bank, &word("crane")).unwrap();

        let status = game.play(&mut OpeningSolver::new(&bank, word("crane"))).unwrap();
        assert_eq!(status, GameStatus::Won);
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn opening_outside_bank_is_rejected_by_game() {
        let bank = WordBank::embedded().unwrap();
        let mut game = Game::new(&bank, &word("crane")).unwrap();

        assert!(game.play(&mut OpeningSolver::new(&bank, word("qqqqq"))).is_err());
    }
}
