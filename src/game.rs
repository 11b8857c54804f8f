//! A single Wordle game bound to one hidden target
//!
//! The game owns the guess log and the feedback rules, and drives any
//! [`Solver`] through the turn loop with [`Game::play`].

use crate::core::{Pattern, Word};
use crate::solver::Solver;
use crate::wordlists::WordBank;
use log::{debug, warn};
use rand::Rng;
use thiserror::Error;

/// Default number of guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// Errors raised while playing a game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("target '{0}' is not in the word bank")]
    TargetNotInWordBank(String),
    #[error("'{word}' has {found} letters, expected {expected}")]
    WrongLength {
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("'{0}' is not in the word bank")]
    NotInWordBank(String),
    #[error("the game is already over")]
    GameOver,
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One processed guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    pattern: Pattern,
}

impl Guess {
    #[must_use]
    pub const fn new(word: Word, pattern: Pattern) -> Self {
        Self { word, pattern }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.pattern.is_perfect()
    }
}

/// A game against one hidden target
#[derive(Debug, Clone)]
pub struct Game<'a> {
    bank: &'a WordBank,
    target: Word,
    guesses: Vec<Guess>,
    max_guesses: usize,
    god_mode: bool,
    status: GameStatus,
}

impl<'a> Game<'a> {
    /// Start a game against `target`
    ///
    /// # Errors
    /// Returns `GameError::TargetNotInWordBank` if the bank does not contain
    /// the target.
    pub fn new(bank: &'a WordBank, target: &Word) -> Result<Self, GameError> {
        let target = bank
            .get(target.text())
            .ok_or_else(|| GameError::TargetNotInWordBank(target.text().to_string()))?
            .clone();

        Ok(Self {
            bank,
            target,
            guesses: Vec::new(),
            max_guesses: MAX_GUESSES,
            god_mode: false,
            status: GameStatus::InProgress,
        })
    }

    /// Start a game against a uniformly random target
    pub fn random<R: Rng + ?Sized>(bank: &'a WordBank, rng: &mut R) -> Self {
        Self {
            bank,
            target: bank.choose(rng).clone(),
            guesses: Vec::new(),
            max_guesses: MAX_GUESSES,
            god_mode: false,
            status: GameStatus::InProgress,
        }
    }

    /// Reveal the target to the solver and lift the guess budget
    #[must_use]
    pub fn god_mode(self, enabled: bool) -> Self {
        Self {
            god_mode: enabled,
            ..self
        }
    }

    /// Change the guess budget; a budget of zero is raised to one
    #[must_use]
    pub fn max_guesses(self, max_guesses: usize) -> Self {
        Self {
            max_guesses: max_guesses.max(1),
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub const fn bank(&self) -> &'a WordBank {
        self.bank
    }

    /// The target, visible only in god mode or once the game has ended
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        (self.god_mode || self.is_over()).then_some(&self.target)
    }

    /// Guesses processed so far, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn num_guesses_taken(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub const fn guess_budget(&self) -> usize {
        self.max_guesses
    }

    /// Guesses left, or `None` when the budget is lifted in god mode
    #[must_use]
    pub fn remaining_guesses(&self) -> Option<usize> {
        (!self.god_mode).then(|| self.max_guesses.saturating_sub(self.guesses.len()))
    }

    #[inline]
    #[must_use]
    pub const fn is_god_mode(&self) -> bool {
        self.god_mode
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Guesses taken if won, otherwise one more than the budget
    #[must_use]
    pub fn score(&self) -> usize {
        if self.won() {
            self.guesses.len()
        } else {
            self.max_guesses + 1
        }
    }

    /// Evaluate one guess and record it
    ///
    /// # Errors
    /// Returns `GameError::GameOver` after a win or loss, `WrongLength` or
    /// `NotInWordBank` for illegal guesses. Illegal guesses do not use up a
    /// turn.
    pub fn submit(&mut self, word: &Word) -> Result<&Guess, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let expected = self.bank.word_length();
        if word.length() != expected {
            return Err(GameError::WrongLength {
                word: word.text().to_string(),
                expected,
                found: word.length(),
            });
        }

        if !self.bank.contains(word.text()) {
            return Err(GameError::NotInWordBank(word.text().to_string()));
        }

        let pattern = Pattern::calculate(word, &self.target);
        debug!(
            "guess {} of {}: {word} {}",
            self.guesses.len() + 1,
            self.max_guesses,
            pattern.to_emoji()
        );

        if pattern.is_perfect() {
            self.status = GameStatus::Won;
        } else if !self.god_mode && self.guesses.len() + 1 >= self.max_guesses {
            self.status = GameStatus::Lost;
        }

        self.guesses.push(Guess::new(word.clone(), pattern));
        Ok(&self.guesses[self.guesses.len() - 1])
    }

    /// Give up: the game ends as a loss
    pub fn abandon(&mut self) {
        if !self.is_over() {
            self.status = GameStatus::Lost;
        }
    }

    /// Drive a solver until the game is won, lost, or the solver gives up
    ///
    /// Each turn asks the solver for a guess, evaluates it, and reports the
    /// feedback back. The solver hears about the end of the game exactly once.
    ///
    /// # Errors
    /// Returns the first `GameError` caused by an illegal guess. The solver's
    /// `on_game_end` is not called in that case.
    ///
    /// # Examples
    /// ```
    /// use wordle_coverage::core::Word;
    /// use wordle_coverage::game::{Game, GameStatus};
    /// use wordle_coverage::solver::CoverageSolver;
    /// use wordle_coverage::wordlists::{WordBank, loader::words_from_slice};
    ///
    /// let bank = WordBank::new(words_from_slice(&["cat", "car", "bar", "bat"])).unwrap();
    /// let mut game = Game::new(&bank, &Word::new("car").unwrap()).unwrap();
    ///
    /// let status = game.play(&mut CoverageSolver::new(&bank)).unwrap();
    /// assert_eq!(status, GameStatus::Won);
    /// assert_eq!(game.num_guesses_taken(), 2);
    /// ```
    pub fn play<S: Solver + ?Sized>(&mut self, solver: &mut S) -> Result<GameStatus, GameError> {
        while !self.is_over() {
            let Some(word) = solver.next_guess(self) else {
                warn!(
                    "solver gave up after {} guesses on target {}",
                    self.guesses.len(),
                    self.target
                );
                self.abandon();
                break;
            };

            let guess = self.submit(&word)?;
            solver.on_feedback(guess);
        }

        solver.on_game_end(self);
        Ok(self.status)
    }
}
