//! Human player at a terminal
//!
//! Reads guesses line by line and prints colored feedback. Generic over the
//! reader and writer so games can be scripted in tests.

use crate::core::Word;
use crate::game::{Game, Guess};
use crate::output::formatters::colored_guess;
use crate::solver::Solver;
use colored::Colorize;
use log::warn;
use std::io::{BufRead, Write};

/// A [`Solver`] driven by lines of input
pub struct ConsoleSolver<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSolver<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn prompt(&mut self, game: &Game<'_>) {
        let text = match (game.revealed_target(), game.remaining_guesses()) {
            (Some(target), None) => format!(
                "THE SOLUTION IS {}. You have as many guesses left as you want.",
                target.text().to_uppercase()
            ),
            (_, Some(left)) => format!("{left} guesses left. Please make a guess..."),
            (None, None) => "Please make a guess...".to_string(),
        };
        self.say(&format!("{text} "), false);
    }

    /// Write a message; output failures only get logged
    fn say(&mut self, text: &str, newline: bool) {
        let result = if newline {
            writeln!(self.output, "{text}")
        } else {
            write!(self.output, "{text}").and_then(|()| self.output.flush())
        };
        if let Err(e) = result {
            warn!("could not write to console: {e}");
        }
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_lowercase()),
            Err(e) => {
                warn!("could not read guess: {e}");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Solver for ConsoleSolver<R, W> {
    fn next_guess(&mut self, game: &Game<'_>) -> Option<Word> {
        let bank = game.bank();

        loop {
            self.prompt(game);
            let line = self.read_line()?;

            match Word::new(&line) {
                Ok(word) if word.length() != bank.word_length() => self.say(
                    &format!("Guesses must have {} letters.", bank.word_length())
                        .red()
                        .to_string(),
                    true,
                ),
                Ok(word) if !bank.contains(word.text()) => self.say(
                    &format!("'{word}' is not in the word list.").red().to_string(),
                    true,
                ),
                Ok(word) => return Some(word),
                Err(e) => self.say(&format!("Invalid guess: {e}").red().to_string(), true),
            }
        }
    }

    fn on_feedback(&mut self, guess: &Guess) {
        let row = colored_guess(guess.word(), guess.pattern());
        self.say(&row, true);
    }

    fn on_game_end(&mut self, game: &Game<'_>) {
        let message = if game.won() {
            format!(
                "Congrats! You got the word in {} guesses.",
                game.num_guesses_taken()
            )
            .green()
            .bold()
            .to_string()
        } else {
            let target = game
                .revealed_target()
                .map_or_else(String::new, |w| w.text().to_string());
            format!("Sorry, you are out of guesses. The correct word was '{target}'")
                .red()
                .to_string()
        };
        self.say(&message, true);
    }
}
