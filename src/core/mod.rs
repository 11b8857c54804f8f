//! Core domain types for Wordle
//!
//! Words, letter sets and feedback patterns. Everything here is pure and has
//! no knowledge of solvers or games.

mod letters;
mod pattern;
mod word;

pub use letters::{ALPHABET_SIZE, LetterSet, letter_index};
pub use pattern::{Feedback, Pattern};
pub use word::{Word, WordError};
