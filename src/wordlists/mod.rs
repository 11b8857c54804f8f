//! Word lists for Wordle solving
//!
//! Provides the embedded vocabulary, file loading, and the [`WordBank`] built
//! from either.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{WordBank, WordBankError};
pub use embedded::{WORDS, WORDS_COUNT};
