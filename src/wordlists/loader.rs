//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{WordBank, WordBankError};
use crate::core::Word;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a word bank from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read word list")]
    Io(#[from] io::Error),
    #[error("word list is not a valid word bank")]
    Bank(#[from] WordBankError),
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_coverage::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Load a file and build a [`WordBank`] from it
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and `LoadError::Bank`
/// if the words do not form a valid bank (empty, mixed lengths, duplicates).
pub fn bank_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank, LoadError> {
    let path = path.as_ref();
    let words = load_from_file(path)?;
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(WordBank::new(words)?)
}

/// Convert string slices to words, dropping anything that is not a word
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
