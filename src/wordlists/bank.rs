//! The word bank: the immutable vocabulary shared by every game

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors raised while building a [`WordBank`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordBankError {
    #[error("word bank must contain at least one word")]
    Empty,
    #[error("word '{word}' has {found} letters, expected {expected}")]
    MixedLength {
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("word '{0}' appears more than once")]
    Duplicate(String),
}

/// Ordered vocabulary of distinct, equal-length words
///
/// Built once at startup and then only ever borrowed. The order of
/// [`words()`](WordBank::words) is the order the solver scans in, so it also
/// decides tie-breaks between equally scored guesses.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
    index: FxHashMap<String, usize>,
    word_length: usize,
}

impl WordBank {
    /// Build a bank, keeping the given order
    ///
    /// # Errors
    /// Returns `WordBankError` if the list is empty, if the words differ in
    /// length, or if a word appears twice.
    ///
    /// # Examples
    /// ```
    /// use wordle_coverage::wordlists::{WordBank, loader::words_from_slice};
    ///
    /// let bank = WordBank::new(words_from_slice(&["cat", "car", "bar", "bat"])).unwrap();
    /// assert_eq!(bank.word_length(), 3);
    /// assert!(bank.contains("bar"));
    ///
    /// assert!(WordBank::new(words_from_slice(&["cat", "cart"])).is_err());
    /// ```
    pub fn new(words: Vec<Word>) -> Result<Self, WordBankError> {
        let word_length = words.first().ok_or(WordBankError::Empty)?.length();

        let mut index = FxHashMap::default();
        index.reserve(words.len());

        for (i, word) in words.iter().enumerate() {
            if word.length() != word_length {
                return Err(WordBankError::MixedLength {
                    word: word.text().to_string(),
                    expected: word_length,
                    found: word.length(),
                });
            }
            if index.insert(word.text().to_string(), i).is_some() {
                return Err(WordBankError::Duplicate(word.text().to_string()));
            }
        }

        Ok(Self {
            words,
            index,
            word_length,
        })
    }

    /// Build a bank from the embedded vocabulary
    ///
    /// # Errors
    /// Only fails if the compiled-in list is malformed.
    pub fn embedded() -> Result<Self, WordBankError> {
        Self::new(super::loader::words_from_slice(super::WORDS))
    }

    /// All words in bank order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Length shared by every word in the bank
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects empty lists
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    /// Look a word up by its text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.index.get(text).map(|&i| &self.words[i])
    }

    /// Pick a word uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a WordBank {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
