//! Letter frequency model over the surviving candidates
//!
//! Every letter position of every candidate counts once, duplicates included,
//! so the denominator is `candidates × word length`.

use crate::core::{ALPHABET_SIZE, Word, letter_index};

/// Relative letter frequencies for one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyModel {
    counts: [usize; ALPHABET_SIZE],
    denominator: usize,
}

impl FrequencyModel {
    /// Count letters across the candidates
    ///
    /// # Examples
    /// ```
    /// use wordle_coverage::core::Word;
    /// use wordle_coverage::solver::FrequencyModel;
    ///
    /// let car = Word::new("car").unwrap();
    /// let model = FrequencyModel::from_candidates(&[&car]);
    ///
    /// assert!((model.frequency(b'c') - 1.0 / 3.0).abs() < 1e-12);
    /// assert_eq!(model.frequency(b'z'), 0.0);
    /// ```
    #[must_use]
    pub fn from_candidates(candidates: &[&Word]) -> Self {
        let mut counts = [0usize; ALPHABET_SIZE];
        let mut denominator = 0;

        for word in candidates {
            for &letter in word.chars() {
                counts[letter_index(letter)] += 1;
            }
            denominator += word.length();
        }

        Self {
            counts,
            denominator,
        }
    }

    /// Share of all candidate letter positions taken by `letter`
    ///
    /// Always in `[0, 1]`; `0.0` for every letter when there are no candidates.
    #[must_use]
    pub fn frequency(&self, letter: u8) -> f64 {
        if self.denominator == 0 {
            return 0.0;
        }
        self.counts[letter_index(letter)] as f64 / self.denominator as f64
    }

    /// Raw occurrence count of `letter`
    #[must_use]
    pub const fn count(&self, letter: u8) -> usize {
        self.counts[letter_index(letter)]
    }

    /// Total letter positions counted
    #[must_use]
    pub const fn denominator(&self) -> usize {
        self.denominator
    }

    /// Letters that occur at least once, with their frequencies
    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        (b'a'..=b'z')
            .filter(|&letter| self.count(letter) > 0)
            .map(|letter| (letter, self.frequency(letter)))
    }
}
