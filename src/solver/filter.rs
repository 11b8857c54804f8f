//! Candidate filtering
//!
//! Derives the words still consistent with a [`ConstraintSet`]. Nothing is
//! cached between turns: every call rescans the whole bank.
//!
//! The coverage rules ignore where a yellow letter was seen. The positional
//! rules also drop words that repeat a yellow letter at the position it was
//! seen at.

use super::ConstraintSet;
use crate::core::Word;
use crate::wordlists::WordBank;

/// Check a single word against the constraints
///
/// Rules, in evaluation order:
/// 1. the word contains every letter known to be present
/// 2. every pinned position holds its pinned letter
/// 3. the word contains no letter known to be absent
#[must_use]
pub fn is_candidate(word: &Word, constraints: &ConstraintSet) -> bool {
    let present = constraints.present();
    if !present.is_empty() && !present.is_subset(word.letters()) {
        return false;
    }

    let chars = word.chars();

    let pins_hold = constraints
        .positional()
        .iter()
        .zip(chars)
        .all(|(pin, &letter)| pin.is_none_or(|pinned| pinned == letter));
    if !pins_hold {
        return false;
    }

    let absent = constraints.absent();
    !chars.iter().any(|&letter| absent.contains(letter))
}

/// Check a word against the coverage rules and the per-position exclusions
#[must_use]
pub fn is_positional_candidate(word: &Word, constraints: &ConstraintSet) -> bool {
    is_candidate(word, constraints)
        && constraints
            .excluded()
            .iter()
            .zip(word.chars())
            .all(|(excluded, &letter)| !excluded.contains(letter))
}

/// Which rules decide that a word is still a candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterRules {
    /// Present, pinned and absent letters, see [`is_candidate`]
    #[default]
    Coverage,
    /// Coverage rules plus per-position exclusions, see [`is_positional_candidate`]
    Positional,
}

impl FilterRules {
    #[must_use]
    pub fn matches(self, word: &Word, constraints: &ConstraintSet) -> bool {
        match self {
            Self::Coverage => is_candidate(word, constraints),
            Self::Positional => is_positional_candidate(word, constraints),
        }
    }

    /// Bank words that pass these rules, in bank order
    #[must_use]
    pub fn filter<'a>(self, bank: &'a WordBank, constraints: &ConstraintSet) -> Vec<&'a Word> {
        bank.iter()
            .filter(|word| self.matches(word, constraints))
            .collect()
    }

    #[must_use]
    pub fn count(self, bank: &WordBank, constraints: &ConstraintSet) -> usize {
        bank.iter()
            .filter(|word| self.matches(word, constraints))
            .count()
    }
}

/// All bank words consistent with the constraints, in bank order
///
/// With empty constraints this is the whole bank.
///
/// # Examples
/// ```
/// use wordle_coverage::core::{Pattern, Word};
/// use wordle_coverage::solver::{ConstraintSet, filter_candidates};
/// use wordle_coverage::wordlists::{WordBank, loader::words_from_slice};
///
/// let bank = WordBank::new(words_from_slice(&["cat", "car", "bar", "bat"])).unwrap();
/// let mut constraints = ConstraintSet::new(3);
/// assert_eq!(filter_candidates(&bank, &constraints).len(), 4);
///
/// let guess = Word::new("cat").unwrap();
/// let target = Word::new("car").unwrap();
/// constraints.update(&guess, Pattern::calculate(&guess, &target).as_slice());
///
/// let candidates = filter_candidates(&bank, &constraints);
/// assert_eq!(candidates, vec![&target]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(bank: &'a WordBank, constraints: &ConstraintSet) -> Vec<&'a Word> {
    FilterRules::Coverage.filter(bank, constraints)
}

/// Count how many bank words remain consistent with the constraints
#[must_use]
pub fn count_candidates(bank: &WordBank, constraints: &ConstraintSet) -> usize {
    FilterRules::Coverage.count(bank, constraints)
}
