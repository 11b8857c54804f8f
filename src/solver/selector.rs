//! Greedy coverage selection
//!
//! Scores each candidate by the summed frequency of its distinct letters and
//! picks the best one that has not been guessed yet.

use super::FrequencyModel;
use crate::core::Word;
use rustc_hash::FxHashSet;

/// Coverage score of a word: sum of frequencies over its distinct letters
///
/// A repeated letter contributes once.
#[must_use]
pub fn coverage_score(word: &Word, model: &FrequencyModel) -> f64 {
    word.letters()
        .iter()
        .map(|letter| model.frequency(letter))
        .sum()
}

/// Select the unguessed candidate with the highest coverage score
///
/// Candidates are scanned in order and only a strictly greater score replaces
/// the current best, so ties go to the earliest word. Returns `None` when no
/// unguessed candidate remains.
///
/// # Examples
/// ```
/// use rustc_hash::FxHashSet;
/// use wordle_coverage::core::Word;
/// use wordle_coverage::solver::{FrequencyModel, select_best_guess};
///
/// let words: Vec<Word> = ["eerie", "arose", "tramp"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = words.iter().collect();
/// let model = FrequencyModel::from_candidates(&candidates);
///
/// let (best, _) = select_best_guess(&candidates, &model, &FxHashSet::default()).unwrap();
/// assert_eq!(best.text(), "arose");
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    candidates: &[&'a Word],
    model: &FrequencyModel,
    guessed: &FxHashSet<Word>,
) -> Option<(&'a Word, f64)> {
    let mut best: Option<(&'a Word, f64)> = None;

    for &word in candidates {
        if guessed.contains(word) {
            continue;
        }

        let score = coverage_score(word, model);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((word, score));
        }
    }

    best
}
