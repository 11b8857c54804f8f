//! Greedy letter-coverage solver

use super::{ConstraintSet, FilterRules, FrequencyModel, Solver, select_best_guess};
use crate::core::Word;
use crate::game::{Game, Guess};
use crate::wordlists::WordBank;
use log::debug;

/// Plays the candidate whose distinct letters cover the most frequent letters
///
/// Each turn it filters the bank against everything learned so far, rebuilds
/// the letter frequencies over the survivors, and picks the best-scoring
/// unguessed candidate. Nothing is carried between turns except the
/// constraints.
#[derive(Debug, Clone)]
pub struct CoverageSolver<'a> {
    bank: &'a WordBank,
    constraints: ConstraintSet,
    rules: FilterRules,
}

impl<'a> CoverageSolver<'a> {
    #[must_use]
    pub fn new(bank: &'a WordBank) -> Self {
        Self::with_rules(bank, FilterRules::Coverage)
    }

    /// Same selection, but a yellow letter also rules out candidates that
    /// hold it at the position where it was seen
    #[must_use]
    pub fn positional(bank: &'a WordBank) -> Self {
        Self::with_rules(bank, FilterRules::Positional)
    }

    #[must_use]
    pub fn with_rules(bank: &'a WordBank, rules: FilterRules) -> Self {
        Self {
            bank,
            constraints: ConstraintSet::new(bank.word_length()),
            rules,
        }
    }

    #[must_use]
    pub const fn rules(&self) -> FilterRules {
        self.rules
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Words still consistent with the feedback seen so far
    #[must_use]
    pub fn candidates(&self) -> Vec<&'a Word> {
        self.rules.filter(self.bank, &self.constraints)
    }

    /// Run one selection round without committing to anything
    #[must_use]
    pub fn best_guess(&self) -> Option<(&'a Word, f64)> {
        let candidates = self.candidates();
        let model = FrequencyModel::from_candidates(&candidates);
        let best = select_best_guess(&candidates, &model, self.constraints.guessed());

        match best {
            Some((word, score)) => debug!(
                "{} candidates remain, best {word} scores {score:.4}",
                candidates.len()
            ),
            None => debug!("{} candidates remain, none unguessed", candidates.len()),
        }

        best
    }
}

impl Solver for CoverageSolver<'_> {
    fn next_guess(&mut self, _game: &Game<'_>) -> Option<Word> {
        self.best_guess().map(|(word, _)| word.clone())
    }

    fn on_feedback(&mut self, guess: &Guess) {
        self.constraints.update(guess.word(), guess.pattern().as_slice());
    }
}
