//! Knowledge accumulated about the hidden target within one game
//!
//! A [`ConstraintSet`] only ever grows: pins are never removed, letters are
//! never taken out of `present`, `absent` or a position's exclusions, and
//! guessed words stay guessed.

use crate::core::{Feedback, LetterSet, Word};
use log::{trace, warn};
use rustc_hash::FxHashSet;

/// Everything learned about the target so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    positional: Vec<Option<u8>>,
    excluded: Vec<LetterSet>,
    present: LetterSet,
    absent: LetterSet,
    guessed: FxHashSet<Word>,
}

impl ConstraintSet {
    /// Empty constraints for words of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            positional: vec![None; word_length],
            excluded: vec![LetterSet::new(); word_length],
            present: LetterSet::new(),
            absent: LetterSet::new(),
            guessed: FxHashSet::default(),
        }
    }

    /// Record the feedback for one submitted guess
    ///
    /// Positions are scanned left to right. `Exact` pins the letter at its
    /// position and marks it present. `PresentElsewhere` marks it present and
    /// excludes it from that position.
    ///
    /// Unlike a plain per-position insert, which would put a repeated letter
    /// into both `present` and `absent`, a letter is marked absent only when
    /// every copy of it in this guess came back `Absent`. A gray repeat next
    /// to a green or yellow copy of the same letter just means the target has
    /// no further copies.
    ///
    /// Feedback whose length does not match the constraint set is ignored
    /// with a warning.
    ///
    /// # Examples
    /// ```
    /// use wordle_coverage::core::{Pattern, Word};
    /// use wordle_coverage::solver::ConstraintSet;
    ///
    /// let guess = Word::new("cat").unwrap();
    /// let target = Word::new("car").unwrap();
    ///
    /// let mut constraints = ConstraintSet::new(3);
    /// constraints.update(&guess, Pattern::calculate(&guess, &target).as_slice());
    ///
    /// assert_eq!(constraints.positional(), &[Some(b'c'), Some(b'a'), None]);
    /// assert!(constraints.absent().contains(b't'));
    /// assert!(constraints.has_guessed(&guess));
    /// ```
    pub fn update(&mut self, guess: &Word, feedback: &[Feedback]) {
        if guess.length() != self.positional.len() || feedback.len() != self.positional.len() {
            warn!(
                "ignoring feedback for '{guess}': {} letters and {} marks, expected {}",
                guess.length(),
                feedback.len(),
                self.positional.len()
            );
            return;
        }

        let mut seen_present = LetterSet::new();
        let mut seen_absent = LetterSet::new();

        for (i, (&letter, &mark)) in guess.chars().iter().zip(feedback).enumerate() {
            match mark {
                Feedback::Exact => {
                    seen_present.insert(letter);
                    self.pin(i, letter);
                }
                Feedback::PresentElsewhere => {
                    seen_present.insert(letter);
                    self.excluded[i].insert(letter);
                }
                Feedback::Absent => {
                    seen_absent.insert(letter);
                }
            }
        }

        self.present = self.present.union(seen_present);
        self.absent
            .extend(seen_absent.iter().filter(|&letter| !seen_present.contains(letter)));
        self.guessed.insert(guess.clone());

        trace!(
            "after {guess}: present={} absent={} pins={}",
            self.present,
            self.absent,
            self.pins_display()
        );
    }

    fn pin(&mut self, position: usize, letter: u8) {
        match self.positional[position] {
            None => self.positional[position] = Some(letter),
            Some(pinned) if pinned != letter => warn!(
                "ignoring conflicting pin '{}' at position {position}, already '{}'",
                char::from(letter),
                char::from(pinned)
            ),
            Some(_) => {}
        }
    }

    fn pins_display(&self) -> String {
        self.positional
            .iter()
            .map(|pin| pin.map_or('_', char::from))
            .collect()
    }

    /// Pinned letter per position
    #[inline]
    #[must_use]
    pub fn positional(&self) -> &[Option<u8>] {
        &self.positional
    }

    /// Letters ruled out per position by `PresentElsewhere` feedback
    #[inline]
    #[must_use]
    pub fn excluded(&self) -> &[LetterSet] {
        &self.excluded
    }

    /// Letters known to be in the target
    #[inline]
    #[must_use]
    pub const fn present(&self) -> LetterSet {
        self.present
    }

    /// Letters known not to be in the target
    #[inline]
    #[must_use]
    pub const fn absent(&self) -> LetterSet {
        self.absent
    }

    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> &FxHashSet<Word> {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub fn has_guessed(&self, word: &Word) -> bool {
        self.guessed.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.positional.len()
    }

    /// True before any feedback has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guessed.is_empty()
            && self.present.is_empty()
            && self.absent.is_empty()
            && self.positional.iter().all(Option::is_none)
            && self.excluded.iter().all(|set| set.is_empty())
    }
}
