//! Compact letter sets
//!
//! A `LetterSet` is a 26-bit mask over `a..=z`. Membership, union and subset
//! checks are single integer operations, which keeps the per-word filter cheap.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Set of lowercase ASCII letters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterSet(u32);

#[inline]
const fn bit(letter: u8) -> u32 {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be in a..=z");
    1 << (letter - b'a')
}

/// Index of a lowercase letter in `0..26`
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be in a..=z");
    (letter - b'a') as usize
}

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Add a letter, returning `true` if it was not already present
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        let was_absent = self.0 & bit(letter) == 0;
        self.0 |= bit(letter);
        was_absent
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl Extend<u8> for LetterSet {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for letter in iter {
            self.insert(letter);
        }
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", char::from(letter))?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = LetterSet::new();
        assert!(set.is_empty());
        assert!(set.insert(b'c'));
        assert!(!set.insert(b'c'));
        assert!(set.contains(b'c'));
        assert!(!set.contains(b'a'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn subset_and_disjoint() {
        let ca: LetterSet = b"ca".iter().copied().collect();
        let car: LetterSet = b"car".iter().copied().collect();
        let t: LetterSet = b"t".iter().copied().collect();

        assert!(ca.is_subset(car));
        assert!(!car.is_subset(ca));
        assert!(LetterSet::EMPTY.is_subset(ca));
        assert!(car.is_disjoint(t));
        assert!(!ca.is_disjoint(car));
    }

    #[test]
    fn iterates_alphabetically() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        let letters: Vec<u8> = set.iter().collect();
        assert_eq!(letters, b"aberz");
    }

    #[test]
    fn display_lists_letters() {
        let set: LetterSet = b"ac".iter().copied().collect();
        assert_eq!(set.to_string(), "{a,c}");
        assert_eq!(LetterSet::EMPTY.to_string(), "{}");
    }

    #[test]
    fn letter_index_bounds() {
        assert_eq!(letter_index(b'a'), 0);
        assert_eq!(letter_index(b'z'), ALPHABET_SIZE - 1);
    }
}
