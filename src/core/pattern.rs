//! Wordle feedback calculation and representation
//!
//! Each position of a guess receives one [`Feedback`]:
//! - `Exact` (green): right letter, right position
//! - `PresentElsewhere` (yellow): letter is in the target at another position
//! - `Absent` (gray): no further copies of the letter in the target
//!
//! A [`Pattern`] is the ordered feedback for a whole guess.

use super::Word;
use super::letters::{ALPHABET_SIZE, letter_index};
use std::fmt;

/// Feedback for a single letter at a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Exact,
    PresentElsewhere,
    Absent,
}

impl Feedback {
    /// Emoji tile for this feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::PresentElsewhere => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-character code used for manual input (`G`, `Y`, `-`)
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::PresentElsewhere => 'Y',
            Self::Absent => '-',
        }
    }

    const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::PresentElsewhere),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback pattern for a Wordle guess, one entry per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Feedback>);

impl Pattern {
    /// Wrap an explicit feedback sequence
    #[must_use]
    pub const fn new(feedback: Vec<Feedback>) -> Self {
        Self(feedback)
    }

    /// Calculate the pattern when `guess` is guessed and `target` is the answer
    ///
    /// This implements Wordle's feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens) and remove them from the pool
    /// 2. Second pass, left to right: mark letters still in the pool as yellow
    ///    and consume one copy each; everything else is gray
    ///
    /// # Examples
    /// ```
    /// use wordle_coverage::core::{Feedback, Pattern, Word};
    ///
    /// let guess = Word::new("cat").unwrap();
    /// let target = Word::new("car").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    ///
    /// assert_eq!(
    ///     pattern.as_slice(),
    ///     &[Feedback::Exact, Feedback::Exact, Feedback::Absent]
    /// );
    /// ```
    ///
    /// # Panics
    /// Panics in debug mode if the words differ in length
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.length(), target.length(), "length mismatch");

        let mut result = vec![Feedback::Absent; guess.length()];
        let mut available = [0u8; ALPHABET_SIZE];

        // First pass: greens, and count the target letters they don't use
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = Feedback::Exact;
            } else {
                available[letter_index(t)] += 1;
            }
        }

        // Second pass: yellows from what is left
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Feedback::Exact {
                continue;
            }
            let slot = &mut available[letter_index(g)];
            if *slot > 0 {
                result[i] = Feedback::PresentElsewhere;
                *slot -= 1;
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Feedback] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this is a perfect match (all greens)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == Feedback::Exact)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&f| f == Feedback::Exact).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&f| f == Feedback::PresentElsewhere)
            .count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use wordle_coverage::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// assert!(Pattern::parse("GX").is_none());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let feedback = s
            .chars()
            .map(Feedback::from_char)
            .collect::<Option<Vec<_>>>()?;

        if feedback.is_empty() {
            return None;
        }

        Some(Self(feedback))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_coverage::core::Pattern;
    ///
    /// let p = Pattern::parse("GY-").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in &self.0 {
            write!(f, "{}", feedback.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Absent, Exact, PresentElsewhere};

    fn pattern(guess: &str, target: &str) -> Pattern {
        Pattern::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn perfect_pattern() {
        let p = Pattern::new(vec![Exact; 5]);
        assert!(p.is_perfect());
        assert_eq!(p.count_exact(), 5);
        assert_eq!(p.count_present(), 0);
        assert!(!Pattern::new(Vec::new()).is_perfect());
    }

    #[test]
    fn all_gray() {
        let p = pattern("abcde", "fghij");
        assert_eq!(p.as_slice(), &[Absent; 5]);
        assert_eq!(p.count_exact(), 0);
    }

    #[test]
    fn all_green() {
        let p = pattern("crane", "crane");
        assert!(p.is_perfect());
    }

    #[test]
    fn toy_scenario_cat_against_car() {
        assert_eq!(pattern("cat", "car").as_slice(), &[Exact, Exact, Absent]);
    }

    #[test]
    fn mixed_feedback() {
        // C(gray) R(gray) A(green) N(gray) E(green)
        let p = pattern("crane", "slate");
        assert_eq!(p.as_slice(), &[Absent, Absent, Exact, Absent, Exact]);
    }

    #[test]
    fn yellow_when_misplaced() {
        let p = pattern("earth", "heart");
        assert_eq!(
            p.as_slice(),
            &[PresentElsewhere, PresentElsewhere, PresentElsewhere, PresentElsewhere, PresentElsewhere]
        );
    }

    #[test]
    fn duplicate_guess_letter_single_in_target() {
        // One E in the target: the first E takes the yellow, the second is gray
        let p = pattern("speed", "abide");
        assert_eq!(
            p.as_slice(),
            &[Absent, Absent, PresentElsewhere, Absent, PresentElsewhere]
        );

        let p = pattern("geese", "those");
        assert_eq!(p.as_slice(), &[Absent, Absent, Absent, Exact, Exact]);
    }

    #[test]
    fn greens_consume_before_yellows() {
        let p = pattern("llama", "plant");
        assert_eq!(p.as_slice(), &[Absent, Exact, Exact, Absent, Absent]);
    }

    #[test]
    fn duplicate_yellows_consumed_left_to_right() {
        let p = pattern("allot", "lucky");
        assert_eq!(p.as_slice(), &[Absent, PresentElsewhere, Absent, Absent, Absent]);

        // Two L's in the target, so both misplaced L's are yellow
        let p = pattern("llama", "hello");
        assert_eq!(
            p.as_slice(),
            &[PresentElsewhere, PresentElsewhere, Absent, Absent, Absent]
        );
    }

    #[test]
    fn parse_and_display_round_trip() {
        let p = Pattern::parse("g-Y_G").unwrap();
        assert_eq!(p.as_slice(), &[Exact, Absent, PresentElsewhere, Absent, Exact]);
        assert_eq!(p.to_string(), "G-Y-G");
        assert_eq!(p.to_emoji(), "🟩⬜🟨⬜🟩");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Pattern::parse("").is_none());
        assert!(Pattern::parse("GYX").is_none());
        assert!("GQ".parse::<Pattern>().is_err());
    }
}
