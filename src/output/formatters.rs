//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn feedback_tile(letter: u8, feedback: Feedback) -> ColoredString {
    let text = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match feedback {
        Feedback::Exact => text.black().on_green().bold(),
        Feedback::PresentElsewhere => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn colored_guess(word: &Word, pattern: &Pattern) -> String {
    word.chars()
        .iter()
        .zip(pattern.as_slice())
        .map(|(&letter, &feedback)| feedback_tile(letter, feedback).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_keep_uppercase_letter() {
        colored::control::set_override(false);
        assert_eq!(feedback_tile(b'a', Feedback::Exact).to_string(), " A ");
    }

    #[test]
    fn colored_guess_has_one_tile_per_letter() {
        colored::control::set_override(false);
        let guess = Word::new("cat").unwrap();
        let target = Word::new("car").unwrap();

        let row = colored_guess(&guess, &Pattern::calculate(&guess, &target));
        assert_eq!(row, " C  A  T ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(3.5, 7.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_degenerate_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
        assert_eq!(create_progress_bar(9.0, 3.0, 4), "████");
    }
}
