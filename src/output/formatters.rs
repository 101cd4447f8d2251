//! Formatting utilities for terminal output

use crate::core::{DIGIT_COUNT, Score};
use crate::session::DigitMark;

/// Format a score as one symbol per digit: bulls, then cows, then misses
#[must_use]
pub fn score_badge(score: Score) -> String {
    let bulls = usize::from(score.correct_position());
    let cows = usize::from(score.correct_digit());
    let misses = DIGIT_COUNT.saturating_sub(bulls + cows);

    format!("{}{}{}", "●".repeat(bulls), "◐".repeat(cows), "○".repeat(misses))
}

/// Single-character symbol for a digit annotation
#[must_use]
pub const fn mark_symbol(mark: DigitMark) -> char {
    match mark {
        DigitMark::Unknown => '·',
        DigitMark::InKnownPosition => '✓',
        DigitMark::InUnknownPosition => '?',
        DigitMark::NotPresent => '✗',
    }
}
