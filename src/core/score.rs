//! Bulls and cows feedback calculation and representation
//!
//! A score counts two things per guess:
//! - correct position ("bull"): right digit in the right place
//! - correct digit ("cow"): right digit in the wrong place
//!
//! Scores display as `-{cows} +{bulls}`, e.g. `-2 +1`.

use super::guess::{DIGIT_COUNT, Guess};
use super::secret::Secret;
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    correct_digit: u8,
    correct_position: u8,
}

impl Score {
    /// Every digit in place
    pub const PERFECT: Self = Self {
        correct_digit: 0,
        correct_position: DIGIT_COUNT as u8,
    };

    /// Create a score from raw counts
    #[inline]
    #[must_use]
    pub const fn new(correct_digit: u8, correct_position: u8) -> Self {
        Self {
            correct_digit,
            correct_position,
        }
    }

    /// Digits present in the secret but in another position (cows)
    #[inline]
    #[must_use]
    pub const fn correct_digit(self) -> u8 {
        self.correct_digit
    }

    /// Digits matching the secret in value and position (bulls)
    #[inline]
    #[must_use]
    pub const fn correct_position(self) -> u8 {
        self.correct_position
    }

    /// Check if every digit is in place
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.correct_position == DIGIT_COUNT as u8
    }

    /// Score `guess` against `secret`
    ///
    /// # Examples
    /// ```
    /// use number_guess::core::{Guess, Score, Secret};
    ///
    /// let secret = Secret::parse("1234").unwrap();
    /// let guess = Guess::parse("1243").unwrap();
    /// assert_eq!(Score::calculate(&guess, &secret).to_string(), "-2 +2");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Guess, secret: &Secret) -> Self {
        Self::evaluate(guess.digits(), secret.digits())
    }

    /// Score raw digit sequences position by position
    ///
    /// A position counts as a bull when the digits match. Otherwise it counts as a
    /// cow when the candidate digit appears anywhere in the secret. The branches are
    /// exclusive per position. With distinct digits on both sides no digit is
    /// counted twice; repeated candidate digits may each count as a cow.
    #[must_use]
    pub fn evaluate(candidate: &[u8; DIGIT_COUNT], secret: &[u8; DIGIT_COUNT]) -> Self {
        let mut score = Self::default();

        for (&c, &s) in candidate.iter().zip(secret) {
            if c == s {
                score.correct_position += 1;
            } else if secret.contains(&c) {
                score.correct_digit += 1;
            }
        }

        score
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{} +{}", self.correct_digit, self.correct_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(secret: &str, guess: &str) -> Score {
        let secret = Secret::parse(secret).unwrap();
        let guess = Guess::parse(guess).unwrap();
        Score::calculate(&guess, &secret)
    }

    #[test]
    fn score_perfect_constant() {
        assert!(Score::PERFECT.is_perfect());
        assert_eq!(Score::PERFECT.to_string(), "-0 +4");
        assert_eq!(Score::PERFECT.correct_digit(), 0);
    }

    #[test]
    fn score_exact_match() {
        let result = score("1234", "1234");
        assert_eq!(result, Score::PERFECT);
        assert_eq!(result.to_string(), "-0 +4");
    }

    #[test]
    fn score_all_reversed() {
        let result = score("1234", "4321");
        assert_eq!(result.to_string(), "-4 +0");
        assert!(!result.is_perfect());
    }

    #[test]
    fn score_two_in_place_two_swapped() {
        let result = score("1234", "1243");
        assert_eq!(result.correct_position(), 2);
        assert_eq!(result.correct_digit(), 2);
        assert_eq!(result.to_string(), "-2 +2");
    }

    #[test]
    fn score_no_common_digits() {
        assert_eq!(score("1234", "5678").to_string(), "-0 +0");
    }

    #[test]
    fn score_mixed() {
        // 9 absent, 2 in place, 1 and 4 elsewhere
        assert_eq!(score("1234", "9214").to_string(), "-1 +2");
        assert_eq!(score("5078", "7085").to_string(), "-3 +1");
    }

    #[test]
    fn score_symmetry() {
        for text in ["1234", "9876", "1023", "5078"] {
            assert!(score(text, text).is_perfect());
        }
    }

    #[test]
    fn evaluate_repeated_candidate_digits_count_per_position() {
        // Position 0 is a bull; positions 1-3 each find a 1 elsewhere in the secret
        let result = Score::evaluate(&[1, 1, 1, 1], &[1, 2, 3, 4]);
        assert_eq!(result, Score::new(3, 1));
    }
}
