//! Hidden target number
//!
//! Secrets are drawn by rejection sampling so that every valid four-digit,
//! non-repeating, non-zero-leading number is equally likely.

use super::guess::{DIGIT_COUNT, Guess, GuessError, digit_char};
use rand::Rng;
use std::fmt;

/// The number the player is trying to find
///
/// `Debug` output is redacted; use [`Secret::reveal`] to read the value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secret {
    digits: [u8; DIGIT_COUNT],
}

impl Secret {
    /// Draw a fresh secret from `rng`
    ///
    /// Digits are drawn uniformly from 0-9. A draw is discarded if it repeats an
    /// accepted digit or if it is a leading 0, and accepted digits keep draw order.
    ///
    /// # Examples
    /// ```
    /// use number_guess::core::Secret;
    ///
    /// let secret = Secret::generate(&mut rand::rng());
    /// assert_eq!(secret.len(), 4);
    /// assert_ne!(secret.digit_at(0), 0);
    /// ```
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = [0u8; DIGIT_COUNT];
        let mut accepted = 0;

        while accepted < DIGIT_COUNT {
            let draw: u8 = rng.random_range(0..10);
            if (accepted == 0 && draw == 0) || digits[..accepted].contains(&draw) {
                continue;
            }
            digits[accepted] = draw;
            accepted += 1;
        }

        Self { digits }
    }

    /// Build a known secret from text, applying the same rules as a guess
    ///
    /// # Errors
    /// Returns `GuessError` if the text is not four distinct digits with a non-zero lead.
    pub fn parse(text: &str) -> Result<Self, GuessError> {
        Guess::parse(text).map(Self::from)
    }

    /// Number of digits in the secret
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty, clippy::unused_self)] // Always four digits
    pub const fn len(&self) -> usize {
        DIGIT_COUNT
    }

    /// Get the digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.digits[position]
    }

    /// Check if the secret contains a digit at any position
    #[inline]
    #[must_use]
    pub fn contains(&self, digit: u8) -> bool {
        self.digits.contains(&digit)
    }

    /// Get the digit values in order
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; DIGIT_COUNT] {
        &self.digits
    }

    /// Render the secret as text
    #[must_use]
    pub fn reveal(&self) -> String {
        self.digits.iter().map(|&d| digit_char(d)).collect()
    }
}

impl From<Guess> for Secret {
    fn from(guess: Guess) -> Self {
        Self {
            digits: *guess.digits(),
        }
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(****)")
    }
}
