//! Candidate guess representation
//!
//! A Guess is a validated sequence of four distinct decimal digits with a non-zero lead.

use std::fmt;

/// Number of digits in a secret and in every guess
pub const DIGIT_COUNT: usize = 4;

/// A validated four-digit guess
///
/// Stores the digits as values 0-9 in entry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess {
    digits: [u8; DIGIT_COUNT],
}

/// Error type for rejected guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    InvalidLength(usize),
    NonDigit(char),
    DigitOutOfRange(u8),
    LeadingZero,
    RepeatedDigit(char),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Guess must be exactly {DIGIT_COUNT} digits, got {len}")
            }
            Self::NonDigit(ch) => write!(f, "Guess contains non-digit character '{ch}'"),
            Self::DigitOutOfRange(value) => write!(f, "Digit value {value} is above 9"),
            Self::LeadingZero => write!(f, "Guess must not start with 0"),
            Self::RepeatedDigit(ch) => write!(f, "Digit '{ch}' appears more than once"),
        }
    }
}

impl std::error::Error for GuessError {}

impl Guess {
    /// Parse a guess from text such as `"1234"`
    ///
    /// # Errors
    /// Returns `GuessError` if:
    /// - Length is not exactly 4 characters
    /// - Any character is not an ASCII digit
    /// - The first digit is 0
    /// - Any digit appears more than once
    ///
    /// # Examples
    /// ```
    /// use number_guess::core::Guess;
    ///
    /// let guess = Guess::parse("1234").unwrap();
    /// assert_eq!(guess.to_string(), "1234");
    ///
    /// assert!(Guess::parse("0123").is_err());
    /// assert!(Guess::parse("1123").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, GuessError> {
        let chars: Vec<char> = text.chars().collect();

        if chars.len() != DIGIT_COUNT {
            return Err(GuessError::InvalidLength(chars.len()));
        }

        let mut digits = [0u8; DIGIT_COUNT];
        for (slot, &ch) in digits.iter_mut().zip(&chars) {
            let value = ch.to_digit(10).ok_or(GuessError::NonDigit(ch))?;
            *slot = value as u8;
        }

        Self::from_digits(digits)
    }

    /// Build a guess from digit values (0-9)
    ///
    /// # Errors
    /// Returns `GuessError` if a value is above 9, the lead is 0, or a digit repeats.
    pub fn from_digits(digits: [u8; DIGIT_COUNT]) -> Result<Self, GuessError> {
        if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
            return Err(GuessError::DigitOutOfRange(bad));
        }

        if digits[0] == 0 {
            return Err(GuessError::LeadingZero);
        }

        // Bit i set once digit i has been seen
        let mut seen = 0u16;
        for &d in &digits {
            let bit = 1u16 << d;
            if seen & bit != 0 {
                return Err(GuessError::RepeatedDigit(digit_char(d)));
            }
            seen |= bit;
        }

        Ok(Self { digits })
    }

    /// Get the digit values in entry order
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; DIGIT_COUNT] {
        &self.digits
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
}

/// Render a digit value as its ASCII character
#[inline]
#[must_use]
pub(crate) fn digit_char(digit: u8) -> char {
    char::from(b'0' + digit)
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{}", digit_char(d))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
