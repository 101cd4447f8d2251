//! Core domain types for the guessing game
//!
//! This module contains the pure domain types: no I/O, no clock.

mod guess;
mod score;
mod secret;

pub use guess::{DIGIT_COUNT, Guess, GuessError};
pub use score::Score;
pub use secret::Secret;
