//! One-off scoring command
//!
//! Scores a single guess against a secret given on the command line.

use crate::core::{Guess, Score, Secret};

/// Result of scoring a guess
#[derive(Debug)]
pub struct ScoreResult {
    pub secret: String,
    pub guess: String,
    pub score: Score,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either value is not four distinct digits with a non-zero lead.
pub fn score_guess(secret: &str, guess: &str) -> Result<ScoreResult, String> {
    let secret_value = Secret::parse(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess_value = Guess::parse(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    Ok(ScoreResult {
        secret: secret_value.reveal(),
        guess: guess_value.to_string(),
        score: Score::calculate(&guess_value, &secret_value),
    })
}
