//! Game session state
//!
//! `GameSession` owns the secret, guess history, status message, turn timing and
//! digit annotations. Presentation code calls its mutating methods and then reads
//! the new state back through the query methods.

mod annotation;

pub use annotation::{Annotations, DigitMark};

use crate::core::{Guess, GuessError, Score, Secret};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Status text after a rejected guess
pub const INVALID_GUESS_MESSAGE: &str =
    "Invalid guess. Ensure no repetitions and doesn't start with 0.";

/// Status text when fewer than four digits were entered
pub const INCOMPLETE_GUESS_MESSAGE: &str = "Please enter a 4-digit guess.";

/// One accepted guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessRecord {
    pub guess: Guess,
    pub score: Score,
    /// Time since the previous accepted guess, or since the game started
    pub time_spent: Duration,
}

impl GuessRecord {
    /// Time spent in seconds, rounded to two decimals
    #[must_use]
    pub fn time_spent_secs(&self) -> f64 {
        (self.time_spent.as_secs_f64() * 100.0).round() / 100.0
    }
}

/// A single game in progress
#[derive(Debug)]
pub struct GameSession {
    secret: Secret,
    history: Vec<GuessRecord>,
    message: String,
    turn_started_at: Instant,
    annotations: Annotations,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Start a game with a secret from the thread RNG
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    /// Start a game with a secret drawn from `rng`
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_secret(Secret::generate(rng))
    }

    /// Start a game around a known secret
    #[must_use]
    pub fn with_secret(secret: Secret) -> Self {
        info!("new game started");
        Self {
            secret,
            history: Vec::new(),
            message: String::new(),
            turn_started_at: Instant::now(),
            annotations: Annotations::new(),
        }
    }

    /// Discard the current game and start over with a fresh secret
    pub fn new_game(&mut self) {
        self.new_game_with_rng(&mut rand::rng());
    }

    /// Discard the current game and start over with a secret drawn from `rng`
    pub fn new_game_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        info!("new game started");
        self.secret = Secret::generate(rng);
        self.history.clear();
        self.message.clear();
        self.turn_started_at = Instant::now();
        self.annotations.reset();
    }

    /// Validate and score a guess
    ///
    /// On success the record is placed at the front of the history, the status
    /// message summarises the result and the turn timer restarts. On failure only
    /// the status message changes.
    ///
    /// # Errors
    ///
    /// Returns `GuessError` if the candidate is not four distinct digits with a
    /// non-zero lead.
    pub fn submit_guess(&mut self, candidate: &str) -> Result<&GuessRecord, GuessError> {
        let guess = match Guess::parse(candidate) {
            Ok(guess) => guess,
            Err(err) => {
                debug!(candidate, error = %err, "rejected guess");
                self.message = INVALID_GUESS_MESSAGE.to_string();
                return Err(err);
            }
        };

        let score = Score::calculate(&guess, &self.secret);
        let now = Instant::now();
        let time_spent = now.saturating_duration_since(self.turn_started_at);

        debug!(%guess, %score, secs = time_spent.as_secs_f64(), "accepted guess");

        self.history.insert(
            0,
            GuessRecord {
                guess,
                score,
                time_spent,
            },
        );
        self.message = format!("Your guess: {guess}, Result: {score}");
        self.turn_started_at = now;

        if score.is_perfect() {
            info!(guesses = self.history.len(), "secret found");
        }

        Ok(&self.history[0])
    }

    /// Advance the annotation for `digit`
    ///
    /// Returns the new tag, or `None` if `digit` is above 9.
    pub fn toggle_digit_annotation(&mut self, digit: u8) -> Option<DigitMark> {
        self.annotations.toggle(digit)
    }

    /// Replace the status message
    pub fn set_message(&mut self, text: impl Into<String>) {
        self.message = text.into();
    }

    /// Accepted guesses, most recent first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn annotations(&self) -> &Annotations {
        &self.annotations
    }

    #[must_use]
    pub fn annotation(&self, digit: u8) -> Option<DigitMark> {
        self.annotations.get(digit)
    }

    /// Number of digits in the secret
    #[must_use]
    pub const fn secret_len(&self) -> usize {
        self.secret.len()
    }

    /// Start of the current turn
    #[must_use]
    pub const fn turn_started_at(&self) -> Instant {
        self.turn_started_at
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.history.len()
    }

    /// Check if the most recent guess matched the secret
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.history.first().is_some_and(|r| r.score.is_perfect())
    }

    /// Secret as text, for display once the game is over
    #[must_use]
    pub fn reveal_secret(&self) -> String {
        self.secret.reveal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::thread;

    fn session(secret: &str) -> GameSession {
        GameSession::with_secret(Secret::parse(secret).unwrap())
    }

    #[test]
    fn new_session_is_empty() {
        let game = GameSession::with_rng(&mut StdRng::seed_from_u64(1));
        assert!(game.history().is_empty());
        assert_eq!(game.message(), "");
        assert_eq!(game.secret_len(), 4);
        assert!(!game.is_solved());
        assert!(game.annotations().iter().all(|(_, m)| m == DigitMark::Unknown));
    }

    #[test]
    fn accepted_guess_is_recorded() {
        let mut game = session("1234");
        let record = game.submit_guess("1243").unwrap();
        assert_eq!(record.score.to_string(), "-2 +2");

        assert_eq!(game.guess_count(), 1);
        assert_eq!(game.message(), "Your guess: 1243, Result: -2 +2");
    }

    #[test]
    fn history_is_most_recent_first() {
        let mut game = session("1234");
        game.submit_guess("1234").unwrap();
        game.submit_guess("5678").unwrap();

        let history = game.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].guess.to_string(), "5678");
        assert_eq!(history[0].score.to_string(), "-0 +0");
        assert_eq!(history[1].guess.to_string(), "1234");
        assert_eq!(history[1].score.to_string(), "-0 +4");
    }

    #[test]
    fn invalid_guesses_change_only_message() {
        let mut game = session("1234");
        let started = game.turn_started_at();

        for bad in ["0123", "0123"] {
            assert_eq!(game.submit_guess(bad), Err(GuessError::LeadingZero));
            assert_eq!(game.guess_count(), 0);
            assert_eq!(game.turn_started_at(), started);
            assert_eq!(game.message(), INVALID_GUESS_MESSAGE);
        }

        assert!(game.submit_guess("1123").is_err());
        assert!(game.submit_guess("12").is_err());
        assert_eq!(game.guess_count(), 0);
        assert_eq!(game.turn_started_at(), started);
    }

    #[test]
    fn invalid_guess_does_not_reset_turn_timer() {
        let mut game = session("1234");
        let started = game.turn_started_at();

        thread::sleep(Duration::from_millis(20));
        let _ = game.submit_guess("1123");
        let record = game.submit_guess("5678").unwrap().clone();

        assert!(record.time_spent >= Duration::from_millis(20));
        assert_eq!(record.time_spent, game.turn_started_at() - started);
    }

    #[test]
    fn time_spent_measured_from_previous_guess() {
        let mut game = session("1234");

        thread::sleep(Duration::from_millis(30));
        game.submit_guess("5678").unwrap();
        let after_first = game.turn_started_at();

        game.submit_guess("9876").unwrap();
        let second = &game.history()[0];

        assert_eq!(second.time_spent, game.turn_started_at() - after_first);
        assert!(game.history()[1].time_spent >= Duration::from_millis(30));
        assert!(second.time_spent_secs() >= 0.0);
    }

    #[test]
    fn time_spent_secs_rounds_to_two_decimals() {
        let record = GuessRecord {
            guess: Guess::parse("1234").unwrap(),
            score: Score::PERFECT,
            time_spent: Duration::from_millis(1_236),
        };
        assert!((record.time_spent_secs() - 1.24).abs() < f64::EPSILON);
    }

    #[test]
    fn perfect_guess_solves() {
        let mut game = session("4071");
        game.submit_guess("1234").unwrap();
        assert!(!game.is_solved());
        game.submit_guess("4071").unwrap();
        assert!(game.is_solved());
        assert_eq!(game.reveal_secret(), "4071");
    }

    #[test]
    fn toggles_do_not_affect_scoring() {
        let mut game = session("1234");
        assert_eq!(
            game.toggle_digit_annotation(1),
            Some(DigitMark::InKnownPosition)
        );
        assert_eq!(game.toggle_digit_annotation(11), None);
        game.submit_guess("1234").unwrap();
        assert!(game.is_solved());
        assert_eq!(game.annotation(1), Some(DigitMark::InKnownPosition));
    }

    #[test]
    fn new_game_resets_state() {
        let mut game = session("1234");
        game.submit_guess("5678").unwrap();
        game.toggle_digit_annotation(5);
        game.new_game();

        assert!(game.history().is_empty());
        assert_eq!(game.message(), "");
        assert_eq!(game.annotation(5), Some(DigitMark::Unknown));
    }

    #[test]
    fn new_game_with_rng_follows_seed() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut game = GameSession::with_rng(&mut rng);
        game.toggle_digit_annotation(2);
        game.toggle_digit_annotation(2);
        let started = game.turn_started_at();

        let mut expected_rng = StdRng::seed_from_u64(99);
        let _first = Secret::generate(&mut expected_rng);
        let expected = Secret::generate(&mut expected_rng);

        thread::sleep(Duration::from_millis(5));
        game.new_game_with_rng(&mut rng);

        assert_eq!(game.reveal_secret(), expected.reveal());
        assert!(game.turn_started_at() > started);
        assert!(game.annotations().iter().all(|(_, m)| m == DigitMark::Unknown));
    }
}
