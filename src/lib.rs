//! Number Guess
//!
//! A four-digit bulls and cows game: find a secret number with no repeated digits
//! and no leading zero, guided by `-cows +bulls` feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use number_guess::core::Secret;
//! use number_guess::session::GameSession;
//!
//! let mut game = GameSession::with_secret(Secret::parse("1234").unwrap());
//! let record = game.submit_guess("1243").unwrap();
//! assert_eq!(record.score.to_string(), "-2 +2");
//! ```

// Core domain types
pub mod core;

// Game state
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
