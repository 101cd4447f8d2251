//! Command implementations

pub mod sample;
pub mod score;
pub mod simple;

pub use sample::{SampleStatistics, print_sample_statistics, run_sample};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
