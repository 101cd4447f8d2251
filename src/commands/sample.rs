//! Secret generator audit
//!
//! Draws many secrets in parallel, checks every one against the secret rules and
//! reports how the draws are spread.

use crate::core::{DIGIT_COUNT, Secret};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Count of valid secrets: 9 leads × 9 × 8 × 7
pub const VALID_SECRET_COUNT: usize = 4536;

/// Statistics from a sampling run
#[derive(Debug)]
pub struct SampleStatistics {
    pub total: usize,
    pub violations: Vec<String>,
    pub distinct_secrets: usize,
    pub leading_digits: FxHashMap<u8, usize>,
    pub duration: Duration,
}

/// Generate `count` secrets and audit them
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
#[must_use]
pub fn run_sample(count: usize, show_progress: bool) -> SampleStatistics {
    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let secrets: Vec<Secret> = (0..count)
        .into_par_iter()
        .map_init(rand::rng, |rng, _| {
            let secret = Secret::generate(rng);
            pb.inc(1);
            secret
        })
        .collect();

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut violations = Vec::new();
    let mut distinct: FxHashSet<[u8; DIGIT_COUNT]> = FxHashSet::default();
    let mut leading_digits: FxHashMap<u8, usize> = FxHashMap::default();

    for secret in &secrets {
        if let Some(reason) = check_secret(secret.digits()) {
            warn!(secret = %secret.reveal(), reason, "invalid secret generated");
            violations.push(format!("{}: {reason}", secret.reveal()));
        }
        distinct.insert(*secret.digits());
        *leading_digits.entry(secret.digit_at(0)).or_insert(0) += 1;
    }

    info!(
        total = count,
        violations = violations.len(),
        distinct = distinct.len(),
        "sampling complete"
    );

    SampleStatistics {
        total: count,
        violations,
        distinct_secrets: distinct.len(),
        leading_digits,
        duration,
    }
}

/// Describe the first rule `digits` breaks, if any
fn check_secret(digits: &[u8; DIGIT_COUNT]) -> Option<&'static str> {
    if digits.iter().any(|&d| d > 9) {
        return Some("digit out of range");
    }
    if digits[0] == 0 {
        return Some("leading zero");
    }
    let unique: FxHashSet<u8> = digits.iter().copied().collect();
    if unique.len() != DIGIT_COUNT {
        return Some("repeated digit");
    }
    None
}

/// Print sampling statistics
pub fn print_sample_statistics(stats: &SampleStatistics) {
    println!("\n{}", "═".repeat(60));
    println!(" Secret Generator Audit ");
    println!("{}", "═".repeat(60));

    println!("\n📊 {}", "Overview".bright_cyan().bold());
    println!("  Secrets drawn:     {}", stats.total);
    println!(
        "  Distinct secrets:  {} of {VALID_SECRET_COUNT} possible",
        stats.distinct_secrets
    );
    println!("  Time taken:        {:.2}s", stats.duration.as_secs_f64());

    if stats.violations.is_empty() {
        println!("  Violations:        {}", "none".green().bold());
    } else {
        println!(
            "  Violations:        {}",
            stats.violations.len().to_string().red().bold()
        );
        for violation in stats.violations.iter().take(10) {
            println!("    {}", violation.red());
        }
    }

    if stats.total == 0 {
        return;
    }

    println!("\n📈 {}", "Leading Digit Distribution".bright_cyan().bold());
    let max_count = stats.leading_digits.values().copied().max().unwrap_or(1);
    for digit in 0..=9u8 {
        let count = stats.leading_digits.get(&digit).copied().unwrap_or(0);
        let percentage = count as f64 / stats.total as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {digit}: {bar} {count:6} ({percentage:5.1}%)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_finds_no_violations() {
        let stats = run_sample(10_000, false);

        assert_eq!(stats.total, 10_000);
        assert!(stats.violations.is_empty(), "{:?}", stats.violations);
        assert!(stats.distinct_secrets <= VALID_SECRET_COUNT);
        assert_eq!(stats.leading_digits.get(&0), None);
        assert_eq!(stats.leading_digits.values().sum::<usize>(), 10_000);
    }

    #[test]
    fn sample_of_zero() {
        let stats = run_sample(0, false);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.distinct_secrets, 0);
        assert!(stats.leading_digits.is_empty());
    }

    #[test]
    fn check_secret_reports_each_rule() {
        assert_eq!(check_secret(&[1, 2, 3, 4]), None);
        assert_eq!(check_secret(&[0, 2, 3, 4]), Some("leading zero"));
        assert_eq!(check_secret(&[1, 2, 2, 4]), Some("repeated digit"));
        assert_eq!(check_secret(&[1, 2, 3, 10]), Some("digit out of range"));
    }
}
