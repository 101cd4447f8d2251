//! Display functions for command results

use super::formatters::score_badge;
use crate::commands::ScoreResult;
use colored::Colorize;

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Secret: {}", result.secret.bright_yellow().bold());
    println!("Guess:  {}", result.guess.bright_white().bold());
    println!("{}", "─".repeat(40).cyan());

    println!(
        "\nResult: {} {}",
        result.score.to_string().bright_yellow().bold(),
        score_badge(result.score)
    );
    println!(
        "  Right place: {}",
        result.score.correct_position().to_string().green()
    );
    println!(
        "  Wrong place: {}",
        result.score.correct_digit().to_string().yellow()
    );

    if result.score.is_perfect() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}
