//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::output::formatters::{mark_symbol, score_badge};
use crate::session::GameSession;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple(session: &mut GameSession) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, &mut stdin.lock(), &mut stdout.lock()).map_err(|e| e.to_string())
}

/// Run the line-based game loop over arbitrary input and output
///
/// Input ends the game on `quit` or end of stream.
///
/// # Errors
///
/// Returns any I/O error from `input` or `output`.
pub fn run_simple_with<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(
        output,
        "\n╔══════════════════════════════════════════════════════════════╗"
    )?;
    writeln!(
        output,
        "║                Number Guess - Simple Mode                    ║"
    )?;
    writeln!(
        output,
        "╚══════════════════════════════════════════════════════════════╝\n"
    )?;
    writeln!(
        output,
        "I've picked a {}-digit number: no repeated digits, no leading 0.",
        session.secret_len()
    )?;
    writeln!(output, "Each result reads -cows +bulls:")?;
    writeln!(output, "  - cows:  right digit, wrong place")?;
    writeln!(output, "  - bulls: right digit, right place\n")?;
    writeln!(
        output,
        "Commands: 'quit' to exit, 'new' for new game, 'mark <d>' to tag a digit, 'marks' to list tags\n"
    )?;

    loop {
        write!(output, "Guess #{}: ", session.guess_count() + 1)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }
        let line = line.trim();

        match line {
            "quit" | "q" | "exit" => {
                writeln!(output, "\nThe number was {}.", session.reveal_secret())?;
                writeln!(output, "👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                writeln!(output, "The number was {}.", session.reveal_secret())?;
                session.new_game();
                writeln!(output, "\n🔄 New game started!\n")?;
            }
            "marks" => print_marks(session, output)?,
            _ if line.starts_with("mark") => {
                let arg = line.trim_start_matches("mark").trim();
                match arg.parse::<u8>().ok().filter(|&d| d <= 9) {
                    Some(digit) => {
                        if let Some(mark) = session.toggle_digit_annotation(digit) {
                            writeln!(output, "  {digit} {} {mark}", mark_symbol(mark))?;
                        }
                    }
                    None => writeln!(output, "❌ Usage: mark <0-9>")?,
                }
            }
            _ => {
                if session.submit_guess(line).is_err() {
                    writeln!(output, "❌ {}", session.message().red())?;
                    continue;
                }

                let record = &session.history()[0];
                writeln!(
                    output,
                    "   {} {}  ({:.2}s)",
                    record.score,
                    score_badge(record.score),
                    record.time_spent_secs()
                )?;

                if session.is_solved() {
                    writeln!(output, "\n{}", "═".repeat(62).bright_cyan())?;
                    writeln!(
                        output,
                        "{}",
                        format!(
                            "  🎉 Solved in {} {}!",
                            session.guess_count(),
                            if session.guess_count() == 1 {
                                "guess"
                            } else {
                                "guesses"
                            }
                        )
                        .bright_green()
                        .bold()
                    )?;
                    writeln!(output, "{}\n", "═".repeat(62).bright_cyan())?;
                    session.new_game();
                    writeln!(output, "🔄 New game started!\n")?;
                }
            }
        }
    }
}

fn print_marks<W: Write>(session: &GameSession, output: &mut W) -> io::Result<()> {
    for (digit, mark) in session.annotations().iter() {
        writeln!(output, "  {digit} {} {mark}", mark_symbol(mark))?;
    }
    Ok(())
}
