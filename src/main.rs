//! Number Guess - CLI
//!
//! Four-digit bulls and cows with TUI and line-based modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use number_guess::{
    commands::{print_sample_statistics, run_sample, run_simple, score_guess},
    output::print_score_result,
    session::GameSession,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "number_guess",
    about = "Guess the four-digit number: no repeated digits, no leading zero",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score one guess against a known secret
    Score {
        /// The secret number, e.g. 1234
        secret: String,

        /// The guess to score, e.g. 1243
        guess: String,
    },

    /// Draw many secrets and check them against the rules
    Sample {
        /// Number of secrets to draw
        #[arg(short = 'n', long, default_value = "10000")]
        count: usize,
    },
}

/// Install the tracing subscriber
///
/// The TUI owns the terminal, so in that mode logs go to a file.
fn init_logging(verbose: bool, to_file: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if to_file {
        let log_file = std::fs::File::create("number_guess.log")?;
        let _ = builder
            .with_writer(std::sync::Arc::new(log_file))
            .with_ansi(false)
            .try_init();
    } else {
        let _ = builder.with_writer(std::io::stderr).try_init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.verbose, matches!(command, Commands::Play))?;

    match command {
        Commands::Play => run_play_command(),
        Commands::Simple => run_simple_command(),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
        Commands::Sample { count } => {
            run_sample_command(count);
            Ok(())
        }
    }
}

fn run_play_command() -> Result<()> {
    use number_guess::interactive::{App, run_tui};

    let app = App::new(GameSession::new());
    run_tui(app)
}

fn run_simple_command() -> Result<()> {
    let mut session = GameSession::new();
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(secret, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score_result(&result);
    Ok(())
}

fn run_sample_command(count: usize) {
    println!("🎲 Drawing {count} secrets...");
    let stats = run_sample(count, true);
    print_sample_statistics(&stats);
}
