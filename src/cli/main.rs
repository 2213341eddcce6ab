//! Referential integrity CLI for masked datasets.

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "mask-integrity-cli")]
#[command(version, about = "Verifies referential integrity across masked datasets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check one foreign-key relationship in the masked dataset
    Check(commands::check::CheckArgs),
    /// Generate the demo original/masked dataset pair
    Seed(commands::seed::SeedArgs),
}

// Exit status: 0 = integrity holds, 1 = integrity violated, 2 = the check
// could not be completed (bad input, query failure).
const EXIT_PASSED: i32 = 0;
const EXIT_FAILED: i32 = 1;
const EXIT_ERROR: i32 = 2;

fn main() {
    // Logging goes to stderr so stdout stays parseable report output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    std::process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    let result: Result<i32, CliError> = match cli.command {
        Command::Check(args) => commands::check::handle_check(&args)
            .map(|outcome| if outcome.passed() { EXIT_PASSED } else { EXIT_FAILED }),
        Command::Seed(args) => commands::seed::handle_seed(&args).map(|()| EXIT_PASSED),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            EXIT_ERROR
        }
    }
}
