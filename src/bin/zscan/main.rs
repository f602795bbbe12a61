//! Zscan CLI for scanning nul-terminated UTF-8 byte sequences.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod count;
mod validate;

#[derive(Debug, Parser)]
#[command(name = "zscan")]
#[command(about = "Bounded UTF-8 scanning toolkit", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate inputs as terminated, scannable sequences
    Validate(validate::ValidateArgs),
    /// Count characters and bytes of inputs
    Count(count::CountArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let code = match cli.command {
        Command::Validate(args) => validate::run(args)?,
        Command::Count(args) => count::run(args)?,
    };

    std::process::exit(code);
}
