//! CLI handler for the `count` command.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use zscan::{length, size_of};

/// Count characters and bytes of terminated sequences.
///
/// Prints the valid-character count and the byte size (terminator included)
/// of each input. Malformed bytes count to nothing.
#[derive(Debug, Parser)]
pub struct CountArgs {
    /// Input files to count (reads from stdin if none provided)
    #[arg(trailing_var_arg = true)]
    pub files: Vec<PathBuf>,
}

/// Run the count command.
pub fn run(args: CountArgs) -> Result<i32> {
    if args.files.is_empty() {
        let mut input = Vec::new();
        io::stdin()
            .read_to_end(&mut input)
            .context("failed to read from stdin")?;
        input.push(0);
        return Ok(count_one(&input, "<stdin>"));
    }

    let mut any_invalid = false;
    for path in &args.files {
        let mut input = fs::read(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        input.push(0);
        if count_one(&input, &path.to_string_lossy()) != 0 {
            any_invalid = true;
        }
    }
    Ok(if any_invalid { 1 } else { 0 })
}

/// Count a single input; nonzero when the sequence is not scannable.
fn count_one(input: &[u8], name: &str) -> i32 {
    match (length(Some(input)), size_of(Some(input))) {
        (Some(chars), Some(bytes)) => {
            println!("{name}: {chars} characters, {bytes} bytes");
            0
        }
        _ => {
            // Reachable when the input ends inside a multi-byte character.
            eprintln!("error: {name}: sequence is not scannable");
            1
        }
    }
}
