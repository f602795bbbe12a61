//! CLI handler for the `validate` command.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use zscan::{validate, ScanError};

/// Validate inputs as terminated, scannable UTF-8 sequences.
///
/// A terminator is appended to each input before scanning, so a file is
/// valid when every leading byte up to its end (or its first embedded NUL)
/// is well-classified and fits.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Input files to validate (reads from stdin if none provided)
    #[arg(trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    /// Quiet mode: exit code only, no output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Exit codes for the validate command.
pub mod exit_codes {
    /// The sequence is valid.
    pub const SUCCESS: i32 = 0;
    /// The sequence is invalid.
    pub const INVALID: i32 = 1;
    /// I/O error (file not found, permission denied, etc.).
    pub const IO_ERROR: i32 = 2;
}

/// Run the validate command.
pub fn run(args: ValidateArgs) -> Result<i32> {
    if args.files.is_empty() {
        let mut input = Vec::new();
        io::stdin()
            .read_to_end(&mut input)
            .context("failed to read from stdin")?;
        input.push(0);
        return Ok(check(&input, "<stdin>", args.quiet));
    }

    let mut any_invalid = false;
    let mut any_io_error = false;

    for path in &args.files {
        match fs::read(path) {
            Ok(mut input) => {
                input.push(0);
                let filename = path.to_string_lossy();
                if check(&input, &filename, args.quiet) == exit_codes::INVALID {
                    any_invalid = true;
                }
            }
            Err(e) => {
                any_io_error = true;
                if !args.quiet {
                    eprintln!("error: {}: {}", path.display(), e);
                }
            }
        }
    }

    if any_io_error {
        Ok(exit_codes::IO_ERROR)
    } else if any_invalid {
        Ok(exit_codes::INVALID)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

/// Validate a single input and print any error.
fn check(input: &[u8], name: &str, quiet: bool) -> i32 {
    match validate(Some(input)) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            if !quiet {
                report(&err, input, name);
            }
            exit_codes::INVALID
        }
    }
}

/// Print a formatted error with the offending byte and its location.
fn report(err: &ScanError, input: &[u8], name: &str) {
    let (line, column) = line_column(input, err.offset);
    let byte_info = match input.get(err.offset) {
        Some(&byte) => format!(" (byte 0x{byte:02X})"),
        None => String::new(),
    };
    eprintln!("error: {err}{byte_info}");
    eprintln!("  --> {name}:{line}:{column}");
}

/// 1-indexed line and byte column of an offset.
fn line_column(input: &[u8], offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut line_start = 0;
    for (i, &byte) in input.iter().enumerate().take(offset) {
        if byte == b'\n' {
            line += 1;
            line_start = i + 1;
        }
    }
    (line, offset - line_start + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_column_of_first_byte() {
        assert_eq!(line_column(b"abc", 0), (1, 1));
    }

    #[test]
    fn line_column_after_newlines() {
        assert_eq!(line_column(b"ab\ncd\nef", 6), (3, 1));
        assert_eq!(line_column(b"ab\ncd\nef", 7), (3, 2));
    }
}
