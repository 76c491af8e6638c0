//! CLI module containing the main entry point logic.
//!
//! Kept out of main.rs so integration tests and wrappers can drive the same code.

use crate::{fatal_error, formatter, input};
use clap::Parser as ClapParser;
use std::io;
use std::path::PathBuf;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for certfmt.
#[derive(ClapParser, Debug)]
#[command(name = "certfmt")]
#[command(version = PKG_VERSION)]
#[command(
    about = "Format a certificate file as continuation-joined C string literals",
    long_about = None
)]
pub struct Cli {
    /// File to format (prompted for on stdin when omitted)
    #[arg(value_name = "FILENAME")]
    pub filename: Option<PathBuf>,
}

/// Resolve the filename and print the formatted file to stdout.
///
/// # Errors
///
/// Propagates any `FormatError` from filename resolution, reading, or writing.
pub fn run(cli: Cli) -> Result<(), crate::FormatError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let path = input::resolve_filename(cli.filename, &mut stdin.lock(), &mut out)?;
    formatter::format_file(&path, &mut out)
}

/// Main CLI logic that can be called from external wrappers.
pub fn run_cli() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        fatal_error(&e.to_string());
    }
}
