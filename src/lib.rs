//! # certfmt
//!
//! Turn the lines of a text file into continuation-joined, quoted string literals.

pub mod cli;
pub mod error;
pub mod formatter;
pub mod input;

pub use error::FormatError;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
