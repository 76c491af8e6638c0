//! # certfmt
//!
//! Reformat a certificate (or any text) file into a sequence of quoted string
//! literals that can be pasted straight into C source or a `#define`.
//!
//! ## Usage
//!
//! - Format a file: `certfmt ca.pem`
//! - Prompt for the filename: `certfmt`
//!
//! See README.md for more details and examples.

/// Entry point for the CLI tool.
fn main() {
    certfmt::cli::run_cli();
}
