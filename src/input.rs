//! Filename resolution: take it from the command line, or ask for it.

use crate::error::FormatError;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Prompt shown when no filename is given on the command line
pub const FILENAME_PROMPT: &str =
    "Enter Filename (you can also enter the filename on the command line): ";

/// Return the filename from `arg`, or prompt on `writer` and read one line from `reader`.
///
/// Only the line terminator is removed from the typed filename.
///
/// # Errors
///
/// Returns `FormatError::MissingFilename` if `reader` is already at end of input,
/// `FormatError::Prompt` if reading fails, or `FormatError::Output` if the prompt
/// cannot be written.
pub fn resolve_filename<R: BufRead, W: Write>(
    arg: Option<PathBuf>,
    reader: &mut R,
    writer: &mut W,
) -> Result<PathBuf, FormatError> {
    if let Some(path) = arg {
        return Ok(path);
    }

    write!(writer, "{FILENAME_PROMPT}")?;
    writer.flush()?;

    let mut line = String::new();
    let read = reader.read_line(&mut line).map_err(FormatError::Prompt)?;
    if read == 0 {
        return Err(FormatError::MissingFilename);
    }

    Ok(PathBuf::from(strip_line_ending(&line)))
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l))
}
