//! Line escaping and formatting.
//!
//! Every line of the input becomes `"<line>\n"`. All but the last literal get a
//! trailing `\` so a preprocessor treats the run as one logical line, and a
//! single blank line closes the output.
//!
//! Embedded `"` and `\` characters are copied through untouched. Downstream
//! headers are generated against this exact output, so it must not change.

use crate::error::FormatError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Continuation marker appended to every literal except the last
const CONTINUATION: char = '\\';

/// Characters that end a line on their own; `\r\n` is also one terminator
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Iterator over the lines of a document, terminators removed.
///
/// Breaks on `\n`, `\r\n`, a lone `\r`, vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators. A terminator at end of input does not yield an empty line.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(LINE_BREAKS) {
            Some(pos) => {
                let line = &self.rest[..pos];
                let tail = &self.rest[pos..];
                let width = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(1, char::len_utf8)
                };
                self.rest = &tail[width..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Split `text` into lines.
#[must_use]
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Wrap a single line in quotes with a literal `\n` escape before the closing quote.
#[must_use]
pub fn quote_line(line: &str) -> String {
    format!("\"{line}\\n\"")
}

/// Format `text` into the complete output, trailing blank line included.
#[must_use]
pub fn format_lines(text: &str) -> String {
    let mut formatted = String::with_capacity(text.len() + text.len() / 8 + 1);
    let mut lines = split_lines(text).peekable();

    while let Some(line) = lines.next() {
        formatted.push_str(&quote_line(line));
        if lines.peek().is_some() {
            formatted.push(CONTINUATION);
        }
        formatted.push('\n');
    }

    formatted.push('\n');
    formatted
}

/// Write the formatted literals for `text` to `out`.
///
/// # Errors
///
/// Returns `Err` if writing to `out` fails.
pub fn write_formatted<W: Write>(text: &str, out: &mut W) -> io::Result<()> {
    out.write_all(format_lines(text).as_bytes())
}

/// Read the file at `path` and write its formatted literals to `out`.
///
/// The whole file is read and the handle released before anything is written,
/// so an unreadable file produces no partial output.
///
/// # Errors
///
/// Returns `FormatError::FileAccess` if the file cannot be read as UTF-8 text,
/// or `FormatError::Output` if writing to `out` fails.
pub fn format_file<W: Write>(path: &Path, out: &mut W) -> Result<(), FormatError> {
    let text = fs::read_to_string(path).map_err(|source| FormatError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    write_formatted(&text, out)?;
    out.flush()?;
    Ok(())
}
