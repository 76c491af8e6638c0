//! Error type for certfmt operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a formatting run
#[derive(Error, Debug)]
pub enum FormatError {
    /// The input file is missing, unreadable, a directory, or not valid UTF-8
    #[error("Error reading file '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading filename: {0}")]
    Prompt(#[source] io::Error),

    #[error("No filename provided")]
    MissingFilename,

    #[error("Error writing output: {0}")]
    Output(#[from] io::Error),
}
