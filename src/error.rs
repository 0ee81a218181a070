//! Error type shared by the generators and the persistence pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating or reading filtrations.
#[derive(Debug, Error)]
pub enum FiltrationError {
    /// A command-line or API argument is out of range or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Opening, reading or writing a file failed.
    #[error("I/O failure on {}", path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination exists and the overwrite policy forbids replacing it.
    #[error("refusing to overwrite existing file {}", path.display())]
    OutputExists { path: PathBuf },

    /// A filtration line could not be parsed.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl FiltrationError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::IoFailure { path: path.into(), source }
    }

    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse { line, message: message.into() }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FiltrationError>;
