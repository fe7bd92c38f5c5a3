//! Error types for mixlang operations.
//!
//! The core pipeline has exactly one failure mode: the input could not be
//! opened or read. Everything else the splitter and extractors encounter
//! (empty files, content before the first marker, unknown language tags,
//! code with no declarations) is a valid outcome that yields an empty
//! collection, never an error.
//!
//! Configuration loading adds a second category for malformed config files.
//! It is only reachable through [`crate::Config::load`].

use thiserror::Error;

/// Result type for mixlang operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for mixlang operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened or read
    ///
    /// The underlying message is reachable through `source()`.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this error came from file access.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
