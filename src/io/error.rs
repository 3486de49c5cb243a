//! # Error reporting for reading of options files
//!
//! Problems encountered while reading, parsing or checking presolve options.
use std::io;

use thiserror::Error;

/// An `ImportError` is created when an error was encountered during IO or parsing.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file extension of the provided file path is not known or supported.
    ///
    /// The contained `String` is a message for the end user.
    #[error("{0}")]
    FileExtension(String),
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error(transparent)]
    IO(#[from] io::Error),
    /// The file is not valid TOML, or it has an unexpected shape.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    /// The slack tolerance could not be read as an exact number.
    #[error("invalid slack \"{literal}\": {reason}")]
    Slack {
        #[allow(missing_docs)]
        literal: String,
        /// Why the literal was rejected.
        reason: String,
    },
    /// The slack tolerance is below zero.
    #[error("slack can't be negative, got {0}")]
    NegativeSlack(String),
}
