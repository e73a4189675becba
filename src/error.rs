//! Error handling for the kiln application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Custom error types for kiln operations.
///
/// This enum represents all possible errors that can occur within kiln.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// File system error tied to a specific skeleton file
    #[error("Cannot process '{path}': {source}.")]
    FileError { path: String, source: io::Error },

    /// A required value is missing or was rejected by its validator
    #[error("Invalid value for '{field}': {message}.")]
    InvalidInput { field: String, message: String },

    /// Represents errors in the skeleton layout configuration file
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The token vocabulary could not be compiled into a matcher
    #[error("Token pattern error: {0}.")]
    TokenError(#[from] regex::Error),
}

/// Broad classification used by the orchestrator to report failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or rejected input. Nothing on disk has been touched by it.
    InvalidInput,
    /// A skeleton file could not be read, written or renamed.
    Io,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidInput => write!(f, "invalid input"),
            ErrorKind::Io => write!(f, "io error"),
        }
    }
}

impl Error {
    /// Builds an `InvalidInput` error for the given field.
    pub fn invalid_input<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Error::InvalidInput { field: field.into(), message: message.into() }
    }

    /// Wraps an `io::Error` with the path it happened on.
    pub fn file<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Error::FileError { path: path.as_ref().display().to_string(), source }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IoError(_) | Error::FileError { .. } => ErrorKind::Io,
            Error::InvalidInput { .. } | Error::ConfigError(_) | Error::TokenError(_) => {
                ErrorKind::InvalidInput
            }
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::IoError(io::Error::other(err))
    }
}

/// Convenience type alias for Results with kiln's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
