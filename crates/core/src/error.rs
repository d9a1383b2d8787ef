//! Error types for mup-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.

use thiserror::Error;

/// Result type alias for mup-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for mup-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Local path is not a regular file
    #[error("not a file: {0}")]
    NotAFile(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Network or store API error
    #[error("Network error: {0}")]
    Network(String),

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::NotAFile(_) => 2,  // UsageError
            Error::Network(_) => 3,   // NetworkError
            Error::NotFound(_) => 5,  // NotFound
            _ => 1,                   // GeneralError
        }
    }
}
