//! Error types for bkt-core
//!
//! Every failure a command can hit falls into one of three kinds: invalid
//! input caught before a request is built, a failure reported by the storage
//! service, or a local filesystem failure. All of them terminate the
//! invocation with exit code 1.

use thiserror::Error;

/// Result type alias for bkt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for bkt operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid arguments, detected before any request is constructed
    #[error("{0}")]
    Usage(String),

    /// Failure reported by the storage service
    #[error("{0}")]
    Api(String),

    /// Local filesystem failure
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build a usage error from any message
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Build a service error from anything renderable
    pub fn api(message: impl ToString) -> Self {
        Self::Api(message.to_string())
    }
}
