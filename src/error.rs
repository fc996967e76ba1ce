//! Error types for the replay cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache and its backend.
///
/// An absent key is not an error anywhere in this crate; lookups signal
/// absence through `Option`.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Operation applied to a key holding the wrong kind of entry
    #[error("Wrong entry type for key: {0}")]
    WrongType(String),

    /// Increment applied to a value that is not a decimal integer
    #[error("Value is not an integer: {0}")]
    NotInteger(String),

    /// Key or value rejected by validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Backend could not be constructed or reset
    #[error("Backend error: {0}")]
    Backend(String),

    /// I/O failure while writing a report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
