//! Backend Module
//!
//! The capability seam between the cache and its key-value storage.

mod memory;

// Re-export public types
pub use memory::MemoryBackend;

use crate::error::Result;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

// == Backend Trait ==
/// Minimal key-value capability set the cache needs from its storage.
///
/// A key holds either a scalar byte value or a list of byte values.
/// Operations applied to the wrong kind of entry fail with
/// `CacheError::WrongType`; an absent key is never an error on reads.
pub trait Backend {
    /// Associates a key with a scalar value, overwriting any prior entry.
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Returns the scalar value stored under a key, or None if absent.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Increments the integer stored under a key and returns the new count.
    ///
    /// An absent key is created holding 1. The stored representation is
    /// decimal text, so the counter reads back through `get` like any
    /// other scalar.
    fn incr(&mut self, key: &str) -> Result<i64>;

    /// Appends a value to the list stored under a key, creating the list
    /// if absent.
    fn rpush(&mut self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Returns the inclusive `start..=stop` range of a list.
    ///
    /// Negative indices count from the end of the list, so `(0, -1)` is
    /// the whole list. An absent key yields an empty range.
    fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<Vec<u8>>>;

    /// Removes every entry from the keyspace.
    fn flushdb(&mut self) -> Result<()>;
}
