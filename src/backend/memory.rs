//! In-Memory Backend
//!
//! HashMap-backed implementation of the `Backend` capability set.
//! Counters and lists follow redis-shaped semantics: a counter is decimal
//! text incremented in place, a list is append-only and range-read with
//! optional from-the-end indices.

use std::collections::HashMap;

use tracing::debug;

use crate::backend::Backend;
use crate::config::Config;
use crate::error::{CacheError, Result};

// == Slot ==
/// A single keyspace entry: a scalar byte value or an append-only list.
#[derive(Debug, Clone)]
enum Slot {
    Value(Vec<u8>),
    List(Vec<Vec<u8>>),
}

// == Memory Backend ==
/// In-process key-value backend.
#[derive(Debug)]
pub struct MemoryBackend {
    /// Keyspace
    slots: HashMap<String, Slot>,
    /// Maximum accepted key length in bytes
    max_key_length: usize,
    /// Maximum accepted value size in bytes
    max_value_size: usize,
}

impl MemoryBackend {
    // == Constructor ==
    /// Creates a backend with the default size limits.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates a backend with limits taken from the given configuration.
    ///
    /// # Arguments
    /// * `config` - Size limits applied to every write
    pub fn with_config(config: &Config) -> Self {
        Self {
            slots: HashMap::new(),
            max_key_length: config.max_key_length,
            max_value_size: config.max_value_size,
        }
    }

    // == Validation ==
    /// Rejects oversized keys and values before they enter the keyspace.
    fn validate(&self, key: &str, value_len: usize) -> Result<()> {
        if key.len() > self.max_key_length {
            return Err(CacheError::InvalidRequest(format!(
                "Key exceeds maximum length of {} bytes",
                self.max_key_length
            )));
        }
        if value_len > self.max_value_size {
            return Err(CacheError::InvalidRequest(format!(
                "Value exceeds maximum size of {} bytes",
                self.max_value_size
            )));
        }
        Ok(())
    }

    // == Length ==
    /// Returns the current number of entries in the keyspace.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    // == Is Empty ==
    /// Returns true if the keyspace is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for MemoryBackend {
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        self.validate(key, value.len())?;
        self.slots.insert(key.to_string(), Slot::Value(value));
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        match self.slots.get(key) {
            Some(Slot::Value(bytes)) => Ok(Some(bytes.clone())),
            Some(Slot::List(_)) => Err(CacheError::WrongType(key.to_string())),
            None => Ok(None),
        }
    }

    fn incr(&mut self, key: &str) -> Result<i64> {
        self.validate(key, 0)?;

        let next = match self.slots.get(key) {
            Some(Slot::Value(bytes)) => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|_| CacheError::NotInteger(key.to_string()))?;
                let current: i64 = text
                    .trim()
                    .parse()
                    .map_err(|_| CacheError::NotInteger(key.to_string()))?;
                current + 1
            }
            Some(Slot::List(_)) => return Err(CacheError::WrongType(key.to_string())),
            None => 1,
        };

        self.slots
            .insert(key.to_string(), Slot::Value(next.to_string().into_bytes()));
        Ok(next)
    }

    fn rpush(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        self.validate(key, value.len())?;

        match self.slots.get_mut(key) {
            Some(Slot::List(items)) => {
                items.push(value);
                Ok(())
            }
            Some(Slot::Value(_)) => Err(CacheError::WrongType(key.to_string())),
            None => {
                self.slots.insert(key.to_string(), Slot::List(vec![value]));
                Ok(())
            }
        }
    }

    fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<Vec<u8>>> {
        let items = match self.slots.get(key) {
            Some(Slot::List(items)) => items,
            Some(Slot::Value(_)) => return Err(CacheError::WrongType(key.to_string())),
            None => return Ok(Vec::new()),
        };

        let len = items.len() as i64;

        // Negative indices count from the end of the list
        let start = if start < 0 { (len + start).max(0) } else { start };
        let stop = if stop < 0 { len + stop } else { stop };

        if start >= len || stop < 0 || start > stop {
            return Ok(Vec::new());
        }

        let stop = stop.min(len - 1);
        Ok(items[start as usize..=stop as usize].to_vec())
    }

    fn flushdb(&mut self) -> Result<()> {
        let dropped = self.slots.len();
        self.slots.clear();
        debug!("Flushed keyspace, dropped {} entries", dropped);
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{MAX_KEY_LENGTH, MAX_VALUE_SIZE};

    #[test]
    fn test_set_and_get() {
        let mut backend = MemoryBackend::new();

        backend.set("key1", b"value1".to_vec()).unwrap();
        let value = backend.get("key1").unwrap();

        assert_eq!(value, Some(b"value1".to_vec()));
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn test_get_absent() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("missing").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let mut backend = MemoryBackend::new();

        backend.set("key1", b"old".to_vec()).unwrap();
        backend.set("key1", b"new".to_vec()).unwrap();

        assert_eq!(backend.get("key1").unwrap(), Some(b"new".to_vec()));
        assert_eq!(backend.len(), 1);
    }

    #[test]
    fn test_get_on_list_is_wrong_type() {
        let mut backend = MemoryBackend::new();

        backend.rpush("log", b"entry".to_vec()).unwrap();

        let result = backend.get("log");
        assert!(matches!(result, Err(CacheError::WrongType(_))));
    }

    #[test]
    fn test_incr_creates_at_one() {
        let mut backend = MemoryBackend::new();

        assert_eq!(backend.incr("counter").unwrap(), 1);
        assert_eq!(backend.get("counter").unwrap(), Some(b"1".to_vec()));
    }

    #[test]
    fn test_incr_increments() {
        let mut backend = MemoryBackend::new();

        backend.incr("counter").unwrap();
        backend.incr("counter").unwrap();
        assert_eq!(backend.incr("counter").unwrap(), 3);
    }

    #[test]
    fn test_incr_on_text_fails() {
        let mut backend = MemoryBackend::new();

        backend.set("key1", b"not a number".to_vec()).unwrap();

        let result = backend.incr("key1");
        assert!(matches!(result, Err(CacheError::NotInteger(_))));
    }

    #[test]
    fn test_incr_on_list_is_wrong_type() {
        let mut backend = MemoryBackend::new();

        backend.rpush("log", b"entry".to_vec()).unwrap();

        let result = backend.incr("log");
        assert!(matches!(result, Err(CacheError::WrongType(_))));
    }

    #[test]
    fn test_rpush_preserves_order() {
        let mut backend = MemoryBackend::new();

        backend.rpush("log", b"a".to_vec()).unwrap();
        backend.rpush("log", b"b".to_vec()).unwrap();
        backend.rpush("log", b"c".to_vec()).unwrap();

        let items = backend.lrange("log", 0, -1).unwrap();
        assert_eq!(items, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
    }

    #[test]
    fn test_rpush_on_scalar_is_wrong_type() {
        let mut backend = MemoryBackend::new();

        backend.set("key1", b"value".to_vec()).unwrap();

        let result = backend.rpush("key1", b"entry".to_vec());
        assert!(matches!(result, Err(CacheError::WrongType(_))));
    }

    #[test]
    fn test_lrange_absent_is_empty() {
        let backend = MemoryBackend::new();
        assert!(backend.lrange("missing", 0, -1).unwrap().is_empty());
    }

    #[test]
    fn test_lrange_partial_ranges() {
        let mut backend = MemoryBackend::new();

        for item in [b"a", b"b", b"c", b"d"] {
            backend.rpush("log", item.to_vec()).unwrap();
        }

        assert_eq!(
            backend.lrange("log", 1, 2).unwrap(),
            vec![b"b".to_vec(), b"c".to_vec()]
        );
        // Stop past the end is clamped
        assert_eq!(backend.lrange("log", 2, 100).unwrap().len(), 2);
        // Negative start counts from the end
        assert_eq!(
            backend.lrange("log", -2, -1).unwrap(),
            vec![b"c".to_vec(), b"d".to_vec()]
        );
        // Inverted range is empty
        assert!(backend.lrange("log", 3, 1).unwrap().is_empty());
    }

    #[test]
    fn test_flushdb_clears_everything() {
        let mut backend = MemoryBackend::new();

        backend.set("key1", b"value".to_vec()).unwrap();
        backend.rpush("log", b"entry".to_vec()).unwrap();
        backend.incr("counter").unwrap();

        backend.flushdb().unwrap();

        assert!(backend.is_empty());
        assert_eq!(backend.get("key1").unwrap(), None);
        assert!(backend.lrange("log", 0, -1).unwrap().is_empty());
    }

    #[test]
    fn test_key_too_long() {
        let mut backend = MemoryBackend::new();
        let long_key = "x".repeat(MAX_KEY_LENGTH + 1);

        let result = backend.set(&long_key, b"value".to_vec());
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[test]
    fn test_value_too_large() {
        let mut backend = MemoryBackend::new();
        let large_value = vec![0u8; MAX_VALUE_SIZE + 1];

        let result = backend.set("key", large_value);
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }
}
