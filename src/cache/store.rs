//! Typed Store Module
//!
//! The typed access layer over a `Backend`: key assignment on insert, raw
//! and decoded reads, and the keyspace primitives call instrumentation is
//! recorded through.

use tracing::debug;

use crate::backend::{Backend, MemoryBackend};
use crate::cache::{KeyGenerator, Value, INPUTS_SUFFIX, OUTPUTS_SUFFIX};
use crate::error::Result;

// == Store ==
/// Typed key-value store over a pluggable backend.
#[derive(Debug)]
pub struct Store<B: Backend = MemoryBackend> {
    /// Underlying key-value backend
    backend: B,
    /// Generator for entry keys
    keys: KeyGenerator,
}

impl<B: Backend> Store<B> {
    // == Constructor ==
    /// Creates a store over the given backend and flushes its keyspace.
    ///
    /// Flushing on construction is the fresh-session policy: every store
    /// starts from an empty namespace, whatever the backend held before.
    /// A backend that cannot be flushed is fatal here; there is no retry.
    pub fn new(backend: B) -> Result<Self> {
        let mut store = Self {
            backend,
            keys: KeyGenerator::new(),
        };
        store.backend.flushdb()?;
        Ok(store)
    }

    // == Put ==
    /// Associates a key with a value, overwriting any prior value.
    pub fn put(&mut self, key: &str, value: &Value) -> Result<()> {
        self.backend.set(key, value.to_bytes())
    }

    // == Insert ==
    /// Stores a value under a freshly generated key and returns the key.
    pub fn insert(&mut self, value: &Value) -> Result<String> {
        let key = self.keys.generate();
        self.put(&key, value)?;
        debug!("Stored entry under key {}", key);
        Ok(key)
    }

    // == Get ==
    /// Returns the raw stored bytes, or None if the key was never written.
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.backend.get(key)
    }

    // == Get With ==
    /// Returns the stored value decoded by `decode`.
    ///
    /// The decode function is applied only when the key is present; a
    /// decode failure reads as absence. Callers that want the raw bytes
    /// unchanged use `get` directly.
    pub fn get_with<T>(
        &self,
        key: &str,
        decode: impl FnOnce(&[u8]) -> Option<T>,
    ) -> Result<Option<T>> {
        Ok(self.get(key)?.and_then(|bytes| decode(&bytes)))
    }

    // == Get String ==
    /// Returns the stored value decoded as UTF-8 text.
    ///
    /// An absent key and invalid UTF-8 both yield an empty string; the two
    /// conditions are deliberately not distinguished here.
    pub fn get_string(&self, key: &str) -> Result<String> {
        Ok(self
            .get_with(key, |bytes| String::from_utf8(bytes.to_vec()).ok())?
            .unwrap_or_default())
    }

    // == Get Integer ==
    /// Returns the stored value parsed as a base-10 integer.
    ///
    /// An absent key and unparsable text both yield 0; the two conditions
    /// are deliberately not distinguished here.
    pub fn get_integer(&self, key: &str) -> Result<i64> {
        Ok(self
            .get_with(key, |bytes| {
                std::str::from_utf8(bytes).ok()?.trim().parse().ok()
            })?
            .unwrap_or(0))
    }

    // == Incr ==
    /// Increments the counter stored under a key and returns the new count.
    pub fn incr(&mut self, key: &str) -> Result<i64> {
        self.backend.incr(key)
    }

    // == Push History ==
    /// Appends an entry to one of an operation's history logs.
    pub fn push_history(&mut self, log_key: &str, entry: &str) -> Result<()> {
        self.backend.rpush(log_key, entry.as_bytes().to_vec())
    }

    // == History ==
    /// Returns the full inputs and outputs logs recorded for an operation.
    ///
    /// Log entries are display strings; they are decoded lossily so a log
    /// can always be reported.
    pub fn history(&self, name: &str) -> Result<(Vec<String>, Vec<String>)> {
        let inputs = self.read_log(&format!("{}{}", name, INPUTS_SUFFIX))?;
        let outputs = self.read_log(&format!("{}{}", name, OUTPUTS_SUFFIX))?;
        Ok((inputs, outputs))
    }

    fn read_log(&self, key: &str) -> Result<Vec<String>> {
        Ok(self
            .backend
            .lrange(key, 0, -1)?
            .into_iter()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .collect())
    }
}
