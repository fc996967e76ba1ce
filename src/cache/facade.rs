//! Cache Facade
//!
//! The public entry point: a shared, instrumented cache over an
//! in-process backend.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::backend::{Backend, MemoryBackend};
use crate::cache::{CallRecorder, OperationRecord, ReplayReporter, Store, Value, STORE_OP};
use crate::config::Config;
use crate::error::Result;

// == Cache ==
/// Instrumented key-value cache.
///
/// `store` runs through the standard hook chain (invocation counting and
/// call history); reads pass straight through with no instrumentation.
/// The store sits behind `Arc<RwLock<_>>` so one cache can be shared
/// across tasks: a tracked call holds the write guard for its whole
/// count-record-store sequence, and `replay` reads under the read guard,
/// so it never observes a half-recorded call.
pub struct Cache<B: Backend = MemoryBackend> {
    /// Shared typed store
    store: Arc<RwLock<Store<B>>>,
    /// Hook chain applied to tracked operations
    recorder: Arc<CallRecorder<B>>,
    /// Transcript reporter
    reporter: ReplayReporter,
}

impl Cache<MemoryBackend> {
    // == Constructor ==
    /// Creates a cache over a fresh in-memory backend.
    pub fn new() -> Result<Self> {
        Self::with_backend(MemoryBackend::new())
    }

    /// Creates a cache over an in-memory backend with the given limits.
    pub fn with_config(config: &Config) -> Result<Self> {
        Self::with_backend(MemoryBackend::with_config(config))
    }
}

impl<B: Backend> Cache<B> {
    /// Creates a cache over the given backend, flushing its keyspace.
    ///
    /// Construction is the fresh-session point: whatever the backend held
    /// before is cleared, and a backend that cannot be flushed fails here
    /// with the underlying cause.
    pub fn with_backend(backend: B) -> Result<Self> {
        let store = Store::new(backend)?;
        info!("Cache initialized with a fresh keyspace");

        Ok(Self {
            store: Arc::new(RwLock::new(store)),
            recorder: Arc::new(CallRecorder::standard()),
            reporter: ReplayReporter::new(),
        })
    }

    // == Store ==
    /// Stores a value under a freshly generated key and returns the key.
    ///
    /// The call is counted and history-recorded as one unit.
    pub async fn store(&self, value: impl Into<Value>) -> Result<String> {
        let value = value.into();
        let input = value.tuple_repr();

        let mut store = self.store.write().await;
        self.recorder
            .record(&mut store, STORE_OP, &input, |store| store.insert(&value))
    }

    // == Get ==
    /// Returns the raw bytes stored under a key, or None if absent.
    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.store.read().await.get(key)
    }

    // == Get With ==
    /// Returns the stored value decoded by `decode`; a decode failure
    /// reads as absence.
    pub async fn get_with<T>(
        &self,
        key: &str,
        decode: impl FnOnce(&[u8]) -> Option<T>,
    ) -> Result<Option<T>> {
        self.store.read().await.get_with(key, decode)
    }

    // == Get String ==
    /// Returns the stored value as UTF-8 text, or an empty string when
    /// the key is absent or the bytes are not valid UTF-8.
    pub async fn get_string(&self, key: &str) -> Result<String> {
        self.store.read().await.get_string(key)
    }

    // == Get Integer ==
    /// Returns the stored value as a base-10 integer, or 0 when the key
    /// is absent or the text does not parse.
    pub async fn get_integer(&self, key: &str) -> Result<i64> {
        self.store.read().await.get_integer(key)
    }

    // == Replay ==
    /// Prints the call transcript of a tracked operation to stdout.
    pub async fn replay(&self, name: &str) -> Result<()> {
        let store = self.store.read().await;
        self.reporter.replay(&store, name)
    }

    // == Replay Report ==
    /// Returns the call transcript of a tracked operation.
    pub async fn replay_report(&self, name: &str) -> Result<String> {
        let store = self.store.read().await;
        self.reporter.render(&store, name)
    }

    // == Operation Record ==
    /// Returns the raw counter and history logs for a tracked operation.
    pub async fn operation_record(&self, name: &str) -> Result<OperationRecord> {
        let store = self.store.read().await;
        self.reporter.snapshot(&store, name)
    }
}

impl<B: Backend> Clone for Cache<B> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            recorder: Arc::clone(&self.recorder),
            reporter: ReplayReporter::new(),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_and_get_roundtrip() {
        let cache = Cache::new().unwrap();

        let key = cache.store("foo").await.unwrap();
        assert_eq!(cache.get(&key).await.unwrap(), Some(b"foo".to_vec()));
        assert_eq!(cache.get_string(&key).await.unwrap(), "foo");
    }

    #[tokio::test]
    async fn test_store_all_value_types() {
        let cache = Cache::new().unwrap();

        let text_key = cache.store("text").await.unwrap();
        let int_key = cache.store(42i64).await.unwrap();
        let float_key = cache.store(2.5).await.unwrap();
        let bytes_key = cache.store(vec![1u8, 2, 3]).await.unwrap();

        assert_eq!(cache.get_string(&text_key).await.unwrap(), "text");
        assert_eq!(cache.get_integer(&int_key).await.unwrap(), 42);
        assert_eq!(cache.get_string(&float_key).await.unwrap(), "2.5");
        assert_eq!(cache.get(&bytes_key).await.unwrap(), Some(vec![1u8, 2, 3]));
    }

    #[tokio::test]
    async fn test_counter_tracks_store_calls() {
        let cache = Cache::new().unwrap();
        assert_eq!(cache.get_integer(STORE_OP).await.unwrap(), 0);

        cache.store("a").await.unwrap();
        cache.store("b").await.unwrap();

        assert_eq!(cache.get_integer(STORE_OP).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_reads_are_not_instrumented() {
        let cache = Cache::new().unwrap();

        let key = cache.store("a").await.unwrap();
        for _ in 0..5 {
            cache.get_string(&key).await.unwrap();
        }

        assert_eq!(cache.get_integer(STORE_OP).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_fresh_cache_flushes_seeded_backend() {
        let mut backend = MemoryBackend::new();
        backend.set("leftover", b"stale".to_vec()).unwrap();

        let cache = Cache::with_backend(backend).unwrap();
        assert_eq!(cache.get("leftover").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clones_share_one_store() {
        let cache = Cache::new().unwrap();
        let other = cache.clone();

        let key = other.store("shared").await.unwrap();

        assert_eq!(cache.get_string(&key).await.unwrap(), "shared");
        assert_eq!(cache.get_integer(STORE_OP).await.unwrap(), 1);
    }
}
