//! Replay Cache - An embedded key-value cache with call instrumentation
//!
//! Stores values under generated keys and records every tracked call's
//! invocation count and input/output history, replayable as a transcript.

pub mod backend;
pub mod cache;
pub mod config;
pub mod error;

pub use backend::{Backend, MemoryBackend};
pub use cache::{Cache, OperationRecord, ReplayReporter, Value};
pub use config::Config;
pub use error::{CacheError, Result};
