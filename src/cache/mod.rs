//! Cache Module
//!
//! An embedded key-value cache with call counting and replayable call history.

mod facade;
mod keys;
mod recorder;
mod replay;
mod store;
mod value;


// Re-export public types
pub use facade::Cache;
pub use keys::KeyGenerator;
pub use recorder::{CallHistory, CallHook, CallRecorder, CountCalls};
pub use replay::{OperationRecord, ReplayReporter};
pub use store::Store;
pub use value::Value;

// == Public Constants ==
/// Name of the tracked store operation
pub const STORE_OP: &str = "store";

/// Suffix of the key holding an operation's recorded inputs
pub const INPUTS_SUFFIX: &str = ":inputs";

/// Suffix of the key holding an operation's recorded outputs
pub const OUTPUTS_SUFFIX: &str = ":outputs";
