//! Call Recorder Module
//!
//! An ordered before/after hook chain wrapped around a tracked operation.
//! The stock hooks implement invocation counting and input/output history
//! recording on top of the store's own keyspace.

use crate::backend::Backend;
use crate::cache::{Store, INPUTS_SUFFIX, OUTPUTS_SUFFIX};
use crate::error::Result;

// == Call Hook Trait ==
/// One cross-cutting behavior around a tracked operation.
///
/// `before` runs ahead of the operation with the rendered arguments;
/// `after` runs only once the operation has completed, with the rendered
/// result. Every hook in a chain sees every call exactly once, whatever
/// its position in the chain.
pub trait CallHook<B: Backend> {
    /// Runs before the tracked operation.
    fn before(&self, store: &mut Store<B>, name: &str, input: &str) -> Result<()>;

    /// Runs after the tracked operation has completed.
    fn after(&self, store: &mut Store<B>, name: &str, output: &str) -> Result<()>;
}

// == Count Calls ==
/// Increments the per-operation invocation counter.
///
/// The counter lives under the operation name itself, so it reads back
/// through `get_integer(name)`.
#[derive(Debug, Default)]
pub struct CountCalls;

impl<B: Backend> CallHook<B> for CountCalls {
    fn before(&self, store: &mut Store<B>, name: &str, _input: &str) -> Result<()> {
        store.incr(name)?;
        Ok(())
    }

    fn after(&self, _store: &mut Store<B>, _name: &str, _output: &str) -> Result<()> {
        Ok(())
    }
}

// == Call History ==
/// Appends each call's rendered input and output to the operation's
/// history logs.
///
/// Inputs go to `<name>:inputs` before the call and outputs to
/// `<name>:outputs` after it, so the output log never runs ahead of work
/// actually completed.
#[derive(Debug, Default)]
pub struct CallHistory;

impl<B: Backend> CallHook<B> for CallHistory {
    fn before(&self, store: &mut Store<B>, name: &str, input: &str) -> Result<()> {
        store.push_history(&format!("{}{}", name, INPUTS_SUFFIX), input)
    }

    fn after(&self, store: &mut Store<B>, name: &str, output: &str) -> Result<()> {
        store.push_history(&format!("{}{}", name, OUTPUTS_SUFFIX), output)
    }
}

// == Call Recorder ==
/// An ordered chain of hooks wrapped around tracked operations.
pub struct CallRecorder<B: Backend> {
    /// Hooks in registration order
    hooks: Vec<Box<dyn CallHook<B> + Send + Sync>>,
}

impl<B: Backend> CallRecorder<B> {
    // == Constructor ==
    /// Creates a recorder with no hooks.
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Creates the standard chain: invocation counting, then history.
    pub fn standard() -> Self {
        Self::new().with_hook(CountCalls).with_hook(CallHistory)
    }

    /// Appends a hook to the chain.
    pub fn with_hook(mut self, hook: impl CallHook<B> + Send + Sync + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    // == Record ==
    /// Runs a tracked operation through the hook chain.
    ///
    /// Before-hooks run in registration order, then the operation, then
    /// after-hooks in the same order with the operation's rendered result.
    /// If the operation fails, after-hooks do not run: the input log keeps
    /// the attempt but no output is invented for it. The caller holds
    /// whatever guard protects the store for the whole sequence, so one
    /// call's counter bump and paired log appends are never observed
    /// half-applied.
    ///
    /// # Arguments
    /// * `store` - The store the hooks record through and the operation runs against
    /// * `name` - The tracked operation's name
    /// * `input` - Rendered arguments of this call
    /// * `op` - The operation itself; its result is rendered for the after-hooks
    pub fn record<T, F>(
        &self,
        store: &mut Store<B>,
        name: &str,
        input: &str,
        op: F,
    ) -> Result<T>
    where
        T: std::fmt::Display,
        F: FnOnce(&mut Store<B>) -> Result<T>,
    {
        for hook in &self.hooks {
            hook.before(store, name, input)?;
        }

        let result = op(store)?;

        let rendered = result.to_string();
        for hook in &self.hooks {
            hook.after(store, name, &rendered)?;
        }

        Ok(result)
    }
}

impl<B: Backend> Default for CallRecorder<B> {
    fn default() -> Self {
        Self::new()
    }
}
