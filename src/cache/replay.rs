//! Replay Module
//!
//! Reconstructs an operation's recorded call history and renders the
//! human-readable transcript.

use std::io::{self, Write};

use serde::Serialize;

use crate::backend::Backend;
use crate::cache::Store;
use crate::error::Result;

// == Operation Record ==
/// The counter and paired input/output logs recorded for one operation.
#[derive(Debug, Clone, Serialize)]
pub struct OperationRecord {
    /// Tracked operation name
    pub name: String,
    /// Number of recorded invocations
    pub call_count: i64,
    /// Rendered arguments, in call order
    pub inputs: Vec<String>,
    /// Rendered results, in call order
    pub outputs: Vec<String>,
}

impl OperationRecord {
    /// Pairs inputs with outputs positionally.
    ///
    /// If the logs ever disagree in length, the unpaired tail is dropped:
    /// a report never invents a pairing that was not recorded.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.inputs
            .iter()
            .map(String::as_str)
            .zip(self.outputs.iter().map(String::as_str))
    }
}

// == Replay Reporter ==
/// Renders the call transcript of a tracked operation.
///
/// The reporter reads through an explicit store reference and holds no
/// state of its own.
#[derive(Debug, Clone, Default)]
pub struct ReplayReporter;

impl ReplayReporter {
    /// Creates a new reporter.
    pub fn new() -> Self {
        Self
    }

    // == Snapshot ==
    /// Reads the counter and history logs recorded for an operation.
    pub fn snapshot<B: Backend>(&self, store: &Store<B>, name: &str) -> Result<OperationRecord> {
        let call_count = store.get_integer(name)?;
        let (inputs, outputs) = store.history(name)?;

        Ok(OperationRecord {
            name: name.to_string(),
            call_count,
            inputs,
            outputs,
        })
    }

    // == Render ==
    /// Renders the transcript of every recorded invocation.
    ///
    /// # Returns
    /// - A single "has not been called yet." line when the counter is
    ///   absent or zero
    /// - Otherwise a header line followed by one line per recorded
    ///   input/output pair, in call order
    pub fn render<B: Backend>(&self, store: &Store<B>, name: &str) -> Result<String> {
        let record = self.snapshot(store, name)?;
        Ok(Self::format_record(&record))
    }

    // == Replay ==
    /// Writes the transcript of an operation to standard output.
    pub fn replay<B: Backend>(&self, store: &Store<B>, name: &str) -> Result<()> {
        let report = self.render(store, name)?;

        let mut stdout = io::stdout().lock();
        stdout.write_all(report.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }

    // == Formatting ==
    /// Formats a record as the fixed transcript layout:
    ///
    /// ```text
    /// store was called 2 times:
    /// store(*('foo',)) -> 4ae4ab58-9432-41f5-9aeb-ba6f482453c9
    /// store(*(42,)) -> 461dd98c-2248-4e3d-b79e-6c8b9ba18f8d
    /// ```
    fn format_record(record: &OperationRecord) -> String {
        if record.call_count <= 0 {
            return format!("{} has not been called yet.", record.name);
        }

        let mut lines = vec![format!(
            "{} was called {} times:",
            record.name, record.call_count
        )];
        for (input, output) in record.pairs() {
            lines.push(format!("{}(*{}) -> {}", record.name, input, output));
        }
        lines.join("\n")
    }
}
