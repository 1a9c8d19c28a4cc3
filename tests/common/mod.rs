//! Shared test doubles: an in-memory log sink and a recording command runner.

#![allow(dead_code)]

use agheal::console::LogSink;
use agheal::services::CommandRunner;
use std::sync::{Arc, Mutex};

/// Append-only event log shared between the fake runner and the log sink,
/// so tests can assert on the relative order of kills and deletions.
#[derive(Clone, Default)]
pub struct Recorder {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    pub fn entries_containing(&self, needle: &str) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| e.contains(needle))
            .collect()
    }
}

/// Log sink that records every console line into a [`Recorder`].
pub struct RecordingSink(pub Recorder);

impl LogSink for RecordingSink {
    fn write_line(&mut self, line: &str) {
        self.0.record(line);
    }
}

/// Command runner that records commands instead of executing them.
pub struct FakeRunner {
    pub recorder: Recorder,
    pub result: bool,
}

impl FakeRunner {
    pub fn new(recorder: Recorder) -> Self {
        Self {
            recorder,
            result: true,
        }
    }
}

impl CommandRunner for FakeRunner {
    async fn run(&self, command: &str) -> bool {
        self.recorder.record(format!("run:{command}"));
        self.result
    }
}
