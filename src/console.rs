//! User-facing console log stream.
//!
//! The healer reports progress exclusively through this logger: one
//! color-coded line per notable event, written to an injectable sink so
//! tests can capture the stream instead of scraping stdout.

use chrono::{SecondsFormat, Utc};
use colored::Colorize;
use std::fmt;
use std::sync::Mutex;

/// Severity of a console log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Success,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Success => "SUCCESS",
        };
        write!(f, "{}", tag)
    }
}

/// Destination for formatted console lines.
///
/// The default sink writes to stdout; tests install an in-memory sink.
pub trait LogSink: Send {
    fn write_line(&mut self, line: &str);
}

/// Sink that prints to the real console.
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Leveled, color-coded console logger.
///
/// `log` is infallible: formatting and sink writes have no error path, so
/// callers never need to handle a logging failure mid-run.
pub struct Logger {
    sink: Mutex<Box<dyn LogSink>>,
}

impl Logger {
    /// Logger writing to stdout.
    pub fn stdout() -> Self {
        Self::with_sink(Box::new(StdoutSink))
    }

    /// Logger writing to a custom sink.
    pub fn with_sink(sink: Box<dyn LogSink>) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Emit one `[timestamp] [LEVEL] message` line, colored by level.
    pub fn log(&self, level: LogLevel, message: &str) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let line = format!("[{}] [{}] {}", timestamp, level, message);

        let colored_line = match level {
            LogLevel::Info => line.cyan(),
            LogLevel::Warn => line.yellow(),
            LogLevel::Error => line.red(),
            LogLevel::Success => line.green(),
        };

        // Mirror the console stream into the diagnostic file log.
        tracing::debug!(%level, "{}", message);

        if let Ok(mut sink) = self.sink.lock() {
            sink.write_line(&colored_line.to_string());
        }
    }
}
