use std::fmt::Display;
use std::sync::{Mutex, MutexGuard};

/// Append-only log sink.
///
/// Every message is kept in call order and echoed to stdout with a fixed
/// prefix. There is no way to remove or reorder entries.
///
/// The instance is created by the program entry point and handed out by
/// reference; see [`crate::singleton`] for the process-wide alternative.
#[derive(Debug)]
pub struct FancyLogger {
    prefix: String,
    logs: Mutex<Vec<String>>,
}

impl FancyLogger {
    pub fn new() -> Self {
        Self::with_prefix("FANCY")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        FancyLogger {
            prefix: prefix.into(),
            logs: Mutex::new(Vec::new()),
        }
    }

    pub fn log(&self, message: impl Display) {
        let line = self.record(message);
        println!("{line}");
    }

    /// Appends without echoing, returning the line `log` would print.
    pub fn record(&self, message: impl Display) -> String {
        let message = message.to_string();
        let line = format!("{}: {}", self.prefix, message);
        let mut logs = self.entries_guard();
        logs.push(message);
        tracing::debug!(count = logs.len(), "log entry appended");
        line
    }

    pub fn print_log_count(&self) {
        println!("{}", self.count_line());
    }

    pub fn count_line(&self) -> String {
        format!("{} Logs", self.count())
    }

    pub fn count(&self) -> usize {
        self.entries_guard().len()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries_guard().clone()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    // Entries are plain strings, so a poisoned lock still holds a usable log.
    fn entries_guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.logs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for FancyLogger {
    fn default() -> Self {
        Self::new()
    }
}
