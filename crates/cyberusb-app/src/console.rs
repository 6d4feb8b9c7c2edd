//! On-screen console: an append-only, insertion-ordered list of entries

use cyberusb_core::{ConsoleEntry, Severity};

/// Marker left behind by [`Console::clear`]
pub const CLEARED_MARKER: &str = "Console cleared";

/// Unbounded console buffer. Entries are never edited in place.
#[derive(Debug, Default, Clone)]
pub struct Console {
    entries: Vec<ConsoleEntry>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line with the current timestamp
    pub fn log(&mut self, message: impl Into<String>, severity: Severity) {
        self.push(ConsoleEntry::new(severity, message));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.log(message, Severity::Info);
    }

    pub fn push(&mut self, entry: ConsoleEntry) {
        tracing::debug!(severity = entry.severity.as_str(), "console: {}", entry.message);
        self.entries.push(entry);
    }

    /// Drop every entry and leave a single cleared marker
    pub fn clear(&mut self) {
        self.entries.clear();
        self.info(CLEARED_MARKER);
    }

    pub fn entries(&self) -> &[ConsoleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&ConsoleEntry> {
        self.entries.last()
    }

    /// Messages in insertion order
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }
}
