//! Headless mode - NDJSON event output instead of the dashboard
//!
//! Every console entry, toast and gauge sample is written to stdout as one
//! JSON object per line, so scripts can drive the toolkit without parsing a
//! terminal screen.
//!
//! # Example Output
//!
//! ```json
//! {"event":"started","platform":"Linux","arch":"x86_64","dark_mode":true,"timestamp":1704700001000}
//! {"event":"log","severity":"info","message":"Cyber USB Toolkit initialized","timestamp":1704700001002}
//! {"event":"log","severity":"success","message":"cleanup completed successfully","timestamp":1704700003004}
//! {"event":"toast","severity":"success","message":"cleanup completed","timestamp":1704700003004}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::error;

use cyberusb_app::state::AppState;
use cyberusb_core::{ConsoleEntry, GaugeReading, Severity};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Bootstrap finished
    Started {
        platform: String,
        arch: String,
        dark_mode: bool,
        timestamp: i64,
    },

    /// A console entry
    Log {
        severity: String,
        message: String,
        timestamp: i64,
    },

    /// A toast notification was raised
    Toast {
        severity: String,
        message: String,
        timestamp: i64,
    },

    /// A gauge sample arrived
    Gauges {
        cpu: u8,
        memory: u8,
        disk: u8,
        timestamp: i64,
    },

    /// Every requested task completed (or a quit arrived first)
    Finished { completed: u64, timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as one JSON line
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn started(state: &AppState) -> Self {
        Self::Started {
            platform: state.system.platform.to_string(),
            arch: state.system.arch.clone(),
            dark_mode: state.dark_mode,
            timestamp: Self::now(),
        }
    }

    pub fn log(entry: &ConsoleEntry) -> Self {
        Self::Log {
            severity: entry.severity.as_str().to_string(),
            message: entry.message.clone(),
            timestamp: entry.timestamp.timestamp_millis(),
        }
    }

    pub fn toast(message: &str, severity: Severity) -> Self {
        Self::Toast {
            severity: severity.as_str().to_string(),
            message: message.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn gauges(reading: &GaugeReading) -> Self {
        Self::Gauges {
            cpu: reading.cpu,
            memory: reading.memory,
            disk: reading.disk,
            timestamp: Self::now(),
        }
    }

    pub fn finished(completed: u64) -> Self {
        Self::Finished {
            completed,
            timestamp: Self::now(),
        }
    }
}

/// Tracks which console entries and toasts have already been emitted.
///
/// Console entries are matched by id rather than position because clearing
/// the console shrinks it.
#[derive(Debug, Default)]
pub struct EmitCursor {
    last_entry: Option<u64>,
    next_toast: u64,
}

impl EmitCursor {
    /// Events for everything added to the state since the previous call
    pub fn collect(&mut self, state: &AppState) -> Vec<HeadlessEvent> {
        let mut events = Vec::new();

        for entry in state.console.entries() {
            if self.last_entry.is_some_and(|last| entry.id <= last) {
                continue;
            }
            events.push(HeadlessEvent::log(entry));
            self.last_entry = Some(entry.id);
        }

        for toast in state.toasts.iter() {
            if toast.id < self.next_toast {
                continue;
            }
            events.push(HeadlessEvent::toast(&toast.message, toast.severity));
            self.next_toast = toast.id + 1;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    fn messages(events: &[HeadlessEvent]) -> Vec<&str> {
        events
            .iter()
            .filter_map(|e| match e {
                HeadlessEvent::Log { message, .. } | HeadlessEvent::Toast { message, .. } => {
                    Some(message.as_str())
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_log_event_serialization() {
        let entry = ConsoleEntry::warn("Fake bank login pages");
        let json = serde_json::to_string(&HeadlessEvent::log(&entry)).unwrap();
        assert!(json.contains(r#""event":"log""#));
        assert!(json.contains(r#""severity":"warning""#));
        assert!(json.contains(r#""message":"Fake bank login pages""#));
    }

    #[test]
    fn test_finished_event_serialization() {
        let json = serde_json::to_string(&HeadlessEvent::finished(3)).unwrap();
        assert!(json.contains(r#""event":"finished""#));
        assert!(json.contains(r#""completed":3"#));
    }

    #[tokio::test]
    async fn test_cursor_emits_each_entry_once() {
        let mut state = AppState::new();
        let mut cursor = EmitCursor::default();

        state.console.info("first");
        assert_eq!(messages(&cursor.collect(&state)), vec!["first"]);

        state.console.info("second");
        state
            .toasts
            .notify("cleanup completed", Severity::Success, Instant::now());
        assert_eq!(
            messages(&cursor.collect(&state)),
            vec!["second", "cleanup completed"]
        );
        assert!(cursor.collect(&state).is_empty());
    }

    #[tokio::test]
    async fn test_cursor_survives_clear() {
        let mut state = AppState::new();
        let mut cursor = EmitCursor::default();

        for i in 0..5 {
            state.console.info(format!("line {i}"));
        }
        cursor.collect(&state);

        state.console.clear();
        state.console.info("after clear");
        let events = cursor.collect(&state);
        assert!(messages(&events).contains(&"after clear"));
        assert!(!messages(&events).contains(&"line 0"));
    }
}
