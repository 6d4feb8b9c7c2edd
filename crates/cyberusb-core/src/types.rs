//! Core domain types

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::Error;

static CONSOLE_ENTRY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Bootstrapper has not run yet
    #[default]
    Initializing,
    Running,
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
// Severity / ConsoleEntry
// ─────────────────────────────────────────────────────────────────────────────

/// Display class shared by console entries and toasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Short tag rendered in front of console lines
    pub fn prefix(&self) -> &'static str {
        match self {
            Severity::Info => "INF",
            Severity::Success => "OK ",
            Severity::Warning => "WRN",
            Severity::Error => "ERR",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// A single line in the on-screen console
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleEntry {
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub message: String,
    /// Unique, monotonically increasing ID
    pub id: u64,
}

impl ConsoleEntry {
    /// Create a new entry stamped with the current local time
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self::at(Local::now(), severity, message)
    }

    /// Create a new entry with an explicit timestamp
    pub fn at(timestamp: DateTime<Local>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            severity,
            message: message.into(),
            id: CONSOLE_ENTRY_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Format timestamp for display
    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Gauges
// ─────────────────────────────────────────────────────────────────────────────

/// Inclusive range of simulated CPU utilization
pub const CPU_RANGE: RangeInclusive<u8> = 40..=70;
/// Inclusive range of simulated memory utilization
pub const MEMORY_RANGE: RangeInclusive<u8> = 50..=85;
/// Inclusive range of simulated disk utilization
pub const DISK_RANGE: RangeInclusive<u8> = 40..=80;

/// One sample of the three resource gauges, in whole percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GaugeReading {
    pub cpu: u8,
    pub memory: u8,
    pub disk: u8,
}

impl GaugeReading {
    pub fn new(cpu: u8, memory: u8, disk: u8) -> Self {
        Self { cpu, memory, disk }
    }

    /// Whether every value lies inside its documented range
    pub fn in_range(&self) -> bool {
        CPU_RANGE.contains(&self.cpu)
            && MEMORY_RANGE.contains(&self.memory)
            && DISK_RANGE.contains(&self.disk)
    }

    /// Fill ratio for a percentage (0-100 maps directly to 0.0-1.0)
    pub fn ratio(percent: u8) -> f64 {
        f64::from(percent.min(100)) / 100.0
    }
}

impl Default for GaugeReading {
    /// Lower bound of every range, used before the first sample arrives
    fn default() -> Self {
        Self {
            cpu: *CPU_RANGE.start(),
            memory: *MEMORY_RANGE.start(),
            disk: *DISK_RANGE.start(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tabs
// ─────────────────────────────────────────────────────────────────────────────

/// Navigation tab / content panel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Dashboard,
    Performance,
    Security,
    Console,
    Settings,
}

impl TabId {
    /// All tabs in navigation order
    pub const ALL: [TabId; 5] = [
        TabId::Dashboard,
        TabId::Performance,
        TabId::Security,
        TabId::Console,
        TabId::Settings,
    ];

    /// Identifier used by the tab-target attribute
    pub fn id(&self) -> &'static str {
        match self {
            TabId::Dashboard => "dashboard",
            TabId::Performance => "performance",
            TabId::Security => "security",
            TabId::Console => "console",
            TabId::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TabId::Dashboard => "Dashboard",
            TabId::Performance => "Performance",
            TabId::Security => "Security",
            TabId::Console => "Console",
            TabId::Settings => "Settings",
        }
    }

    /// Position in [`TabId::ALL`]
    pub fn index(&self) -> usize {
        TabId::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<TabId> {
        TabId::ALL.get(index).copied()
    }
}

impl FromStr for TabId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabId::ALL
            .iter()
            .find(|tab| tab.id() == s)
            .copied()
            .ok_or_else(|| Error::unknown_tab(s))
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
