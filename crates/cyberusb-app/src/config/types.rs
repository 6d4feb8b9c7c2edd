//! Configuration types for the Cyber USB Toolkit
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub timing: TimingSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// What to do with an action or tool identifier missing from the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownActionPolicy {
    /// No console line, no toast
    #[default]
    Ignore,
    /// One warning line in the console
    Report,
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    #[serde(default)]
    pub unknown_action: UnknownActionPolicy,
}

/// Timer intervals and simulated task delays, all in milliseconds
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TimingSettings {
    #[serde(default = "default_clock_interval_ms")]
    pub clock_interval_ms: u64,

    #[serde(default = "default_gauge_interval_ms")]
    pub gauge_interval_ms: u64,

    #[serde(default = "default_quick_action_delay_ms")]
    pub quick_action_delay_ms: u64,

    #[serde(default = "default_tool_delay_ms")]
    pub tool_delay_ms: u64,

    #[serde(default = "default_short_delay_ms")]
    pub save_logs_delay_ms: u64,

    #[serde(default = "default_short_delay_ms")]
    pub phishing_delay_ms: u64,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            clock_interval_ms: default_clock_interval_ms(),
            gauge_interval_ms: default_gauge_interval_ms(),
            quick_action_delay_ms: default_quick_action_delay_ms(),
            tool_delay_ms: default_tool_delay_ms(),
            save_logs_delay_ms: default_short_delay_ms(),
            phishing_delay_ms: default_short_delay_ms(),
        }
    }
}

impl TimingSettings {
    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    pub fn gauge_interval(&self) -> Duration {
        Duration::from_millis(self.gauge_interval_ms)
    }

    pub fn quick_action_delay(&self) -> Duration {
        Duration::from_millis(self.quick_action_delay_ms)
    }

    pub fn tool_delay(&self) -> Duration {
        Duration::from_millis(self.tool_delay_ms)
    }

    pub fn save_logs_delay(&self) -> Duration {
        Duration::from_millis(self.save_logs_delay_ms)
    }

    pub fn phishing_delay(&self) -> Duration {
        Duration::from_millis(self.phishing_delay_ms)
    }
}

fn default_clock_interval_ms() -> u64 {
    60_000
}

fn default_gauge_interval_ms() -> u64 {
    30_000
}

fn default_quick_action_delay_ms() -> u64 {
    2_000
}

fn default_tool_delay_ms() -> u64 {
    3_000
}

fn default_short_delay_ms() -> u64 {
    1_000
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Cap on simultaneous toasts; absent means unbounded
    #[serde(default)]
    pub max_toasts: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timing_matches_dashboard_constants() {
        let timing = TimingSettings::default();
        assert_eq!(timing.clock_interval(), Duration::from_secs(60));
        assert_eq!(timing.gauge_interval(), Duration::from_secs(30));
        assert_eq!(timing.quick_action_delay(), Duration::from_secs(2));
        assert_eq!(timing.tool_delay(), Duration::from_secs(3));
        assert_eq!(timing.save_logs_delay(), Duration::from_secs(1));
        assert_eq!(timing.phishing_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_default_policy_is_ignore() {
        assert_eq!(
            Settings::default().behavior.unknown_action,
            UnknownActionPolicy::Ignore
        );
    }

    #[test]
    fn test_default_toasts_unbounded() {
        assert_eq!(Settings::default().ui.max_toasts, None);
    }
}
