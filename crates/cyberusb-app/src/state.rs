//! Application state (Model in TEA pattern)

use chrono::{DateTime, TimeZone};

use cyberusb_core::{AppPhase, GaugeReading, Platform, TabId};

use crate::config::Settings;
use crate::console::Console;
use crate::log_view_state::LogViewState;
use crate::panel::PanelSelection;
use crate::preferences::ThemePreference;
use crate::status::format_clock;
use crate::tabs::TabRouter;
use crate::tasks::TaskRegistry;
use crate::toast::ToastStack;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Dashboard with tabs and panels
    #[default]
    Normal,

    /// About modal over the dashboard
    About,
}

/// Platform facts shown in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    /// Identity string the platform was classified from
    pub identity: String,
    pub platform: Platform,
    pub arch: String,
}

impl SystemInfo {
    pub fn new(identity: impl Into<String>, arch: impl Into<String>) -> Self {
        let identity = identity.into();
        let platform = cyberusb_core::detect_platform(&identity);
        Self {
            identity,
            platform,
            arch: arch.into(),
        }
    }

    /// Facts about the running binary
    pub fn current() -> Self {
        Self::new(
            cyberusb_core::identity_string(),
            std::env::consts::ARCH,
        )
    }
}

/// Complete application state, owned by the engine
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Current UI mode/screen
    pub ui_mode: UiMode,

    /// Settings from config.toml
    pub settings: Settings,

    /// Theme flag restored at startup
    pub dark_mode: bool,

    pub system: SystemInfo,

    /// Clock text, empty until the first clock tick
    pub clock: String,

    /// Latest gauge reading, `None` until the first sample
    pub gauges: Option<GaugeReading>,

    pub tabs: TabRouter,

    /// Highlighted card on each panel
    pub selection: PanelSelection,

    pub console: Console,

    /// Scroll state of the console panel
    pub console_view: LogViewState,

    pub toasts: ToastStack,

    /// Simulated tasks awaiting completion
    pub tasks: TaskRegistry,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new AppState with default settings
    pub fn new() -> Self {
        Self::with_settings(
            Settings::default(),
            ThemePreference::default(),
            SystemInfo::current(),
        )
    }

    pub fn with_settings(settings: Settings, theme: ThemePreference, system: SystemInfo) -> Self {
        let toasts = ToastStack::new(settings.ui.max_toasts);
        Self {
            phase: AppPhase::Initializing,
            ui_mode: UiMode::Normal,
            settings,
            dark_mode: theme.dark_mode,
            system,
            clock: String::new(),
            gauges: None,
            tabs: TabRouter::default(),
            selection: PanelSelection::default(),
            console: Console::new(),
            console_view: LogViewState::new(),
            toasts,
            tasks: TaskRegistry::new(),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Status Simulator
    // ─────────────────────────────────────────────────────────

    /// Write the formatted time into the clock display
    pub fn refresh_clock<Tz: TimeZone>(&mut self, now: &DateTime<Tz>)
    where
        Tz::Offset: std::fmt::Display,
    {
        self.clock = format_clock(now);
    }

    /// Replace the gauge display with a new reading
    pub fn refresh_gauges(&mut self, reading: GaugeReading) {
        self.gauges = Some(reading);
    }

    // ─────────────────────────────────────────────────────────
    // UI Mode Helpers
    // ─────────────────────────────────────────────────────────

    pub fn active_tab(&self) -> TabId {
        self.tabs.active()
    }

    pub fn show_about(&mut self) {
        self.ui_mode = UiMode::About;
    }

    pub fn hide_about(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn has_pending_tasks(&self) -> bool {
        self.tasks.pending_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_state() -> AppState {
        AppState::with_settings(
            Settings::default(),
            ThemePreference::default(),
            SystemInfo::new("CyberUSB/0.1.0 (X11; Linux x86_64)", "x86_64"),
        )
    }

    #[test]
    fn test_initial_state() {
        let state = test_state();
        assert_eq!(state.phase, AppPhase::Initializing);
        assert_eq!(state.active_tab(), TabId::Dashboard);
        assert!(state.dark_mode);
        assert!(state.gauges.is_none());
        assert!(state.console.is_empty());
        assert_eq!(state.system.platform, Platform::Linux);
    }

    #[test]
    fn test_light_theme_from_preference() {
        let state = AppState::with_settings(
            Settings::default(),
            ThemePreference::from_stored(Some("false".into())),
            SystemInfo::current(),
        );
        assert!(!state.dark_mode);
    }

    #[test]
    fn test_refresh_clock() {
        let mut state = test_state();
        let t = Utc.with_ymd_and_hms(2024, 1, 2, 9, 5, 0).unwrap();
        state.refresh_clock(&t);
        assert_eq!(state.clock, "09:05 AM");
    }

    #[test]
    fn test_refresh_gauges_replaces_previous() {
        let mut state = test_state();
        state.refresh_gauges(GaugeReading::new(45, 60, 70));
        state.refresh_gauges(GaugeReading::new(41, 51, 41));
        assert_eq!(state.gauges, Some(GaugeReading::new(41, 51, 41)));
    }

    #[test]
    fn test_about_mode_toggle() {
        let mut state = test_state();
        state.show_about();
        assert_eq!(state.ui_mode, UiMode::About);
        state.hide_about();
        assert_eq!(state.ui_mode, UiMode::Normal);
    }
}
