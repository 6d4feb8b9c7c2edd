//! Message types for the application (TEA pattern)

use chrono::{DateTime, Local};

use cyberusb_core::{GaugeReading, Severity, TabId};

use crate::catalog::ToolCategory;
use crate::input_key::InputKey;
use crate::tasks::TaskId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (toast expiry, redraw)
    Tick,

    /// Force quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Status Simulator
    // ─────────────────────────────────────────────────────────
    /// Clock timer fired with the current local time
    ClockTick(DateTime<Local>),

    /// Gauge timer fired with a fresh reading
    GaugesSampled(GaugeReading),

    // ─────────────────────────────────────────────────────────
    // Tab Router
    // ─────────────────────────────────────────────────────────
    SelectTab(TabId),

    /// Select a tab by its string identifier (rejected if unknown)
    SelectTabById(String),

    NextTab,
    PreviousTab,

    // ─────────────────────────────────────────────────────────
    // Panel cards
    // ─────────────────────────────────────────────────────────
    SelectNextItem,
    SelectPreviousItem,

    /// Activate the highlighted card on the current panel
    ActivateSelected,

    // ─────────────────────────────────────────────────────────
    // Action Dispatcher
    // ─────────────────────────────────────────────────────────
    /// Dashboard quick action by identifier
    QuickAction(String),

    /// Performance or security tool by identifier
    RunTool(String),

    /// Every tool of one category
    RunAll(ToolCategory),

    /// Timer of a simulated task elapsed
    TaskCompleted { id: TaskId },

    // ─────────────────────────────────────────────────────────
    // Console / Notification Sink
    // ─────────────────────────────────────────────────────────
    /// Append a console entry
    Log { message: String, severity: Severity },

    /// Raise a toast
    Notify { message: String, severity: Severity },

    ClearConsole,
    SaveLogs,
    ShowPhishingExamples,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Modal
    // ─────────────────────────────────────────────────────────
    ShowAbout,
    CloseAbout,
}
