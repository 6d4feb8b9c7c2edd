//! Main update function - handles state transitions (TEA pattern)

use tokio::time::Instant;

use crate::message::Message;
use crate::state::AppState;

use super::{console, dispatch, keys::handle_key, navigation, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.toasts.prune(Instant::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Status Simulator
        // ─────────────────────────────────────────────────────────
        Message::ClockTick(now) => {
            state.refresh_clock(&now);
            UpdateResult::none()
        }

        Message::GaugesSampled(reading) => {
            state.refresh_gauges(reading);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Tab Router
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(tab) => navigation::handle_select_tab(state, tab),
        Message::SelectTabById(id) => navigation::handle_select_tab_by_id(state, &id),
        Message::NextTab => navigation::handle_next_tab(state),
        Message::PreviousTab => navigation::handle_previous_tab(state),
        Message::SelectNextItem => navigation::handle_select_next_item(state),
        Message::SelectPreviousItem => navigation::handle_select_previous_item(state),
        Message::ActivateSelected => navigation::handle_activate_selected(state),

        // ─────────────────────────────────────────────────────────
        // Action Dispatcher
        // ─────────────────────────────────────────────────────────
        Message::QuickAction(id) => dispatch::execute_quick_action(state, &id),
        Message::RunTool(id) => dispatch::run_tool(state, &id),
        Message::RunAll(category) => dispatch::run_all(state, category),
        Message::TaskCompleted { id } => dispatch::complete_task(state, id),

        // ─────────────────────────────────────────────────────────
        // Console / Notification Sink
        // ─────────────────────────────────────────────────────────
        Message::Log { message, severity } => console::handle_log(state, message, severity),
        Message::Notify { message, severity } => {
            console::handle_notify(state, message, severity)
        }
        Message::ClearConsole => console::handle_clear(state),
        Message::SaveLogs => console::handle_save_logs(state),
        Message::ShowPhishingExamples => console::handle_show_phishing_examples(state),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),

        // ─────────────────────────────────────────────────────────
        // Modal
        // ─────────────────────────────────────────────────────────
        Message::ShowAbout => {
            state.show_about();
            UpdateResult::none()
        }

        Message::CloseAbout => {
            state.hide_about();
            UpdateResult::none()
        }
    }
}
