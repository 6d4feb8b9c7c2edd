//! Console and toast sink handlers

use std::time::Duration;

use tokio::time::Instant;

use cyberusb_core::Severity;

use crate::catalog;
use crate::state::AppState;
use crate::tasks::TaskKind;

use super::dispatch::schedule;
use super::UpdateResult;

pub fn handle_log(state: &mut AppState, message: String, severity: Severity) -> UpdateResult {
    state.console.log(message, severity);
    UpdateResult::none()
}

pub fn handle_notify(state: &mut AppState, message: String, severity: Severity) -> UpdateResult {
    state.toasts.notify(message, severity, Instant::now());
    UpdateResult::none()
}

pub fn handle_clear(state: &mut AppState) -> UpdateResult {
    state.console.clear();
    state.console_view.scroll_to_bottom();
    UpdateResult::none()
}

/// Simulated export: nothing is written to disk
pub fn handle_save_logs(state: &mut AppState) -> UpdateResult {
    state.console.info(catalog::SAVING_LOGS_MESSAGE);
    let delay = state.settings.timing.save_logs_delay();
    schedule_console_task(state, TaskKind::SaveLogs, delay)
}

/// Nothing is logged until the delay has elapsed
pub fn handle_show_phishing_examples(state: &mut AppState) -> UpdateResult {
    let delay = state.settings.timing.phishing_delay();
    schedule_console_task(state, TaskKind::PhishingExamples, delay)
}

fn schedule_console_task(state: &mut AppState, kind: TaskKind, delay: Duration) -> UpdateResult {
    let id = schedule(state, kind, delay);
    UpdateResult::schedule(id, delay)
}
