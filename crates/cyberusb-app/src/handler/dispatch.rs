//! Action dispatcher: quick actions, tools and simulated task completion
//!
//! A recognized identifier writes its starting line immediately, registers a
//! pending [`SimulatedTask`](crate::tasks::SimulatedTask) and asks the event
//! loop for a completion timer. Repeated invocations are never coalesced.

use std::time::Duration;

use tokio::time::Instant;

use cyberusb_core::prelude::*;
use cyberusb_core::Severity;

use crate::catalog::{self, ActionKind, ActionSpec, ToolCategory};
use crate::config::UnknownActionPolicy;
use crate::state::AppState;
use crate::tasks::{TaskId, TaskKind};

use super::{TaskTimer, UpdateAction, UpdateResult};

pub fn execute_quick_action(state: &mut AppState, id: &str) -> UpdateResult {
    dispatch(state, ActionKind::QuickAction, id)
}

pub fn run_tool(state: &mut AppState, id: &str) -> UpdateResult {
    dispatch(state, ActionKind::Tool, id)
}

/// Dispatch every tool of a category as independent tasks
pub fn run_all(state: &mut AppState, category: ToolCategory) -> UpdateResult {
    info!("Running all {} tools", category.label());
    let timers = catalog::tools_in(category)
        .map(|action| start_action(state, action))
        .collect();
    UpdateResult::action(UpdateAction::ScheduleTasks(timers))
}

fn dispatch(state: &mut AppState, kind: ActionKind, id: &str) -> UpdateResult {
    match catalog::lookup(kind, id) {
        Some(action) => {
            let timer = start_action(state, action);
            UpdateResult::schedule(timer.id, timer.delay)
        }
        None => handle_unknown(state, id),
    }
}

/// Write the starting line and register the pending task
fn start_action(state: &mut AppState, action: &'static ActionSpec) -> TaskTimer {
    state.console.info(action.starting_message);
    let delay = match action.kind {
        ActionKind::QuickAction => state.settings.timing.quick_action_delay(),
        ActionKind::Tool => state.settings.timing.tool_delay(),
    };
    let id = schedule(state, TaskKind::Action(action), delay);
    TaskTimer { id, delay }
}

/// Register a pending task without touching the console
pub(crate) fn schedule(state: &mut AppState, kind: TaskKind, delay: Duration) -> TaskId {
    let id = state.tasks.schedule(kind, delay, Instant::now());
    debug!("Scheduled {} ({}) in {:?}", id, kind.label(), delay);
    id
}

fn handle_unknown(state: &mut AppState, id: &str) -> UpdateResult {
    match state.settings.behavior.unknown_action {
        UnknownActionPolicy::Ignore => {
            debug!("Ignoring unknown action '{}'", id);
        }
        UnknownActionPolicy::Report => {
            let err = Error::unknown_action(id);
            warn!("{}", err);
            state.console.log(err.to_string(), Severity::Warning);
        }
    }
    UpdateResult::none()
}

/// Mark a task completed and emit its output
pub fn complete_task(state: &mut AppState, id: TaskId) -> UpdateResult {
    let Some(task) = state.tasks.complete(id) else {
        debug!("Completion for unknown task {}", id);
        return UpdateResult::none();
    };

    let now = Instant::now();
    match task.kind {
        TaskKind::Action(action) => {
            state
                .console
                .log(action.completion_message(), Severity::Success);
            state
                .toasts
                .notify(action.toast_message(), action.toast_severity(), now);
        }
        TaskKind::SaveLogs => {
            state
                .console
                .log(catalog::LOGS_SAVED_MESSAGE, Severity::Success);
            state
                .toasts
                .notify(catalog::LOGS_SAVED_TOAST, Severity::Success, now);
        }
        TaskKind::PhishingExamples => {
            state.console.info(catalog::PHISHING_HEADER);
            for example in catalog::PHISHING_EXAMPLES {
                state.console.log(example, Severity::Warning);
            }
        }
    }
    UpdateResult::none()
}
