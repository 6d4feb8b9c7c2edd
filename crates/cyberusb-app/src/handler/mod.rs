//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `navigation`: Tab and panel card selection
//! - `dispatch`: Quick actions, tools and task completion
//! - `console`: Console and toast sink handlers
//! - `scroll`: Console scroll handlers

pub(crate) mod console;
pub(crate) mod dispatch;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod scroll;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;
use crate::tasks::TaskId;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Completion timer the event loop should start for a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskTimer {
    pub id: TaskId,
    pub delay: Duration,
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Start completion timers for tasks already registered in state
    ScheduleTasks(Vec<TaskTimer>),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Schedule a single completion timer
    pub fn schedule(id: TaskId, delay: Duration) -> Self {
        Self::action(UpdateAction::ScheduleTasks(vec![TaskTimer { id, delay }]))
    }
}
