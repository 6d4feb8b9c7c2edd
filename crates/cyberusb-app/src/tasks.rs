//! Simulated tasks: delayed completions that stand in for real tool runs
//!
//! A dispatched action becomes a [`SimulatedTask`] in the [`TaskRegistry`]
//! (state `Pending`) and a timer owned by a [`TaskHandle`]. When the timer
//! fires it sends [`Message::TaskCompleted`] back to the event loop, where the
//! handler marks the task `Completed` and emits the completion output.
//! Nothing else mutates state off the event loop.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::catalog::ActionSpec;
use crate::message::Message;

/// Identifier of a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

/// What a task simulates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Quick action or tool from the catalogue
    Action(&'static ActionSpec),
    SaveLogs,
    PhishingExamples,
}

impl TaskKind {
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Action(action) => action.id,
            TaskKind::SaveLogs => "save-logs",
            TaskKind::PhishingExamples => "phishing-examples",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Completed,
}

#[derive(Debug, Clone)]
pub struct SimulatedTask {
    pub id: TaskId,
    pub kind: TaskKind,
    pub state: TaskState,
    pub scheduled_at: Instant,
    pub completes_at: Instant,
}

impl SimulatedTask {
    /// Time left until the scheduled completion
    pub fn remaining(&self, now: Instant) -> Duration {
        self.completes_at.saturating_duration_since(now)
    }
}

/// Pending tasks keyed by id, in scheduling order
#[derive(Debug, Default)]
pub struct TaskRegistry {
    pending: BTreeMap<TaskId, SimulatedTask>,
    next_id: u64,
    completed: u64,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new pending task completing `delay` after `now`
    pub fn schedule(&mut self, kind: TaskKind, delay: Duration, now: Instant) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.insert(
            id,
            SimulatedTask {
                id,
                kind,
                state: TaskState::Pending,
                scheduled_at: now,
                completes_at: now + delay,
            },
        );
        id
    }

    /// Move a task to `Completed` and hand it back. `None` for unknown ids.
    pub fn complete(&mut self, id: TaskId) -> Option<SimulatedTask> {
        let mut task = self.pending.remove(&id)?;
        task.state = TaskState::Completed;
        self.completed += 1;
        Some(task)
    }

    pub fn get(&self, id: TaskId) -> Option<&SimulatedTask> {
        self.pending.get(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn completed_count(&self) -> u64 {
        self.completed
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Timers
// ─────────────────────────────────────────────────────────────────────────────

/// Awaitable, cancellable handle to a task's completion timer
#[derive(Debug)]
pub struct TaskHandle {
    pub id: TaskId,
    join: JoinHandle<()>,
}

impl TaskHandle {
    /// Abort the timer. The completion message will never be sent.
    pub fn cancel(&self) {
        self.join.abort();
    }

    /// Wait for the timer. Returns `false` if it was cancelled.
    pub async fn wait(self) -> bool {
        self.join.await.is_ok()
    }
}

/// Start the completion timer for a scheduled task
pub fn spawn_completion_timer(
    id: TaskId,
    delay: Duration,
    msg_tx: mpsc::Sender<Message>,
) -> TaskHandle {
    let join = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if msg_tx.send(Message::TaskCompleted { id }).await.is_err() {
            tracing::debug!("{} completed after the event loop closed", id);
        }
    });
    TaskHandle { id, join }
}
