//! Transient toast notifications
//!
//! Every toast owns its own lifetime: it enters for 300ms, holds, and exits
//! during the last 300ms of a 3000ms life. Expired toasts are dropped by
//! [`ToastStack::prune`], which the update loop calls on every tick.

use std::collections::VecDeque;
use std::time::Duration;

use cyberusb_core::Severity;
use tokio::time::Instant;

pub const TOAST_ENTER: Duration = Duration::from_millis(300);
pub const TOAST_EXIT: Duration = Duration::from_millis(300);
pub const TOAST_LIFETIME: Duration = Duration::from_millis(3000);

/// Visual phase of a toast at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Exiting,
    Expired,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub created_at: Instant,
}

impl Toast {
    pub fn phase(&self, now: Instant) -> ToastPhase {
        let age = now.saturating_duration_since(self.created_at);
        if age >= TOAST_LIFETIME {
            ToastPhase::Expired
        } else if age < TOAST_ENTER {
            ToastPhase::Entering
        } else if age >= TOAST_LIFETIME - TOAST_EXIT {
            ToastPhase::Exiting
        } else {
            ToastPhase::Visible
        }
    }
}

/// Independent stack of live toasts, newest last
#[derive(Debug, Clone, Default)]
pub struct ToastStack {
    toasts: VecDeque<Toast>,
    next_id: u64,
    /// Optional cap; the oldest toast is evicted when exceeded
    max: Option<usize>,
}

impl ToastStack {
    pub fn new(max: Option<usize>) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 0,
            max: max.filter(|m| *m > 0),
        }
    }

    /// Raise a toast created at `now`
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            message: message.into(),
            severity,
            created_at: now,
        });

        if let Some(max) = self.max {
            while self.toasts.len() > max {
                if let Some(evicted) = self.toasts.pop_front() {
                    tracing::debug!("Evicted toast {} ({})", evicted.id, evicted.message);
                }
            }
        }
        id
    }

    /// Drop every toast whose lifetime has elapsed
    pub fn prune(&mut self, now: Instant) {
        self.toasts
            .retain(|toast| toast.phase(now) != ToastPhase::Expired);
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
