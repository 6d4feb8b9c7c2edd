//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;

use crate::message::Message;
use crate::tasks::{spawn_completion_timer, TaskHandle};
use crate::UpdateAction;

/// Execute an action by spawning background timers.
///
/// Returns the handles of every timer started, so the caller can await or
/// cancel them.
pub fn handle_action(action: UpdateAction, msg_tx: &mpsc::Sender<Message>) -> Vec<TaskHandle> {
    match action {
        UpdateAction::ScheduleTasks(timers) => timers
            .into_iter()
            .map(|timer| spawn_completion_timer(timer.id, timer.delay, msg_tx.clone()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::handler::TaskTimer;
    use crate::tasks::TaskId;

    #[tokio::test(start_paused = true)]
    async fn test_schedule_tasks_completes_in_delay_order() {
        let (tx, mut rx) = mpsc::channel(8);
        let handles = handle_action(
            UpdateAction::ScheduleTasks(vec![
                TaskTimer {
                    id: TaskId(0),
                    delay: Duration::from_millis(3000),
                },
                TaskTimer {
                    id: TaskId(1),
                    delay: Duration::from_millis(1000),
                },
            ]),
            &tx,
        );
        assert_eq!(handles.len(), 2);

        for handle in handles {
            assert!(handle.wait().await);
        }

        let first = rx.recv().await;
        let second = rx.recv().await;
        assert!(matches!(first, Some(Message::TaskCompleted { id: TaskId(1) })));
        assert!(matches!(second, Some(Message::TaskCompleted { id: TaskId(0) })));
    }
}
