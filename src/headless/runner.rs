//! Headless mode runner - dispatch, wait, print
//!
//! Runs the same engine as the dashboard. The requested identifiers are
//! dispatched once, then messages are processed until no simulated task is
//! pending or a quit (SIGINT/SIGTERM) arrives.

use cyberusb_app::catalog::ToolCategory;
use cyberusb_app::{Engine, Message};
use cyberusb_core::prelude::*;

use super::{EmitCursor, HeadlessEvent};

/// Work requested on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessPlan {
    pub actions: Vec<String>,
    pub tools: Vec<String>,
    pub run_all: Vec<ToolCategory>,
}

impl HeadlessPlan {
    /// Messages dispatched at startup: quick actions, then tools, then
    /// run-all categories, each in command-line order
    pub fn messages(&self) -> Vec<Message> {
        self.actions
            .iter()
            .cloned()
            .map(Message::QuickAction)
            .chain(self.tools.iter().cloned().map(Message::RunTool))
            .chain(self.run_all.iter().copied().map(Message::RunAll))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.tools.is_empty() && self.run_all.is_empty()
    }
}

/// Run in headless mode. The engine must already be bootstrapped.
pub async fn run_headless(mut engine: Engine, plan: HeadlessPlan) -> Result<()> {
    info!("Cyber USB Toolkit starting in HEADLESS mode");

    let mut cursor = EmitCursor::default();
    HeadlessEvent::started(&engine.state).emit();

    if plan.is_empty() {
        info!("Nothing to dispatch");
    }
    for message in plan.messages() {
        engine.process_message(message);
    }
    emit_all(&mut cursor, &engine);

    let result = headless_event_loop(&mut engine, &mut cursor).await;

    engine.shutdown().await;
    HeadlessEvent::finished(engine.state.tasks.completed_count()).emit();

    info!("Headless mode exiting");
    result
}

/// Process messages until every task has completed
async fn headless_event_loop(engine: &mut Engine, cursor: &mut EmitCursor) -> Result<()> {
    while engine.has_pending_tasks() {
        if engine.should_quit() {
            info!("Quit requested with {} task(s) pending", engine.state.tasks.pending_count());
            break;
        }

        match engine.msg_rx.recv().await {
            Some(msg) => {
                if let Message::GaugesSampled(reading) = &msg {
                    HeadlessEvent::gauges(reading).emit();
                }
                engine.process_message(msg);
                emit_all(cursor, engine);
            }
            None => {
                warn!("Message channel closed");
                return Err(Error::ChannelClosed);
            }
        }
    }

    Ok(())
}

fn emit_all(cursor: &mut EmitCursor, engine: &Engine) {
    for event in cursor.collect(&engine.state) {
        event.emit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_message_order() {
        let plan = HeadlessPlan {
            actions: vec!["cleanup".into()],
            tools: vec!["firewall".into(), "disk".into()],
            run_all: vec![ToolCategory::Security],
        };

        let messages = plan.messages();
        assert_eq!(messages.len(), 4);
        assert!(matches!(&messages[0], Message::QuickAction(id) if id == "cleanup"));
        assert!(matches!(&messages[1], Message::RunTool(id) if id == "firewall"));
        assert!(matches!(&messages[2], Message::RunTool(id) if id == "disk"));
        assert!(matches!(
            &messages[3],
            Message::RunAll(ToolCategory::Security)
        ));
    }

    #[test]
    fn test_empty_plan() {
        assert!(HeadlessPlan::default().is_empty());
        assert!(HeadlessPlan::default().messages().is_empty());
    }
}
