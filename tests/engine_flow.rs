//! End-to-end engine tests with paused time
//!
//! Drives the same engine the binary uses, with a fixed gauge source so
//! assertions do not depend on random samples.

use std::time::Duration;

use tokio::time::Instant;

use cyberusb_app::catalog::{ToolCategory, PHISHING_HEADER};
use cyberusb_app::config::{Settings, UnknownActionPolicy};
use cyberusb_app::engine::INIT_MESSAGE;
use cyberusb_app::preferences::ThemePreference;
use cyberusb_app::state::SystemInfo;
use cyberusb_app::status::GaugeSource;
use cyberusb_app::{Engine, Message};
use cyberusb_core::{GaugeReading, Platform, Severity, TabId};

struct SteadyGauges;

impl GaugeSource for SteadyGauges {
    fn sample(&mut self) -> GaugeReading {
        GaugeReading::new(45, 60, 55)
    }
}

fn engine_with(settings: Settings) -> Engine {
    let mut engine = Engine::new(
        settings,
        ThemePreference::default(),
        SystemInfo::new("Mozilla/5.0 (X11; Linux x86_64)", "x86_64"),
    );
    engine.bootstrap_with(SteadyGauges);
    engine
}

fn messages(engine: &Engine) -> Vec<String> {
    engine.state.console.messages().map(str::to_string).collect()
}

#[tokio::test(start_paused = true)]
async fn cleanup_completes_after_two_seconds() {
    let mut engine = engine_with(Settings::default());
    let start = Instant::now();

    engine.process_message(Message::QuickAction("cleanup".into()));
    assert_eq!(
        messages(&engine),
        vec![INIT_MESSAGE, "Starting system cleanup..."]
    );

    engine.run_until_idle().await;

    assert_eq!(start.elapsed(), Duration::from_millis(2000));
    let last = engine.state.console.last().expect("completion line");
    assert_eq!(last.message, "cleanup completed successfully");
    assert_eq!(last.severity, Severity::Success);

    let toast = engine.state.toasts.iter().last().expect("toast");
    assert_eq!(toast.message, "cleanup completed");
    assert_eq!(toast.severity, Severity::Success);

    engine.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn password_tool_completes_after_three_seconds() {
    let mut engine = engine_with(Settings::default());
    let start = Instant::now();

    engine.process_message(Message::RunTool("password".into()));
    engine.run_until_idle().await;

    assert_eq!(start.elapsed(), Duration::from_millis(3000));
    assert_eq!(
        engine.state.console.last().map(|e| e.message.as_str()),
        Some("password tool completed")
    );
    let toast = engine.state.toasts.iter().last().expect("toast");
    assert_eq!(toast.severity, Severity::Info);

    engine.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn phishing_examples_arrive_together_after_one_second() {
    let mut engine = engine_with(Settings::default());
    let before = engine.state.console.len();

    engine.process_message(Message::ShowPhishingExamples);
    assert_eq!(engine.state.console.len(), before, "nothing logged yet");

    engine.run_until_idle().await;

    let tail: Vec<_> = engine.state.console.entries()[before..].to_vec();
    assert_eq!(tail.len(), 4);
    assert_eq!(tail[0].message, PHISHING_HEADER);
    assert!(tail[1..].iter().all(|e| e.severity == Severity::Warning));

    engine.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn unknown_identifier_is_ignored_by_default() {
    let mut engine = engine_with(Settings::default());
    let before = messages(&engine);

    engine.process_message(Message::QuickAction("defrag".into()));
    engine.process_message(Message::RunTool("defrag".into()));

    assert_eq!(messages(&engine), before);
    assert!(!engine.has_pending_tasks());
    assert_eq!(engine.pending_timer_count(), 0);

    engine.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn unknown_identifier_reported_when_configured() {
    let mut settings = Settings::default();
    settings.behavior.unknown_action = UnknownActionPolicy::Report;
    let mut engine = engine_with(settings);

    engine.process_message(Message::RunTool("defrag".into()));

    let last = engine.state.console.last().expect("warning line");
    assert_eq!(last.message, "Unknown action: defrag");
    assert_eq!(last.severity, Severity::Warning);

    engine.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn run_all_security_completes_every_tool() {
    let mut engine = engine_with(Settings::default());

    engine.process_message(Message::RunAll(ToolCategory::Security));
    assert_eq!(engine.pending_timer_count(), 4);

    engine.run_until_idle().await;

    let log = messages(&engine);
    for id in ["threat", "firewall", "password", "network"] {
        assert!(log.contains(&format!("{id} tool completed")), "missing {id}");
    }
    assert_eq!(engine.state.tasks.completed_count(), 4);

    engine.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn clear_during_pending_task_keeps_completion() {
    let mut engine = engine_with(Settings::default());

    engine.process_message(Message::QuickAction("network-scan".into()));
    engine.process_message(Message::ClearConsole);
    assert_eq!(engine.state.console.len(), 1);

    engine.run_until_idle().await;
    assert_eq!(
        engine.state.console.last().map(|e| e.message.as_str()),
        Some("network-scan completed successfully")
    );

    engine.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn timers_refresh_status_and_tabs_route() {
    let mut engine = engine_with(Settings::default());
    assert_eq!(engine.state.system.platform, Platform::Linux);

    // Clock and gauges fire immediately at bootstrap
    engine.process_next().await;
    engine.process_next().await;
    assert_eq!(engine.state.gauges, Some(GaugeReading::new(45, 60, 55)));
    assert!(!engine.state.clock.is_empty());

    engine.process_message(Message::SelectTabById("security".into()));
    assert_eq!(engine.state.active_tab(), TabId::Security);

    engine.process_message(Message::SelectTabById("reports".into()));
    assert_eq!(engine.state.active_tab(), TabId::Security);

    engine.shutdown().await;
}
