//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the application state, the message channel, the repeating
//! status timers and the completion timers of pending simulated tasks. Both
//! runners drive it the same way: feed it messages, render or print state.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Local;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use cyberusb_core::prelude::*;
use cyberusb_core::AppPhase;

use crate::actions::handle_action;
use crate::config::Settings;
use crate::handler;
use crate::message::Message;
use crate::preferences::ThemePreference;
use crate::signals;
use crate::state::{AppState, SystemInfo};
use crate::status::{GaugeSource, SimulatedGauges};
use crate::tasks::{TaskHandle, TaskId};

/// Console line written first at startup
pub const INIT_MESSAGE: &str = "Cyber USB Toolkit initialized";

/// Capacity of the unified message channel
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for the Cyber USB Toolkit.
///
/// Encapsulates all shared state between TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Status timers (clock, gauges)
/// - Completion timers of pending simulated tasks
/// - Shutdown signaling
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, timers).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Completion timers keyed by task
    task_handles: HashMap<TaskId, TaskHandle>,

    /// Clock, gauge and signal tasks
    background: Vec<JoinHandle<()>>,

    /// Sender for the shutdown signal. Send `true` to stop background tasks.
    shutdown_tx: watch::Sender<bool>,

    shutdown_rx: watch::Receiver<bool>,
}

impl Engine {
    /// Create a new Engine.
    ///
    /// Builds the state (classifying the platform and applying the theme
    /// preference) and creates the channels. Nothing runs until
    /// [`Engine::bootstrap`].
    pub fn new(settings: Settings, theme: ThemePreference, system: SystemInfo) -> Self {
        let state = AppState::with_settings(settings, theme, system);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Self {
            state,
            msg_tx,
            msg_rx,
            task_handles: HashMap::new(),
            background: Vec::new(),
            shutdown_tx,
            shutdown_rx,
        }
    }

    /// Startup sequence with the simulated gauge source
    pub fn bootstrap(&mut self) {
        self.bootstrap_with(SimulatedGauges::new());
    }

    /// Startup sequence. The platform and theme were already settled by
    /// [`Engine::new`]; neither writes to the console.
    /// 1. Log the initialization line
    /// 2. Trace the detected platform and theme
    /// 3. Start the clock and gauge timers (both fire immediately)
    pub fn bootstrap_with<G: GaugeSource + 'static>(&mut self, gauges: G) {
        self.state.console.info(INIT_MESSAGE);

        info!(
            "Platform: {} ({}) from identity '{}'",
            self.state.system.platform, self.state.system.arch, self.state.system.identity
        );
        info!(
            "Theme: {}",
            if self.state.dark_mode { "dark" } else { "light" }
        );

        let timing = &self.state.settings.timing;
        let clock_every = timing.clock_interval();
        let gauges_every = timing.gauge_interval();

        self.background.push(spawn_clock_timer(
            clock_every,
            self.msg_tx.clone(),
            self.shutdown_rx.clone(),
        ));
        self.background.push(spawn_gauge_timer(
            gauges_every,
            gauges,
            self.msg_tx.clone(),
            self.shutdown_rx.clone(),
        ));

        self.state.phase = AppPhase::Running;
    }

    /// Listen for SIGINT/SIGTERM and turn them into [`Message::Quit`]
    pub fn spawn_signal_handler(&mut self) {
        self.background.push(signals::spawn_signal_handler(
            self.msg_tx.clone(),
            self.shutdown_rx.clone(),
        ));
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Follow-up messages are processed immediately; scheduled tasks get a
    /// completion timer whose handle the engine keeps until it fires.
    pub fn process_message(&mut self, message: Message) {
        if let Message::TaskCompleted { id } = &message {
            self.task_handles.remove(id);
        }

        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = handler::update(&mut self.state, m);

            if let Some(action) = result.action {
                for handle in handle_action(action, &self.msg_tx) {
                    self.task_handles.insert(handle.id, handle);
                }
            }

            msg = result.message;
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it.
    ///
    /// Returns `false` once the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Process messages until no simulated task is pending or a quit arrives
    pub async fn run_until_idle(&mut self) {
        while self.has_pending_tasks() && !self.should_quit() {
            if !self.process_next().await {
                warn!("Message channel closed with tasks pending");
                break;
            }
        }
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn has_pending_tasks(&self) -> bool {
        self.state.has_pending_tasks()
    }

    /// Completion timers still running
    pub fn pending_timer_count(&self) -> usize {
        self.task_handles.len()
    }

    /// Stop the status timers and abort every pending completion timer
    pub async fn shutdown(&mut self) {
        let _ = self.shutdown_tx.send(true);

        let pending: Vec<_> = self.task_handles.drain().map(|(_, h)| h).collect();
        if !pending.is_empty() {
            info!("Cancelling {} pending task(s)", pending.len());
        }
        for handle in &pending {
            handle.cancel();
        }
        for handle in pending {
            let id = handle.id;
            if handle.wait().await {
                debug!("{} finished before cancellation", id);
            }
        }

        for task in self.background.drain(..) {
            task.abort();
            let _ = task.await;
        }
        self.state.phase = AppPhase::Quitting;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Status timers
// ─────────────────────────────────────────────────────────────────────────────

/// Repeating interval; the first tick completes immediately
fn interval(period: Duration) -> tokio::time::Interval {
    let mut ticker = tokio::time::interval(period.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    ticker
}

fn spawn_clock_timer(
    period: Duration,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if msg_tx.send(Message::ClockTick(Local::now())).await.is_err() {
                        break;
                    }
                }
                _ = shutdown_rx.changed() => break,
            }
        }
        debug!("Clock timer stopped");
    })
}

fn spawn_gauge_timer<G: GaugeSource + 'static>(
    period: Duration,
    mut source: G,
    msg_tx: mpsc::Sender<Message>,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let reading = source.sample();
                    if msg_tx.send(Message::GaugesSampled(reading)).await.is_err() {
                        break;
                    }
                }
                _ = shutdown_rx.changed() => break,
            }
        }
        debug!("Gauge timer stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyberusb_core::{GaugeReading, Platform};

    fn test_engine() -> Engine {
        Engine::new(
            Settings::default(),
            ThemePreference::default(),
            SystemInfo::new("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0)", "aarch64"),
        )
    }

    struct FixedGauges(GaugeReading);

    impl GaugeSource for FixedGauges {
        fn sample(&mut self) -> GaugeReading {
            self.0
        }
    }

    #[tokio::test]
    async fn test_engine_new_creates_valid_state() {
        let engine = test_engine();
        assert!(!engine.should_quit());
        assert_eq!(engine.state.phase, AppPhase::Initializing);
        assert_eq!(engine.state.system.platform, Platform::MacOs);
        assert!(engine.state.console.is_empty());
    }

    #[tokio::test]
    async fn test_theme_settled_before_init_line() {
        let mut engine = Engine::new(
            Settings::default(),
            ThemePreference::from_stored(Some("false".into())),
            SystemInfo::new("Linux x86_64", "x86_64"),
        );
        assert!(!engine.state.dark_mode);
        assert_eq!(engine.state.system.platform, Platform::Linux);

        engine.bootstrap();
        assert_eq!(engine.state.console.messages().next(), Some(INIT_MESSAGE));
        assert_eq!(engine.state.console.len(), 1);
        engine.shutdown().await;
    }

    #[tokio::test]
    async fn test_engine_drain_empty_channel() {
        let mut engine = test_engine();
        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test]
    async fn test_engine_process_quit_message() {
        let mut engine = test_engine();
        engine.process_message(Message::Quit);
        assert!(engine.should_quit());
    }

    #[tokio::test(start_paused = true)]
    async fn test_bootstrap_logs_and_fires_timers_immediately() {
        let mut engine = test_engine();
        engine.bootstrap_with(FixedGauges(GaugeReading::new(50, 60, 70)));

        assert_eq!(engine.state.phase, AppPhase::Running);
        assert_eq!(
            engine.state.console.messages().collect::<Vec<_>>(),
            vec![INIT_MESSAGE]
        );

        // Both first ticks are immediate
        engine.process_next().await;
        engine.process_next().await;
        assert_eq!(engine.state.gauges, Some(GaugeReading::new(50, 60, 70)));
        assert!(!engine.state.clock.is_empty());

        engine.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_gauge_timer_repeats_on_interval() {
        let (tx, mut rx) = mpsc::channel(8);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = spawn_gauge_timer(
            Duration::from_millis(30_000),
            FixedGauges(GaugeReading::default()),
            tx,
            shutdown_rx,
        );

        let start = tokio::time::Instant::now();
        assert!(matches!(rx.recv().await, Some(Message::GaugesSampled(_))));
        assert!(matches!(rx.recv().await, Some(Message::GaugesSampled(_))));
        assert_eq!(start.elapsed(), Duration::from_millis(30_000));
        task.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_completes_through_channel() {
        let mut engine = test_engine();
        engine.process_message(Message::QuickAction("driver-check".into()));
        assert_eq!(engine.pending_timer_count(), 1);
        assert!(engine.has_pending_tasks());

        engine.run_until_idle().await;

        assert!(!engine.has_pending_tasks());
        assert_eq!(engine.pending_timer_count(), 0);
        assert_eq!(
            engine.state.console.last().map(|e| e.message.as_str()),
            Some("driver-check completed successfully")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_tasks() {
        let mut engine = test_engine();
        engine.process_message(Message::RunTool("firewall".into()));
        engine.shutdown().await;

        assert_eq!(engine.pending_timer_count(), 0);
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(engine.drain_pending_messages(), 0);
        assert!(engine.should_quit());
    }
}
