//! Stop signals: SIGINT/SIGTERM on unix, Ctrl+C on Windows

use std::fmt;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::message::Message;
use cyberusb_core::prelude::*;

/// Signal that ends the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for StopSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopSignal::Interrupt => write!(f, "interrupt"),
            StopSignal::Terminate => write!(f, "terminate"),
        }
    }
}

/// Forward the first stop signal as [`Message::Quit`].
///
/// The listener returns without sending anything once `shutdown` flips, so
/// an engine that is already tearing down never sees a late quit.
pub fn spawn_signal_handler(
    tx: mpsc::Sender<Message>,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let signal = tokio::select! {
            received = next_stop_signal() => match received {
                Ok(signal) => signal,
                Err(e) => {
                    warn!("Stop signals not monitored: {}", e);
                    return;
                }
            },
            _ = shutdown.changed() => return,
        };

        info!("Received {} signal, quitting", signal);
        let _ = tx.send(Message::Quit).await;
    })
}

#[cfg(unix)]
async fn next_stop_signal() -> Result<StopSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind| {
        signal(kind).map_err(|e| Error::terminal(format!("cannot listen for {:?}: {}", kind, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt())?;
    let mut terminate = listen(SignalKind::terminate())?;

    Ok(tokio::select! {
        _ = interrupt.recv() => StopSignal::Interrupt,
        _ = terminate.recv() => StopSignal::Terminate,
    })
}

#[cfg(windows)]
async fn next_stop_signal() -> Result<StopSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {}", e)))?;
    Ok(StopSignal::Interrupt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_listener_is_quiet_without_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = spawn_signal_handler(tx, shutdown_rx);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(rx.try_recv().is_err());
        handle.abort();
    }

    #[tokio::test]
    async fn test_listener_exits_on_shutdown() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = spawn_signal_handler(tx, shutdown_rx);
        shutdown_tx.send(true).unwrap();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("listener should stop")
            .unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_stop_signal_display() {
        assert_eq!(StopSignal::Interrupt.to_string(), "interrupt");
        assert_eq!(StopSignal::Terminate.to_string(), "terminate");
    }
}
