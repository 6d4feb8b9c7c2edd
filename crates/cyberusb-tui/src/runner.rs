//! Main TUI runner - lifecycle and event loop

use cyberusb_app::Engine;
use cyberusb_core::prelude::*;

use crate::{event, render, terminal};

/// Run the dashboard until the user quits or a signal arrives.
///
/// The engine must already be bootstrapped. Pending simulated tasks are
/// cancelled and the terminal restored before returning.
pub async fn run(mut engine: Engine) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown().await;
    if let Err(e) = terminal::restore() {
        error!("Failed to restore terminal: {}", e);
    }

    result
}

/// Main event loop
fn run_loop(term: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Timers, completions and signals
        engine.drain_pending_messages();

        term.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Quit requested, shutting down");
    Ok(())
}
