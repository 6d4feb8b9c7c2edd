//! Cyber USB Toolkit
//!
//! A terminal dashboard with simulated system-maintenance and security
//! tools. The binary wires configuration, logging and the engine together
//! and hands off to either the TUI or the headless runner.

pub mod headless;

pub use cyberusb_app::Engine;
pub use cyberusb_tui::run;
pub use headless::runner::{run_headless, HeadlessPlan};
