//! cyberusb-tui - Terminal dashboard for the Cyber USB Toolkit
//!
//! Renders [`cyberusb_app::AppState`] with ratatui and turns crossterm key
//! events into [`cyberusb_app::Message`]s.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
