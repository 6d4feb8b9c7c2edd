//! cyberusb-app - Application state and orchestration for the Cyber USB Toolkit
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction that owns timers and simulated tasks, configuration
//! loading, and the console/toast sinks.

pub mod actions;
pub mod catalog;
pub mod config;
pub mod console;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod log_view_state;
pub mod message;
pub mod panel;
pub mod preferences;
pub mod signals;
pub mod state;
pub mod status;
pub mod tabs;
pub mod tasks;
pub mod toast;

// Re-export primary types
pub use engine::Engine;
pub use handler::{TaskTimer, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::AppState;
