//! Configuration file parsing for the Cyber USB Toolkit
//!
//! Supports:
//! - `<config_dir>/cyber-usb/config.toml` - Global settings

pub mod settings;
pub mod types;

pub use settings::{
    config_dir, default_config_path, load_settings, parse_settings, try_load_settings,
};
pub use types::*;
