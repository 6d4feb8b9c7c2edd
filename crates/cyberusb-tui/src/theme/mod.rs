//! Centralized theme system for the Cyber-Glass dashboard.
//!
//! This module provides:
//! - `palette` - Dark and light color sets, chosen by the theme preference
//! - `styles` - Semantic style builder functions over a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
