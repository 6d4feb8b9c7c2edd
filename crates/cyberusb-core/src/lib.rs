//! # cyberusb-core - Core Domain Types
//!
//! Foundation crate for the Cyber USB Toolkit. Provides domain types, error
//! handling, platform classification and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ConsoleEntry`] - A single console line with severity and timestamp
//! - [`Severity`] - Display class of a console entry or toast
//! - [`GaugeReading`] - One cpu/memory/disk sample
//! - [`TabId`] - Identifier of a navigation tab
//!
//! ### Platform (`platform`)
//! - [`Platform`] - Coarse OS label
//! - [`detect_platform()`] - Classify an identity string
//! - [`identity_string()`] - Identity string of the running build
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! ```rust
//! use cyberusb_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod platform;
pub mod types;

/// Prelude for common imports used throughout all Cyber USB crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result};
pub use platform::{detect_platform, identity_string, Platform};
pub use types::{
    AppPhase, ConsoleEntry, GaugeReading, Severity, TabId, CPU_RANGE, DISK_RANGE, MEMORY_RANGE,
};
