//! Coarse platform classification from an identity string
//!
//! The identity string is a user-agent style descriptor such as
//! `CyberUSB/0.1.0 (X11; Linux x86_64)`. Classification only looks for a
//! handful of substring markers, so any string can be fed in (the CLI's
//! `--platform-id` flag relies on this).

use std::fmt;

/// Coarse operating-system label shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Android,
    Ios,
    #[default]
    Unknown,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Marker checks in evaluation order. A later match overrides an earlier one:
/// Android strings also carry `Linux`, iOS strings also carry `Mac`.
const MARKERS: &[(&str, Platform)] = &[
    ("Win", Platform::Windows),
    ("Mac", Platform::MacOs),
    ("Linux", Platform::Linux),
    ("Android", Platform::Android),
    ("like Mac", Platform::Ios),
];

/// Classify an identity string into exactly one [`Platform`].
pub fn detect_platform(identity: &str) -> Platform {
    MARKERS
        .iter()
        .filter(|(marker, _)| identity.contains(marker))
        .map(|(_, platform)| *platform)
        .last()
        .unwrap_or(Platform::Unknown)
}

/// Identity string for the platform this binary was built for.
pub fn identity_string() -> String {
    identity_for(std::env::consts::OS, std::env::consts::ARCH)
}

fn identity_for(os: &str, arch: &str) -> String {
    let details = match os {
        "windows" => format!("Windows NT 10.0; Win64; {arch}"),
        "macos" => format!("Macintosh; {arch} Mac OS X"),
        "linux" => format!("X11; Linux {arch}"),
        "android" => format!("Linux; Android; {arch}"),
        "ios" => "iPhone; CPU iPhone OS like Mac OS X".to_string(),
        other => format!("{other}; {arch}"),
    };
    format!("CyberUSB/{} ({details})", env!("CARGO_PKG_VERSION"))
}
