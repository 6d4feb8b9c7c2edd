//! Fixed catalogue of simulated quick actions and tools
//!
//! Each identifier maps to the "starting" line written to the console when
//! the action is dispatched. Completion lines and toasts are derived from the
//! identifier itself.

use cyberusb_core::Severity;

/// Which dispatcher an identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Dashboard quick action cards
    QuickAction,
    /// Performance and security tool cards
    Tool,
}

/// Grouping of tools on the Performance and Security panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    Performance,
    Security,
}

impl ToolCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::Performance => "performance",
            ToolCategory::Security => "security",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "performance" => Some(ToolCategory::Performance),
            "security" => Some(ToolCategory::Security),
            _ => None,
        }
    }
}

/// One catalogue entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpec {
    pub id: &'static str,
    /// Card title
    pub title: &'static str,
    /// Console line written at dispatch time
    pub starting_message: &'static str,
    pub kind: ActionKind,
    /// Only set for tools
    pub category: Option<ToolCategory>,
}

impl ActionSpec {
    const fn quick(id: &'static str, title: &'static str, starting: &'static str) -> Self {
        Self {
            id,
            title,
            starting_message: starting,
            kind: ActionKind::QuickAction,
            category: None,
        }
    }

    const fn tool(
        id: &'static str,
        title: &'static str,
        starting: &'static str,
        category: ToolCategory,
    ) -> Self {
        Self {
            id,
            title,
            starting_message: starting,
            kind: ActionKind::Tool,
            category: Some(category),
        }
    }

    /// Console line written when the simulated task finishes
    pub fn completion_message(&self) -> String {
        match self.kind {
            ActionKind::QuickAction => format!("{} completed successfully", self.id),
            ActionKind::Tool => format!("{} tool completed", self.id),
        }
    }

    /// Toast text raised when the simulated task finishes
    pub fn toast_message(&self) -> String {
        format!("{} completed", self.id)
    }

    pub fn toast_severity(&self) -> Severity {
        match self.kind {
            ActionKind::QuickAction => Severity::Success,
            ActionKind::Tool => Severity::Info,
        }
    }
}

pub const QUICK_ACTIONS: &[ActionSpec] = &[
    ActionSpec::quick("cleanup", "System Cleanup", "Starting system cleanup..."),
    ActionSpec::quick("security-scan", "Security Scan", "Running security scan..."),
    ActionSpec::quick("driver-check", "Driver Check", "Checking driver status..."),
    ActionSpec::quick("network-scan", "Network Scan", "Scanning network..."),
];

pub const TOOLS: &[ActionSpec] = &[
    ActionSpec::tool(
        "cleanup",
        "System Cleanup",
        "Starting system cleanup...",
        ToolCategory::Performance,
    ),
    ActionSpec::tool(
        "drivers",
        "Driver Management",
        "Checking drivers...",
        ToolCategory::Performance,
    ),
    ActionSpec::tool(
        "disk",
        "Disk Management",
        "Analyzing disk usage...",
        ToolCategory::Performance,
    ),
    ActionSpec::tool(
        "power",
        "Battery & Power",
        "Optimizing power settings...",
        ToolCategory::Performance,
    ),
    ActionSpec::tool(
        "threat",
        "Threat Detection",
        "Scanning for threats...",
        ToolCategory::Security,
    ),
    ActionSpec::tool(
        "firewall",
        "Firewall Check",
        "Checking firewall configuration...",
        ToolCategory::Security,
    ),
    ActionSpec::tool(
        "password",
        "Password Audit",
        "Auditing passwords...",
        ToolCategory::Security,
    ),
    ActionSpec::tool(
        "network",
        "Network & Ports",
        "Scanning network ports...",
        ToolCategory::Security,
    ),
];

pub fn lookup_quick_action(id: &str) -> Option<&'static ActionSpec> {
    QUICK_ACTIONS.iter().find(|action| action.id == id)
}

pub fn lookup_tool(id: &str) -> Option<&'static ActionSpec> {
    TOOLS.iter().find(|action| action.id == id)
}

/// Look up an identifier in the catalogue of the given dispatcher
pub fn lookup(kind: ActionKind, id: &str) -> Option<&'static ActionSpec> {
    match kind {
        ActionKind::QuickAction => lookup_quick_action(id),
        ActionKind::Tool => lookup_tool(id),
    }
}

/// Tools of one category, in catalogue order
pub fn tools_in(category: ToolCategory) -> impl Iterator<Item = &'static ActionSpec> {
    TOOLS
        .iter()
        .filter(move |action| action.category == Some(category))
}

// ─────────────────────────────────────────────────────────────────────────────
// Console-only simulations
// ─────────────────────────────────────────────────────────────────────────────

pub const SAVING_LOGS_MESSAGE: &str = "Saving logs...";
pub const LOGS_SAVED_MESSAGE: &str = "Logs saved successfully";
pub const LOGS_SAVED_TOAST: &str = "Logs saved";

pub const PHISHING_HEADER: &str = "Common phishing examples:";
pub const PHISHING_EXAMPLES: [&str; 3] = [
    "Urgent: Your account will be suspended! Verify your password now.",
    "Congratulations! You've won a $1000 gift card. Click here to claim.",
    "Invoice attached: please review the payment details immediately.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_action_ids() {
        let ids: Vec<_> = QUICK_ACTIONS.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec!["cleanup", "security-scan", "driver-check", "network-scan"]
        );
    }

    #[test]
    fn test_tool_ids() {
        let ids: Vec<_> = TOOLS.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec!["cleanup", "drivers", "disk", "power", "threat", "firewall", "password", "network"]
        );
    }

    #[test]
    fn test_cleanup_quick_action_messages() {
        let action = lookup_quick_action("cleanup").unwrap();
        assert_eq!(action.starting_message, "Starting system cleanup...");
        assert_eq!(action.completion_message(), "cleanup completed successfully");
        assert_eq!(action.toast_message(), "cleanup completed");
        assert_eq!(action.toast_severity(), Severity::Success);
    }

    #[test]
    fn test_password_tool_messages() {
        let action = lookup_tool("password").unwrap();
        assert_eq!(action.starting_message, "Auditing passwords...");
        assert_eq!(action.completion_message(), "password tool completed");
        assert_eq!(action.toast_message(), "password completed");
        assert_eq!(action.toast_severity(), Severity::Info);
    }

    #[test]
    fn test_unknown_lookups() {
        assert!(lookup_quick_action("drivers").is_none());
        assert!(lookup_tool("security-scan").is_none());
        assert!(lookup(ActionKind::Tool, "").is_none());
    }

    #[test]
    fn test_tools_in_category() {
        let perf: Vec<_> = tools_in(ToolCategory::Performance).map(|s| s.id).collect();
        assert_eq!(perf, vec!["cleanup", "drivers", "disk", "power"]);
        let sec: Vec<_> = tools_in(ToolCategory::Security).map(|s| s.id).collect();
        assert_eq!(sec, vec!["threat", "firewall", "password", "network"]);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(
            ToolCategory::parse("security"),
            Some(ToolCategory::Security)
        );
        assert_eq!(ToolCategory::parse("Security"), None);
    }
}
