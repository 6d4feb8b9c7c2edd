//! Selectable cards on each content panel

use cyberusb_core::TabId;

use crate::catalog::{self, ActionKind, ActionSpec, ToolCategory};
use crate::message::Message;

/// One card/button the user can activate with Enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelItem {
    Action(&'static ActionSpec),
    RunAll(ToolCategory),
    PhishingExamples,
    ClearConsole,
    SaveLogs,
}

impl PanelItem {
    pub fn title(&self) -> &'static str {
        match self {
            PanelItem::Action(action) => action.title,
            PanelItem::RunAll(ToolCategory::Performance) => "Run All Performance",
            PanelItem::RunAll(ToolCategory::Security) => "Run All Security",
            PanelItem::PhishingExamples => "Phishing Examples",
            PanelItem::ClearConsole => "Clear Console",
            PanelItem::SaveLogs => "Save Logs",
        }
    }

    /// Message sent when the card is activated
    pub fn message(&self) -> Message {
        match self {
            PanelItem::Action(action) => match action.kind {
                ActionKind::QuickAction => Message::QuickAction(action.id.to_string()),
                ActionKind::Tool => Message::RunTool(action.id.to_string()),
            },
            PanelItem::RunAll(category) => Message::RunAll(*category),
            PanelItem::PhishingExamples => Message::ShowPhishingExamples,
            PanelItem::ClearConsole => Message::ClearConsole,
            PanelItem::SaveLogs => Message::SaveLogs,
        }
    }
}

/// Cards shown on a panel, top to bottom
pub fn items_for(tab: TabId) -> Vec<PanelItem> {
    match tab {
        TabId::Dashboard => catalog::QUICK_ACTIONS
            .iter()
            .map(PanelItem::Action)
            .collect(),
        TabId::Performance => catalog::tools_in(ToolCategory::Performance)
            .map(PanelItem::Action)
            .chain(std::iter::once(PanelItem::RunAll(ToolCategory::Performance)))
            .collect(),
        TabId::Security => catalog::tools_in(ToolCategory::Security)
            .map(PanelItem::Action)
            .chain([
                PanelItem::RunAll(ToolCategory::Security),
                PanelItem::PhishingExamples,
            ])
            .collect(),
        TabId::Console => vec![PanelItem::ClearConsole, PanelItem::SaveLogs],
        TabId::Settings => Vec::new(),
    }
}

/// Highlighted card per panel
#[derive(Debug, Clone, Default)]
pub struct PanelSelection {
    selected: [usize; TabId::ALL.len()],
}

impl PanelSelection {
    pub fn selected(&self, tab: TabId) -> usize {
        self.selected[tab.index()]
    }

    pub fn select_next(&mut self, tab: TabId) {
        let len = items_for(tab).len();
        if len == 0 {
            return;
        }
        let slot = &mut self.selected[tab.index()];
        *slot = (*slot + 1) % len;
    }

    pub fn select_previous(&mut self, tab: TabId) {
        let len = items_for(tab).len();
        if len == 0 {
            return;
        }
        let slot = &mut self.selected[tab.index()];
        *slot = (*slot + len - 1) % len;
    }

    pub fn current_item(&self, tab: TabId) -> Option<PanelItem> {
        items_for(tab).get(self.selected(tab)).copied()
    }
}
