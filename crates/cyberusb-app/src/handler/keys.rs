//! Key event handlers for different UI modes

use cyberusb_core::TabId;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::About => handle_key_about(key),
    }
}

/// Handle key events while the about modal is open
fn handle_key_about(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter | InputKey::Char('q') => Some(Message::CloseAbout),
        // Force quit with Ctrl+C even in the modal
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events on the dashboard
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('?') => Some(Message::ShowAbout),

        // Tabs
        InputKey::Char(c @ '1'..='5') => {
            let index = c.to_digit(10)? as usize - 1;
            TabId::from_index(index).map(Message::SelectTab)
        }
        InputKey::Tab => Some(Message::NextTab),
        InputKey::BackTab => Some(Message::PreviousTab),

        // The console buttons have their own shortcuts, so arrows scroll there
        InputKey::Up | InputKey::Char('k') if state.active_tab() == TabId::Console => {
            Some(Message::ScrollUp)
        }
        InputKey::Down | InputKey::Char('j') if state.active_tab() == TabId::Console => {
            Some(Message::ScrollDown)
        }

        // Cards
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPreviousItem),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextItem),
        InputKey::Enter => Some(Message::ActivateSelected),

        // Console scrolling
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home => Some(Message::ScrollToTop),
        InputKey::End => Some(Message::ScrollToBottom),

        // Console shortcuts
        InputKey::Char('c') if state.active_tab() == TabId::Console => {
            Some(Message::ClearConsole)
        }
        InputKey::Char('s') if state.active_tab() == TabId::Console => Some(Message::SaveLogs),

        _ => None,
    }
}
