//! Tab and panel card handlers

use cyberusb_core::prelude::*;
use cyberusb_core::TabId;

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_select_tab(state: &mut AppState, tab: TabId) -> UpdateResult {
    state.tabs.select(tab);
    UpdateResult::none()
}

/// Unknown identifiers leave the current tab active
pub fn handle_select_tab_by_id(state: &mut AppState, id: &str) -> UpdateResult {
    if let Err(e) = state.tabs.select_id(id) {
        warn!("Rejected tab selection: {}", e);
    }
    UpdateResult::none()
}

pub fn handle_next_tab(state: &mut AppState) -> UpdateResult {
    state.tabs.next();
    UpdateResult::none()
}

pub fn handle_previous_tab(state: &mut AppState) -> UpdateResult {
    state.tabs.previous();
    UpdateResult::none()
}

pub fn handle_select_next_item(state: &mut AppState) -> UpdateResult {
    let tab = state.active_tab();
    state.selection.select_next(tab);
    UpdateResult::none()
}

pub fn handle_select_previous_item(state: &mut AppState) -> UpdateResult {
    let tab = state.active_tab();
    state.selection.select_previous(tab);
    UpdateResult::none()
}

/// Turn the highlighted card into its message
pub fn handle_activate_selected(state: &mut AppState) -> UpdateResult {
    match state.selection.current_item(state.active_tab()) {
        Some(item) => UpdateResult::message(item.message()),
        None => UpdateResult::none(),
    }
}
