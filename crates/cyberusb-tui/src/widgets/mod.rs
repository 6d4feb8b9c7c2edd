//! Custom widget components

mod about;
mod action_list;
mod console_view;
mod gauges;
mod header;
pub mod modal_overlay;
mod settings_summary;
mod status_bar;
mod tabs;
mod toasts;

pub use about::AboutDialog;
pub use action_list::ActionList;
pub use console_view::{ActivityFeed, ConsoleView};
pub use gauges::ResourceGauges;
pub use header::MainHeader;
pub use settings_summary::SettingsSummary;
pub use status_bar::KeyHints;
pub use tabs::NavTabs;
pub use toasts::ToastOverlay;

// Re-export state types from app layer (these are used by render/)
pub use cyberusb_app::log_view_state::LogViewState;
