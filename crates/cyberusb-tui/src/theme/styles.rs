//! Semantic style builders for the Cyber-Glass theme.

use cyberusb_core::Severity;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    accent(p).add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.status_yellow)
}

/// Contrast-on-accent, used for the highlighted card and active tab
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Severity ---
pub fn severity_color(p: &Palette, severity: Severity) -> Color {
    match severity {
        Severity::Info => p.status_blue,
        Severity::Success => p.status_green,
        Severity::Warning => p.status_yellow,
        Severity::Error => p.status_red,
    }
}

pub fn severity_style(p: &Palette, severity: Severity) -> Style {
    Style::default().fg(severity_color(p, severity))
}

/// Fill color of a gauge: calm, elevated, high
pub fn gauge_color(p: &Palette, percent: u8) -> Color {
    match percent {
        0..=59 => p.status_green,
        60..=79 => p.status_yellow,
        _ => p.status_red,
    }
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border_dim
        }))
        .style(Style::default().bg(p.card_bg))
}

pub fn modal_block<'a>(p: &Palette, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(accent_bold(p))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_active))
        .style(Style::default().bg(p.popup_bg).fg(p.text_primary))
}
