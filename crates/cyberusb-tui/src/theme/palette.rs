//! Color palettes for the Cyber-Glass theme.
//!
//! The dark palette is the default; the light palette is selected only when
//! the stored theme preference disables dark mode.

use ratatui::style::Color;

/// Complete set of design tokens for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub deepest_bg: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    /// Foreground on top of the accent color
    pub contrast_fg: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub status_green: Color,
    pub status_red: Color,
    pub status_yellow: Color,
    pub status_blue: Color,
}

pub const DARK: Palette = Palette {
    deepest_bg: Color::Rgb(10, 12, 16),
    card_bg: Color::Rgb(18, 21, 28),
    popup_bg: Color::Rgb(28, 33, 43),
    border_dim: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(0, 255, 200),
    accent: Color::Rgb(0, 255, 200),
    contrast_fg: Color::Black,
    text_primary: Color::Rgb(201, 209, 217),
    text_secondary: Color::Rgb(125, 133, 144),
    text_muted: Color::Rgb(72, 79, 88),
    status_green: Color::Rgb(16, 185, 129),
    status_red: Color::Rgb(244, 63, 94),
    status_yellow: Color::Rgb(234, 179, 8),
    status_blue: Color::Rgb(56, 189, 248),
};

pub const LIGHT: Palette = Palette {
    deepest_bg: Color::Rgb(246, 248, 250),
    card_bg: Color::Rgb(255, 255, 255),
    popup_bg: Color::Rgb(234, 238, 242),
    border_dim: Color::Rgb(208, 215, 222),
    border_active: Color::Rgb(9, 105, 218),
    accent: Color::Rgb(9, 105, 218),
    contrast_fg: Color::White,
    text_primary: Color::Rgb(31, 35, 40),
    text_secondary: Color::Rgb(89, 99, 110),
    text_muted: Color::Rgb(140, 149, 159),
    status_green: Color::Rgb(26, 127, 55),
    status_red: Color::Rgb(207, 34, 46),
    status_yellow: Color::Rgb(154, 103, 0),
    status_blue: Color::Rgb(9, 105, 218),
};

/// Palette for the restored theme flag
pub fn for_mode(dark_mode: bool) -> &'static Palette {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}
