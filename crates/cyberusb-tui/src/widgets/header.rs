//! Header bar widget
//!
//! Title on the left; OS label, architecture and clock on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use cyberusb_app::state::SystemInfo;

use crate::theme::{styles, Palette};

pub const APP_TITLE: &str = "Cyber USB Toolkit";

/// Main header showing the app title, platform and clock
pub struct MainHeader<'a> {
    system: &'a SystemInfo,
    clock: &'a str,
    palette: &'a Palette,
}

impl<'a> MainHeader<'a> {
    pub fn new(system: &'a SystemInfo, clock: &'a str, palette: &'a Palette) -> Self {
        Self {
            system,
            clock,
            palette,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let p = self.palette;
        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("◆", styles::accent(p)),
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold(p)),
        ]);

        let clock = if self.clock.is_empty() {
            "--:-- --"
        } else {
            self.clock
        };
        let right = Line::from(vec![
            Span::styled(self.system.platform.label(), styles::text_primary(p)),
            Span::styled(format!(" {} ", self.system.arch), styles::text_muted(p)),
            Span::styled("│ ", styles::text_muted(p)),
            Span::styled(clock, styles::text_secondary(p)),
            Span::raw(" "),
        ]);

        let left_width = left.width() as u16;
        let right_width = right.width() as u16;

        Paragraph::new(left).render(inner, buf);

        // Right section only when it does not collide with the title
        if left_width + right_width < inner.width {
            let right_area = Rect {
                x: inner.x + inner.width - right_width,
                y: inner.y,
                width: right_width,
                height: 1,
            };
            Paragraph::new(right).render(right_area, buf);
        }
    }
}
