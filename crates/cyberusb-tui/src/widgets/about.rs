//! About dialog shown over the dashboard

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use cyberusb_app::state::SystemInfo;

use crate::theme::{styles, Palette};

use super::modal_overlay::{centered_rect, clear_area, dim_background};

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 11;

pub struct AboutDialog<'a> {
    system: &'a SystemInfo,
    palette: &'a Palette,
}

impl<'a> AboutDialog<'a> {
    pub fn new(system: &'a SystemInfo, palette: &'a Palette) -> Self {
        Self { system, palette }
    }
}

impl Widget for AboutDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        dim_background(buf, area, p);

        let rect = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        clear_area(buf, rect);

        let lines = vec![
            Line::from(Span::styled(
                format!("Cyber USB Toolkit v{}", env!("CARGO_PKG_VERSION")),
                styles::accent_bold(p),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "System maintenance and security dashboard.",
                styles::text_primary(p),
            )),
            Line::from(Span::styled(
                "All tools are simulated; nothing touches the host.",
                styles::text_secondary(p),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Platform: ", styles::text_muted(p)),
                Span::styled(
                    format!("{} ({})", self.system.platform, self.system.arch),
                    styles::text_primary(p),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Esc", styles::keybinding(p)),
                Span::styled(" close", styles::text_muted(p)),
            ]),
        ];

        Paragraph::new(lines)
            .block(styles::modal_block(p, " About "))
            .render(rect, buf);
    }
}
