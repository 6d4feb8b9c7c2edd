//! One-line key hint bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use cyberusb_core::TabId;

use crate::theme::{styles, Palette};

pub struct KeyHints<'a> {
    tab: TabId,
    pending: usize,
    palette: &'a Palette,
}

impl<'a> KeyHints<'a> {
    pub fn new(tab: TabId, pending: usize, palette: &'a Palette) -> Self {
        Self { tab, pending, palette }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![("1-5", "tabs")];
        if self.tab == TabId::Console {
            hints.extend([("↑↓/PgUp/PgDn", "scroll"), ("c", "clear"), ("s", "save")]);
        } else {
            hints.extend([("↑↓", "select"), ("Enter", "run")]);
        }
        hints.extend([("?", "about"), ("q", "quit")]);
        hints
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled(key, styles::keybinding(p)));
            spans.push(Span::styled(format!(" {label}  "), styles::text_muted(p)));
        }

        if self.pending > 0 {
            spans.push(Span::styled(
                format!("● {} running", self.pending),
                styles::accent(p),
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(p.deepest_bg))
            .render(area, buf);
    }
}
