//! Console panel widget and the dashboard's recent activity feed

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthStr;

use cyberusb_core::ConsoleEntry;

use crate::theme::{styles, Palette};

use super::LogViewState;

fn entry_line(entry: &ConsoleEntry, palette: &Palette) -> Line<'static> {
    let color = styles::severity_style(palette, entry.severity);
    Line::from(vec![
        Span::styled(
            format!("[{}] ", entry.formatted_time()),
            styles::text_muted(palette),
        ),
        Span::styled(format!("{} ", entry.severity.prefix()), color),
        Span::styled(entry.message.clone(), styles::text_primary(palette)),
    ])
}

/// Scrollable view over every console entry
pub struct ConsoleView<'a> {
    entries: &'a [ConsoleEntry],
    palette: &'a Palette,
}

impl<'a> ConsoleView<'a> {
    pub fn new(entries: &'a [ConsoleEntry], palette: &'a Palette) -> Self {
        Self { entries, palette }
    }
}

impl StatefulWidget for ConsoleView<'_> {
    type State = LogViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let p = self.palette;
        let block = styles::glass_block(p, false)
            .title(" Console ")
            .title_style(styles::accent_bold(p));
        let inner = block.inner(area);
        block.render(area, buf);

        let visible_lines = inner.height as usize;
        state.update_content_size(self.entries.len(), visible_lines);

        if inner.height == 0 {
            return;
        }

        if self.entries.is_empty() {
            Paragraph::new(Span::styled(" Console is empty", styles::text_muted(p)))
                .render(inner, buf);
            return;
        }

        let lines: Vec<Line> = self.entries[state.visible_range()]
            .iter()
            .map(|entry| entry_line(entry, p))
            .collect();
        Paragraph::new(lines).render(inner, buf);

        // Scroll position indicator on the top border
        if state.total_lines > state.visible_lines {
            let indicator = format!(
                " {}-{}/{} ",
                state.offset + 1,
                (state.offset + state.visible_lines).min(state.total_lines),
                state.total_lines
            );
            let width = indicator.width() as u16;
            if width + 2 < area.width {
                let x = area.x + area.width - width - 1;
                buf.set_string(x, area.y, indicator, styles::text_muted(p));
            }
        }
    }
}

/// Newest entries only, always pinned to the bottom
pub struct ActivityFeed<'a> {
    entries: &'a [ConsoleEntry],
    palette: &'a Palette,
}

impl<'a> ActivityFeed<'a> {
    pub fn new(entries: &'a [ConsoleEntry], palette: &'a Palette) -> Self {
        Self { entries, palette }
    }
}

impl Widget for ActivityFeed<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false)
            .title(" Recent Activity ")
            .title_style(styles::accent_bold(p));
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        if height == 0 {
            return;
        }

        let start = self.entries.len().saturating_sub(height);
        let lines: Vec<Line> = self.entries[start..]
            .iter()
            .map(|entry| entry_line(entry, p))
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}
