//! Selectable action cards of a panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use cyberusb_app::panel::PanelItem;

use crate::theme::{styles, Palette};

/// Vertical list of cards; the highlighted one is activated with Enter
pub struct ActionList<'a> {
    title: &'a str,
    items: &'a [PanelItem],
    selected: usize,
    palette: &'a Palette,
}

impl<'a> ActionList<'a> {
    pub fn new(
        title: &'a str,
        items: &'a [PanelItem],
        selected: usize,
        palette: &'a Palette,
    ) -> Self {
        Self {
            title,
            items,
            selected,
            palette,
        }
    }

    fn item_line(&self, index: usize, item: &PanelItem) -> Line<'static> {
        let p = self.palette;
        let hint = match item {
            PanelItem::Action(action) => format!("  {}", action.id),
            _ => String::new(),
        };

        if index == self.selected {
            Line::from(vec![
                Span::styled(format!(" ▶ {} ", item.title()), styles::focused_selected(p)),
                Span::styled(hint, styles::text_muted(p)),
            ])
        } else {
            Line::from(vec![
                Span::styled(format!("   {} ", item.title()), styles::text_primary(p)),
                Span::styled(hint, styles::text_muted(p)),
            ])
        }
    }
}

impl Widget for ActionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, true)
            .title(format!(" {} ", self.title))
            .title_style(styles::accent_bold(p));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.items.is_empty() {
            Paragraph::new(Span::styled(" Nothing to run here", styles::text_muted(p)))
                .render(inner, buf);
            return;
        }

        // Keep the highlighted card on screen
        let height = inner.height as usize;
        let skip = self.selected.saturating_sub(height.saturating_sub(1));
        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .skip(skip)
            .take(height)
            .map(|(i, item)| self.item_line(i, item))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use cyberusb_app::panel::items_for;
    use cyberusb_core::TabId;

    #[test]
    fn test_quick_action_cards_rendered() {
        let items = items_for(TabId::Dashboard);
        let mut term = TestTerminal::with_size(50, 8);
        term.render_widget(
            ActionList::new("Quick Actions", &items, 0, &DARK),
            term.area(),
        );

        assert!(term.buffer_contains("Quick Actions"));
        assert!(term.buffer_contains("System Cleanup"));
        assert!(term.buffer_contains("Network Scan"));
        assert!(term.buffer_contains("▶ System Cleanup"));
    }

    #[test]
    fn test_selected_card_is_marked() {
        let items = items_for(TabId::Security);
        let mut term = TestTerminal::with_size(50, 10);
        term.render_widget(ActionList::new("Security", &items, 2, &DARK), term.area());

        assert!(term.buffer_contains("▶ Password Audit"));
        assert!(!term.buffer_contains("▶ Threat Detection"));
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let items = items_for(TabId::Security);
        let mut term = TestTerminal::with_size(50, 4);
        term.render_widget(ActionList::new("Security", &items, 5, &DARK), term.area());

        assert!(term.buffer_contains("▶ Phishing Examples"));
    }

    #[test]
    fn test_empty_panel_placeholder() {
        let mut term = TestTerminal::with_size(40, 5);
        term.render_widget(ActionList::new("Settings", &[], 0, &DARK), term.area());
        assert!(term.buffer_contains("Nothing to run here"));
    }
}
