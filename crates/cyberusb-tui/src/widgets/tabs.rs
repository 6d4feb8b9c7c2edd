//! Navigation tabs widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Tabs, Widget},
};

use cyberusb_app::tabs::TabRouter;

use crate::theme::{styles, Palette};

/// Tab bar with the active tab highlighted and its number key shown
pub struct NavTabs<'a> {
    router: &'a TabRouter,
    palette: &'a Palette,
}

impl<'a> NavTabs<'a> {
    pub fn new(router: &'a TabRouter, palette: &'a Palette) -> Self {
        Self { router, palette }
    }
}

impl Widget for NavTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles: Vec<Line> = self
            .router
            .markers()
            .enumerate()
            .map(|(i, (tab, _))| Line::from(format!("{} {}", i + 1, tab.title())))
            .collect();

        Tabs::new(titles)
            .block(styles::glass_block(self.palette, true))
            .select(self.router.active().index())
            .style(styles::text_secondary(self.palette))
            .highlight_style(styles::focused_selected(self.palette))
            .divider("│")
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use cyberusb_core::TabId;

    #[test]
    fn test_all_tabs_rendered() {
        let router = TabRouter::default();
        let mut term = TestTerminal::new();
        term.render_widget(NavTabs::new(&router, &DARK), term.area());

        for tab in TabId::ALL {
            assert!(term.buffer_contains(tab.title()), "missing {}", tab.title());
        }
        assert!(term.buffer_contains("1 Dashboard"));
        assert!(term.buffer_contains("5 Settings"));
    }
}
