//! Toast overlay: live notifications stacked in the bottom-right corner

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use tokio::time::Instant;

use cyberusb_app::toast::{ToastPhase, ToastStack};

use crate::layout;
use crate::theme::{styles, Palette};

pub struct ToastOverlay<'a> {
    toasts: &'a ToastStack,
    now: Instant,
    palette: &'a Palette,
}

impl<'a> ToastOverlay<'a> {
    pub fn new(toasts: &'a ToastStack, now: Instant, palette: &'a Palette) -> Self {
        Self {
            toasts,
            now,
            palette,
        }
    }
}

impl Widget for ToastOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;

        // Newest toast sits at the bottom of the stack
        let live = self
            .toasts
            .iter()
            .rev()
            .filter(|t| t.phase(self.now) != ToastPhase::Expired);

        for (slot, toast) in live.enumerate() {
            let Some(rect) = layout::toast_slot(area, slot) else {
                break;
            };

            let color = styles::severity_color(p, toast.severity);
            let mut text_style = styles::text_primary(p);
            let mut border_style = styles::severity_style(p, toast.severity);
            if matches!(
                toast.phase(self.now),
                ToastPhase::Entering | ToastPhase::Exiting
            ) {
                text_style = text_style.add_modifier(Modifier::DIM);
                border_style = border_style.add_modifier(Modifier::DIM);
            }

            Clear.render(rect, buf);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .style(Style::default().bg(p.popup_bg));
            let line = Line::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::styled(toast.message.clone(), text_style),
            ]);
            Paragraph::new(line).block(block).render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;
    use cyberusb_core::Severity;

    #[tokio::test(start_paused = true)]
    async fn test_toasts_stack_newest_at_bottom() {
        let now = Instant::now();
        let mut stack = ToastStack::new(None);
        stack.notify("cleanup completed", Severity::Success, now);
        stack.notify("firewall completed", Severity::Info, now);

        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(ToastOverlay::new(&stack, now, &DARK), area);

        let content = term.content();
        let cleanup_row = content
            .lines()
            .position(|l| l.contains("cleanup completed"))
            .expect("cleanup toast");
        let firewall_row = content
            .lines()
            .position(|l| l.contains("firewall completed"))
            .expect("firewall toast");
        assert!(firewall_row > cleanup_row);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_toasts_not_drawn() {
        let start = Instant::now();
        let mut stack = ToastStack::new(None);
        stack.notify("Logs saved", Severity::Success, start);

        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(
            ToastOverlay::new(&stack, start + Duration::from_millis(3000), &DARK),
            area,
        );
        assert!(!term.buffer_contains("Logs saved"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_entering_toast_is_dimmed() {
        let start = Instant::now();
        let mut stack = ToastStack::new(None);
        stack.notify("Logs saved", Severity::Success, start);

        let mut term = TestTerminal::new();
        let area = term.area();
        term.render_widget(ToastOverlay::new(&stack, start, &DARK), area);

        let slot = layout::toast_slot(area, 0).expect("slot");
        let cell = &term.buffer()[(slot.x + 3, slot.y + 1)];
        assert!(cell.modifier.contains(Modifier::DIM));

        term.render_widget(
            ToastOverlay::new(&stack, start + Duration::from_millis(1000), &DARK),
            area,
        );
        let cell = &term.buffer()[(slot.x + 3, slot.y + 1)];
        assert!(!cell.modifier.contains(Modifier::DIM));
    }
}
