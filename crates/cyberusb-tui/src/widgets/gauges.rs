//! Resource gauges: CPU, memory and disk utilization bars

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

use cyberusb_core::GaugeReading;

use crate::theme::{styles, Palette};

pub struct ResourceGauges<'a> {
    reading: Option<GaugeReading>,
    palette: &'a Palette,
}

impl<'a> ResourceGauges<'a> {
    pub fn new(reading: Option<GaugeReading>, palette: &'a Palette) -> Self {
        Self { reading, palette }
    }

    fn render_gauge(&self, label: &str, percent: Option<u8>, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let [label_row, bar_row] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let value = match percent {
            Some(v) => format!("{v}%"),
            None => "--".to_string(),
        };
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{label:<8}"), styles::text_secondary(p)),
            Span::styled(value, styles::text_primary(p)),
        ]))
        .render(label_row, buf);

        let percent = percent.unwrap_or(0);
        Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(styles::gauge_color(p, percent))
                    .bg(p.deepest_bg),
            )
            .ratio(GaugeReading::ratio(percent))
            .label("")
            .render(bar_row, buf);
    }
}

impl Widget for ResourceGauges<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false)
            .title(" System Status ")
            .title_style(styles::accent_bold(self.palette));
        let inner = block.inner(area);
        block.render(area, buf);

        // Two rows per gauge plus a spacer between them
        if inner.height < 8 || inner.width < 12 {
            return;
        }

        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };
        let [cpu, _, memory, _, disk] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(inner);

        let reading = self.reading;
        self.render_gauge("CPU", reading.map(|r| r.cpu), cpu, buf);
        self.render_gauge("Memory", reading.map(|r| r.memory), memory, buf);
        self.render_gauge("Disk", reading.map(|r| r.disk), disk, buf);
    }
}
