//! Settings panel: read-only summary of the effective configuration

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use cyberusb_app::config::{Settings, UnknownActionPolicy};
use cyberusb_app::state::SystemInfo;

use crate::theme::{styles, Palette};

pub struct SettingsSummary<'a> {
    settings: &'a Settings,
    system: &'a SystemInfo,
    dark_mode: bool,
    palette: &'a Palette,
}

impl<'a> SettingsSummary<'a> {
    pub fn new(
        settings: &'a Settings,
        system: &'a SystemInfo,
        dark_mode: bool,
        palette: &'a Palette,
    ) -> Self {
        Self {
            settings,
            system,
            dark_mode,
            palette,
        }
    }

    fn row(&self, key: &str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!(" {key:<22}"), styles::text_secondary(self.palette)),
            Span::styled(value, styles::text_primary(self.palette)),
        ])
    }

    fn heading(&self, text: &str) -> Line<'static> {
        Line::from(Span::styled(format!(" {text}"), styles::accent_bold(self.palette)))
    }
}

fn millis(ms: u64) -> String {
    format!("{ms} ms")
}

impl Widget for SettingsSummary<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false)
            .title(" Settings ")
            .title_style(styles::accent_bold(self.palette));

        let timing = &self.settings.timing;
        let policy = match self.settings.behavior.unknown_action {
            UnknownActionPolicy::Ignore => "ignore",
            UnknownActionPolicy::Report => "report",
        };
        let max_toasts = self
            .settings
            .ui
            .max_toasts
            .map(|n| n.to_string())
            .unwrap_or_else(|| "unlimited".to_string());

        let lines = vec![
            self.heading("Appearance"),
            self.row(
                "Theme",
                if self.dark_mode { "dark" } else { "light" }.to_string(),
            ),
            self.row("Max toasts", max_toasts),
            Line::from(""),
            self.heading("System"),
            self.row("Platform", self.system.platform.to_string()),
            self.row("Architecture", self.system.arch.clone()),
            self.row("Identity", self.system.identity.clone()),
            Line::from(""),
            self.heading("Timing"),
            self.row("Clock refresh", millis(timing.clock_interval_ms)),
            self.row("Gauge refresh", millis(timing.gauge_interval_ms)),
            self.row("Quick action delay", millis(timing.quick_action_delay_ms)),
            self.row("Tool delay", millis(timing.tool_delay_ms)),
            self.row("Save logs delay", millis(timing.save_logs_delay_ms)),
            self.row("Phishing delay", millis(timing.phishing_delay_ms)),
            Line::from(""),
            self.heading("Behavior"),
            self.row("Unknown actions", policy.to_string()),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
