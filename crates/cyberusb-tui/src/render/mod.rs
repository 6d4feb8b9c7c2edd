//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use tokio::time::Instant;

use cyberusb_app::panel::{items_for, PanelItem};
use cyberusb_app::state::{AppState, UiMode};
use cyberusb_core::TabId;

use crate::layout;
use crate::theme::{palette, styles, Palette};
use crate::widgets;

/// Render the complete UI (View in TEA)
///
/// Only the console scroll state is mutated; it records the content and
/// viewport size seen during this frame.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    view_at(frame, state, Instant::now());
}

/// Render with an explicit clock for toast phases
pub fn view_at(frame: &mut Frame, state: &mut AppState, now: Instant) {
    let p = palette::for_mode(state.dark_mode);
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(p.deepest_bg)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(&state.system, &state.clock, p),
        areas.header,
    );
    frame.render_widget(widgets::NavTabs::new(&state.tabs, p), areas.tabs);

    let tab = state.active_tab();
    match tab {
        TabId::Dashboard => render_dashboard(frame, state, areas.body, p),
        TabId::Performance | TabId::Security => render_tools(frame, state, tab, areas.body, p),
        TabId::Console => render_console(frame, state, areas.body, p),
        TabId::Settings => frame.render_widget(
            widgets::SettingsSummary::new(&state.settings, &state.system, state.dark_mode, p),
            areas.body,
        ),
    }

    frame.render_widget(
        widgets::KeyHints::new(tab, state.tasks.pending_count(), p),
        areas.status,
    );

    frame.render_widget(widgets::ToastOverlay::new(&state.toasts, now, p), areas.body);

    if state.ui_mode == UiMode::About {
        frame.render_widget(widgets::AboutDialog::new(&state.system, p), area);
    }
}

fn render_dashboard(frame: &mut Frame, state: &AppState, body: Rect, p: &Palette) {
    let areas = layout::dashboard(body);
    let items = items_for(TabId::Dashboard);

    frame.render_widget(widgets::ResourceGauges::new(state.gauges, p), areas.gauges);
    frame.render_widget(
        widgets::ActionList::new(
            "Quick Actions",
            &items,
            state.selection.selected(TabId::Dashboard),
            p,
        ),
        areas.actions,
    );
    frame.render_widget(
        widgets::ActivityFeed::new(state.console.entries(), p),
        areas.activity,
    );
}

fn render_tools(frame: &mut Frame, state: &AppState, tab: TabId, body: Rect, p: &Palette) {
    let (list, activity) = layout::tools(body);
    let items = items_for(tab);
    let title = match tab {
        TabId::Performance => "Performance Tools",
        _ => "Security Tools",
    };

    frame.render_widget(
        widgets::ActionList::new(title, &items, state.selection.selected(tab), p),
        list,
    );
    frame.render_widget(
        widgets::ActivityFeed::new(state.console.entries(), p),
        activity,
    );
}

fn render_console(frame: &mut Frame, state: &mut AppState, body: Rect, p: &Palette) {
    let (buttons, log) = layout::console(body);
    let selected = state.selection.selected(TabId::Console);

    // Buttons sit side by side in a single row
    let mut spans = vec![Span::raw(" ")];
    for (i, item) in items_for(TabId::Console).iter().enumerate() {
        let style = if i == selected {
            styles::focused_selected(p)
        } else {
            styles::text_primary(p)
        };
        spans.push(Span::styled(format!(" {} ", button_label(item)), style));
        spans.push(Span::raw("  "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(styles::glass_block(p, true)),
        buttons,
    );

    frame.render_stateful_widget(
        widgets::ConsoleView::new(state.console.entries(), p),
        log,
        &mut state.console_view,
    );
}

fn button_label(item: &PanelItem) -> String {
    let key = match item {
        PanelItem::ClearConsole => "c",
        PanelItem::SaveLogs => "s",
        _ => return item.title().to_string(),
    };
    format!("{} [{}]", item.title(), key)
}
