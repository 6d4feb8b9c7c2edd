//! Screen layout definitions for the TUI
//!
//! The screen is a fixed stack: header, tab bar, panel body and a one-line
//! key hint bar. Panels split the body further.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;
/// Tab bar height: top border + tab row + bottom border
pub const TABS_HEIGHT: u16 = 3;
/// Height of one toast card
pub const TOAST_HEIGHT: u16 = 3;
/// Maximum width of a toast card
pub const TOAST_WIDTH: u16 = 36;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, OS label, architecture, clock
    pub header: Rect,
    /// Navigation tabs
    pub tabs: Rect,
    /// Active panel
    pub body: Rect,
    /// Key hints
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(TABS_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        status: chunks[3],
    }
}

/// Dashboard body: gauges and quick actions side by side over recent activity
#[derive(Debug, Clone, Copy)]
pub struct DashboardAreas {
    pub gauges: Rect,
    pub actions: Rect,
    pub activity: Rect,
}

pub fn dashboard(body: Rect) -> DashboardAreas {
    let [top, activity] =
        Layout::vertical([Constraint::Length(11), Constraint::Min(3)]).areas(body);
    let [gauges, actions] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(top);

    DashboardAreas {
        gauges,
        actions,
        activity,
    }
}

/// Tool panels: card list on the left, recent activity on the right
pub fn tools(body: Rect) -> (Rect, Rect) {
    let [list, activity] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(body);
    (list, activity)
}

/// Console panel: button row over the full log
pub fn console(body: Rect) -> (Rect, Rect) {
    let [buttons, log] = Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(body);
    (buttons, log)
}

/// Slot of the `index`-th toast, stacked upward from the bottom-right corner
/// of `area`. `None` once the stack no longer fits.
pub fn toast_slot(area: Rect, index: usize) -> Option<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    let offset = u16::try_from(index + 1).ok()?.checked_mul(TOAST_HEIGHT)?;
    if width == 0 || offset > area.height {
        return None;
    }
    Some(Rect::new(
        area.x + area.width - width,
        area.y + area.height - offset,
        width,
        TOAST_HEIGHT,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.tabs.y, 3);
        assert_eq!(layout.body.y, 6);
        assert_eq!(layout.body.height, 17);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 100, 40);
        let l = create(area);
        assert_eq!(
            l.header.height + l.tabs.height + l.body.height + l.status.height,
            area.height
        );
    }

    #[test]
    fn test_dashboard_split() {
        let body = Rect::new(0, 6, 80, 17);
        let areas = dashboard(body);
        assert_eq!(areas.gauges.height, 11);
        assert_eq!(areas.gauges.width + areas.actions.width, 80);
        assert_eq!(areas.activity.y, 17);
    }

    #[test]
    fn test_toast_slots_stack_upward() {
        let area = Rect::new(0, 0, 80, 10);
        let first = toast_slot(area, 0).unwrap();
        let second = toast_slot(area, 1).unwrap();
        assert_eq!(first, Rect::new(44, 7, 36, 3));
        assert_eq!(second.y, 4);
        assert!(toast_slot(area, 3).is_none());
    }

    #[test]
    fn test_toast_slot_narrow_area() {
        let area = Rect::new(5, 0, 20, 6);
        let slot = toast_slot(area, 0).unwrap();
        assert_eq!(slot.x, 5);
        assert_eq!(slot.width, 20);
    }
}
