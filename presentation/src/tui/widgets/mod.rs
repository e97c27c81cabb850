//! TUI widgets — ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Tabs (1) ──────────────────────────────────────┤
//! ├── Form (60%) ────────────┬── Result (40%) ───────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod form;
pub mod header;
pub mod help;
pub mod result_card;
pub mod status_bar;
pub mod tab_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub tab_bar: Rect,
    pub form: Rect,
    pub result: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(vertical[2]);

        Self {
            header: vertical[0],
            tab_bar: vertical[1],
            form: horizontal[0],
            result: horizontal[1],
            status_bar: vertical[3],
        }
    }

    /// Centered overlay rectangle for help dialog
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions() {
        let layout = MainLayout::compute(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.tab_bar.height, 1);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 39);
        assert_eq!(layout.form.height, 35);
        assert_eq!(layout.form.width, 60);
        assert_eq!(layout.result.x, 60);
    }

    #[test]
    fn test_centered_overlay_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let overlay = MainLayout::centered_overlay(60, 50, area);
        assert!(overlay.x > 0 && overlay.y > 0);
        assert!(overlay.right() < area.right());
        assert!(overlay.bottom() < area.bottom());
    }
}
