//! Layout management and calculations

use crate::constants::{FILTER_PANEL_HEIGHT, STATS_PANEL_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

/// Screen areas of the main view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub form: Rect,
    pub stats: Rect,
    pub filter: Rect,
    pub tasks: Rect,
    pub status: Rect,
}

impl LayoutManager {
    /// Split the screen: form and stats on the left, filter and tasks on the
    /// right, one status line at the bottom
    #[must_use]
    pub fn main_areas(area: Rect, form_width: u16) -> MainAreas {
        let [body, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        // Form never takes more than half the screen
        let form_width = form_width.min(body.width / 2);
        let [left, right] = Layout::horizontal([Constraint::Length(form_width), Constraint::Min(0)]).areas(body);

        let [form, stats] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(STATS_PANEL_HEIGHT)]).areas(left);
        let [filter, tasks] =
            Layout::vertical([Constraint::Length(FILTER_PANEL_HEIGHT), Constraint::Min(0)]).areas(right);

        MainAreas {
            form,
            stats,
            filter,
            tasks,
            status,
        }
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}
