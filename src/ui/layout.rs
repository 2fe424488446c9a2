//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Query line on top, package list in the middle, status bar at the bottom.
pub struct AppLayout {
    pub query_area: Rect,
    pub list_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // query / placeholder
                Constraint::Min(3),    // list (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            query_area: chunks[0],
            list_area: chunks[1],
            status_area: chunks[2],
        }
    }
}
