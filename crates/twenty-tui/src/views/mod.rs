//! Screen layout and panel rendering.

pub mod actions;
pub mod input;
pub mod output;
pub mod sidebar;

use ratatui::prelude::*;

/// Screen regions, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// Title bar.
    pub title: Rect,
    /// Two rows of buttons.
    pub actions: Rect,
    /// Transcript panel.
    pub output: Rect,
    /// Settings and status panel.
    pub sidebar: Rect,
    /// Input line.
    pub input: Rect,
    /// Key hints.
    pub status: Rect,
}

/// Split the screen into regions.
pub fn layout(area: Rect) -> Regions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(2), // Actions
            Constraint::Min(5),    // Content
            Constraint::Length(3), // Input
            Constraint::Length(1), // Status
        ])
        .split(area);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(rows[2]);

    Regions {
        title: rows[0],
        actions: rows[1],
        output: content[0],
        sidebar: content[1],
        input: rows[3],
        status: rows[4],
    }
}
