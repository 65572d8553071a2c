//! Layout calculations for the Fireside TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout areas shared by both tabs
pub struct AppLayout {
    pub title_area: Rect,
    pub body_area: Rect,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,
}

impl AppLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(8),    // Tab body
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Hotkey bar
            ])
            .split(area);

        Self {
            title_area: chunks[0],
            body_area: chunks[1],
            status_bar: chunks[2],
            hotkey_bar: chunks[3],
        }
    }
}

/// Hearth tab: the ingredient form beside the story pane
pub struct HearthLayout {
    pub form_area: Rect,
    pub story_area: Rect,
}

impl HearthLayout {
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        Self {
            form_area: chunks[0],
            story_area: chunks[1],
        }
    }
}

/// Archive tab: the record list beside the detail pane
pub struct ArchiveLayout {
    pub list_area: Rect,
    pub detail_area: Rect,
}

impl ArchiveLayout {
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        Self {
            list_area: chunks[0],
            detail_area: chunks[1],
        }
    }
}

/// Calculate fixed-size centered popup
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
