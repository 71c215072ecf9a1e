// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Defines the areas of the application's user interface.
///
/// A fixed sidebar on the left lists the navigation routes, the content
/// area renders the active route, and a one-line footer at the bottom
/// shows keybinding hints and status messages.
pub struct AppLayout {
    pub sidebar: Rect,
    pub content: Rect,
    pub footer: Rect,
}

/// Splits the terminal frame into sidebar, content and footer regions.
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame_size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(vertical_chunks[0]);

    AppLayout {
        sidebar: horizontal_chunks[0],
        content: horizontal_chunks[1],
        footer: vertical_chunks[1],
    }
}
