// src/ui/widgets/sidebar.rs

use crate::app::{App, SIDEBAR_ROUTES};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

/// Renders the navigation sidebar. The active entry is picked by exact
/// path match, so `/scan/abc123` highlights nothing even though it shares
/// a prefix with `/scan`.
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let active_path = app.route.path();

    let items: Vec<ListItem> = SIDEBAR_ROUTES
        .iter()
        .enumerate()
        .map(|(index, route)| {
            let key = if index == 9 { 0 } else { index + 1 };
            let selected = route.path() == active_path;
            let style = if selected {
                Style::new().bold().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("[{key}] "), Style::default().fg(Color::DarkGray)),
                Span::styled(route.title(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Argus"));
    frame.render_widget(list, area);
}
