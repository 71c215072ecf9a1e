// src/ui/widgets/filter_bar.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the filter bar: free-text search plus the severity and status
/// selectors. All three recompute the view live; none of them touches the
/// loaded snapshot.
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let filters = &app.browser.filters;

    let search_style = if app.browser.search_focus {
        Style::new().bold().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let severity_label = filters
        .severity
        .map(|s| s.label())
        .unwrap_or_else(|| "ALL".to_string());
    let status_label = filters
        .status
        .map(|s| s.label())
        .unwrap_or_else(|| "ALL".to_string());

    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
        Span::styled(filters.search.clone(), search_style),
        Span::styled(
            if app.browser.search_focus { "_" } else { "" },
            search_style,
        ),
        Span::raw("   "),
        Span::styled("Severity: ", Style::default().fg(Color::DarkGray)),
        Span::raw(severity_label),
        Span::raw("   "),
        Span::styled("Status: ", Style::default().fg(Color::DarkGray)),
        Span::raw(status_label),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Filters ([/] search, [s] severity, [t] status)");
    frame.render_widget(Paragraph::new(line).block(block), area);
}
