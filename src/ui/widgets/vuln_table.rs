// src/ui/widgets/vuln_table.rs

use crate::app::{App, LoadState};
use crate::core::models::{Severity, Status, Vulnerability};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::filter_bar;

/// Renders the whole vulnerability browser: filter bar on top, then the
/// result of the load state machine - a loading notice, an inline error
/// banner with no partial rows, or the filtered table.
pub fn render_browser(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    filter_bar::render_filter_bar(frame, app, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Vulnerabilities ([Enter] expand, [e] export)");

    match &app.browser.load {
        LoadState::Loading => {
            let notice = Paragraph::new("Loading vulnerabilities...")
                .style(Style::default().fg(Color::Cyan))
                .block(block);
            frame.render_widget(notice, chunks[1]);
        }
        LoadState::Error(message) => {
            let banner = Paragraph::new(Line::from(vec![
                Span::styled("Error: ", Style::new().bold().fg(Color::Red)),
                Span::raw(message.as_str()),
                Span::raw("  press [r] to retry"),
            ]))
            .block(block)
            .wrap(Wrap { trim: true });
            frame.render_widget(banner, chunks[1]);
        }
        LoadState::Loaded(_) => {
            let filtered = app.browser.filtered();
            if filtered.is_empty() {
                let empty = Paragraph::new("No vulnerabilities match the current filters.")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block);
                frame.render_widget(empty, chunks[1]);
                return;
            }

            let items: Vec<ListItem> = filtered
                .iter()
                .map(|vuln| row_item(vuln, app.browser.expanded.contains(&vuln.id)))
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
            let mut state = ListState::default();
            state.select(Some(app.browser.cursor));
            frame.render_stateful_widget(list, chunks[1], &mut state);
        }
    }
}

/// One table row, with its detail panel folded in when expanded.
fn row_item(vuln: &Vulnerability, expanded: bool) -> ListItem<'static> {
    let arrow = if expanded { "v " } else { "> " };
    let mut lines = vec![Line::from(vec![
        Span::raw(arrow.to_string()),
        severity_chip(vuln.severity),
        Span::raw(" "),
        Span::styled(vuln.title.clone(), Style::new().bold()),
        Span::styled(
            format!("  {} | {} | {}  ", vuln.kind, vuln.target, vuln.tool),
            Style::default().fg(Color::DarkGray),
        ),
        status_chip(vuln.status),
    ])];

    if expanded {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::raw(format!("    {}", vuln.description))));
        if let Some(recommendations) = &vuln.ai_recommendations {
            lines.push(Line::from(Span::styled(
                "    AI Recommendations",
                Style::new().bold().fg(Color::Cyan),
            )));
            for (index, recommendation) in recommendations.iter().enumerate() {
                lines.push(Line::from(Span::styled(
                    format!("    {}. {}", index + 1, recommendation),
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        if let Some(details) = &vuln.details {
            lines.push(Line::from(Span::styled(
                "    Technical Details",
                Style::new().bold(),
            )));
            let pretty =
                serde_json::to_string_pretty(details).unwrap_or_else(|_| details.to_string());
            for detail_line in pretty.lines() {
                lines.push(Line::from(Span::styled(
                    format!("    {detail_line}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
        lines.push(Line::from(""));
    }

    ListItem::new(Text::from(lines))
}

fn severity_chip(severity: Severity) -> Span<'static> {
    let color = match severity {
        Severity::Critical | Severity::High => Color::Red,
        Severity::Medium => Color::Yellow,
        Severity::Low => Color::Cyan,
        Severity::Info => Color::DarkGray,
    };
    Span::styled(format!("[{}]", severity.label()), Style::new().bold().fg(color))
}

fn status_chip(status: Status) -> Span<'static> {
    let color = match status {
        Status::Resolved => Color::Green,
        Status::InProgress => Color::Yellow,
        Status::FalsePositive => Color::DarkGray,
        Status::Open => Color::Red,
    };
    Span::styled(format!("[{}]", status.label()), Style::default().fg(color))
}
