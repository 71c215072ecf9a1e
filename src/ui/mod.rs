// src/ui/mod.rs

use crate::app::{App, Route};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area());

    widgets::sidebar::render_sidebar(frame, app, layout.sidebar);

    match app.route.clone() {
        Route::NewScan => widgets::wizard::render_wizard(frame, app, layout.content),
        Route::Vulnerabilities => widgets::vuln_table::render_browser(frame, app, layout.content),
        Route::ScanDetail(scan_id) => render_scan_detail(frame, &scan_id, layout.content),
        other => render_placeholder(frame, &other, layout.content),
    }

    widgets::footer::render_footer(frame, app, layout.footer);
}

/// The landing view after a successful scan submission.
fn render_scan_detail(frame: &mut Frame, scan_id: &str, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Scan Started");
    let text = Text::from(vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("Scan "),
            Span::styled(scan_id.to_string(), Style::new().bold().fg(Color::Green)),
            Span::raw(" has been queued on the backend."),
        ]),
        Line::from(""),
        Line::from("Progress and results will appear under Vulnerabilities once the scanners report back."),
    ]);
    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Routes without dedicated content yet render a simple placeholder page.
fn render_placeholder(frame: &mut Frame, route: &Route, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(route.title());
    let text = match route {
        Route::Dashboard => {
            "Welcome to Argus.\n\nStart a scan with [2] or review findings with [3]."
        }
        _ => "Nothing to show here yet.",
    };
    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
