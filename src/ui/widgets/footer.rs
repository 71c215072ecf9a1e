// src/ui/widgets/footer.rs

use crate::app::{App, ExportStatus, Route};
use crate::core::wizard::{SubmitState, WizardStep};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the footer widget, which displays available actions for the
/// current view, or the outcome of the last export.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    // Export feedback takes precedence over the key hints.
    match &app.export_status {
        ExportStatus::Success(message) => {
            let line = Line::from(Span::styled(message.clone(), Style::default().fg(Color::Green)));
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
            return;
        }
        ExportStatus::Error(message) => {
            let line = Line::from(Span::styled(message.clone(), Style::default().fg(Color::Red)));
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
            return;
        }
        ExportStatus::Idle => {}
    }

    let spans = match &app.route {
        Route::NewScan => match (&app.wizard.step, &app.wizard.submit) {
            (_, SubmitState::InFlight) => Line::from("Submitting scan... please wait."),
            (WizardStep::SelectType, _) => Line::from(vec![
                hint("↑↓"),
                Span::raw(" choose type, "),
                hint("Enter"),
                Span::raw(" next, "),
                hint("1-0"),
                Span::raw(" navigate, "),
                hint("Q"),
                Span::raw(" quit."),
            ]),
            (WizardStep::ConfigureTarget, _) => Line::from(vec![
                hint("Tab"),
                Span::raw(" switch field, "),
                hint("Space"),
                Span::raw(" toggle tool, "),
                hint("Enter"),
                Span::raw(" next, "),
                hint("Esc"),
                Span::raw(" back."),
            ]),
            (WizardStep::Review, _) => Line::from(vec![
                hint("Enter"),
                Span::raw(" start scan, "),
                hint("Esc"),
                Span::raw(" back, "),
                hint("1-0"),
                Span::raw(" navigate."),
            ]),
        },
        Route::Vulnerabilities => {
            if app.browser.search_focus {
                Line::from(vec![
                    Span::raw("Type to search, "),
                    hint("Esc"),
                    Span::raw(" done."),
                ])
            } else {
                Line::from(vec![
                    hint("/"),
                    Span::raw(" search, "),
                    hint("s"),
                    Span::raw("/"),
                    hint("t"),
                    Span::raw(" filters, "),
                    hint("Enter"),
                    Span::raw(" expand, "),
                    hint("e"),
                    Span::raw(" export, "),
                    hint("Q"),
                    Span::raw(" quit."),
                ])
            }
        }
        _ => Line::from(vec![
            hint("1-0"),
            Span::raw(" navigate, "),
            hint("Q"),
            Span::raw(" quit."),
        ]),
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

fn hint(key: &str) -> Span<'_> {
    Span::styled(key, Style::new().bold().fg(Color::Yellow))
}
