// src/ui/widgets/wizard.rs

use crate::app::App;
use crate::core::catalog;
use crate::core::wizard::{ConfigField, SubmitState, Wizard, WizardStep};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

const STEP_LABELS: [&str; 3] = ["Select Scan Type", "Configure Options", "Review & Start"];

/// Renders the three-step scan wizard into the content area.
pub fn render_wizard(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("New Vulnerability Scan");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Stepper header
            Constraint::Length(1), // Error banner
            Constraint::Min(0),    // Step content
        ])
        .split(inner);

    render_stepper(frame, &app.wizard, chunks[0]);
    render_error_banner(frame, &app.wizard, chunks[1]);

    match app.wizard.step {
        WizardStep::SelectType => render_select_type(frame, &mut app.wizard, chunks[2]),
        WizardStep::ConfigureTarget => render_configure(frame, &app.wizard, chunks[2]),
        WizardStep::Review => render_review(frame, &app.wizard, chunks[2]),
    }
}

fn render_stepper(frame: &mut Frame, wizard: &Wizard, area: Rect) {
    let active = match wizard.step {
        WizardStep::SelectType => 0,
        WizardStep::ConfigureTarget => 1,
        WizardStep::Review => 2,
    };
    let mut spans = Vec::new();
    for (index, label) in STEP_LABELS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
        }
        let style = if index == active {
            Style::new().bold().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(*label, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_error_banner(frame: &mut Frame, wizard: &Wizard, area: Rect) {
    if let Some(error) = &wizard.error {
        let banner = Paragraph::new(Line::from(error.as_str()))
            .style(Style::new().bold().fg(Color::White).bg(Color::Red));
        frame.render_widget(banner, area);
    }
}

fn render_select_type(frame: &mut Frame, wizard: &mut Wizard, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    let items: Vec<ListItem> = catalog::entries()
        .iter()
        .map(|entry| {
            let marker = if wizard.scan_type == Some(entry.scan_type) {
                "(x) "
            } else {
                "( ) "
            };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::raw(entry.label),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Scan Type"))
        .highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    let mut state = ListState::default();
    state.select(Some(wizard.type_cursor));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    // Description of the highlighted type, like the hint under the original
    // dropdown.
    if let Some(entry) = catalog::entries().get(wizard.type_cursor) {
        let description = Paragraph::new(entry.description)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        frame.render_widget(description, chunks[1]);
    }
}

fn render_configure(frame: &mut Frame, wizard: &Wizard, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Target
            Constraint::Length(4), // Tools
            Constraint::Length(3), // Depth / Timeout / Concurrent row
            Constraint::Min(0),
        ])
        .split(area);

    let placeholder = wizard
        .scan_type
        .map(|t| catalog::info_for(t).placeholder)
        .unwrap_or("Enter target");
    render_text_field(
        frame,
        "Target",
        &wizard.target,
        placeholder,
        wizard.focus == ConfigField::Target,
        chunks[0],
    );

    render_tools(frame, wizard, chunks[1]);

    let option_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[2]);

    let depth_focused = wizard.focus == ConfigField::Depth;
    let depth_value = format!("< {} >", wizard.options.depth);
    render_value_field(frame, "Scan Depth", &depth_value, depth_focused, option_chunks[0]);
    render_text_field(
        frame,
        "Timeout (seconds)",
        &wizard.options.timeout,
        "300",
        wizard.focus == ConfigField::Timeout,
        option_chunks[1],
    );
    render_text_field(
        frame,
        "Concurrent Scans",
        &wizard.options.concurrent,
        "10",
        wizard.focus == ConfigField::Concurrent,
        option_chunks[2],
    );
}

fn render_tools(frame: &mut Frame, wizard: &Wizard, area: Rect) {
    let focused = wizard.focus == ConfigField::Tools;
    let block = field_block("Selected Tools", focused);

    let mut lines = Vec::new();
    if let Some(scan_type) = wizard.scan_type {
        for (index, tool) in catalog::info_for(scan_type).default_tools.iter().enumerate() {
            let selected = wizard.tools.iter().any(|t| t == tool);
            let marker = if selected { "[x] " } else { "[ ] " };
            let style = if focused && index == wizard.tool_cursor {
                Style::new().bold().fg(Color::Yellow)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(format!("{marker}{tool}"), style)));
        }
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_review(frame: &mut Frame, wizard: &Wizard, area: Rect) {
    let type_label = wizard
        .scan_type
        .map(|t| catalog::info_for(t).label)
        .unwrap_or("-");

    let mut lines = vec![
        Line::from(Span::styled(
            "Scan Configuration Summary",
            Style::new().bold(),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("Type:   ", Style::new().bold()), Span::raw(type_label)]),
        Line::from(vec![
            Span::styled("Target: ", Style::new().bold()),
            Span::raw(wizard.target.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Tools:  ", Style::new().bold()),
            Span::raw(wizard.tools.join(", ")),
        ]),
        Line::from(""),
        Line::from(Span::styled("Options:", Style::new().bold())),
        Line::from(format!("  - Scan Depth: {}", wizard.options.depth)),
        Line::from(format!("  - Timeout: {} seconds", wizard.options.timeout)),
        Line::from(format!("  - Concurrent Scans: {}", wizard.options.concurrent)),
        Line::from(""),
    ];

    // The submit control, disabled while invalid or in flight.
    let submit_line = match &wizard.submit {
        SubmitState::InFlight => {
            Line::from(Span::styled("Submitting...", Style::default().fg(Color::Cyan)))
        }
        _ if wizard.can_submit() => Line::from(vec![
            Span::styled("[ Start Scan ]", Style::new().bold().fg(Color::Green)),
            Span::raw("  press Enter"),
        ]),
        _ => Line::from(Span::styled(
            "[ Start Scan ] (disabled - missing required fields)",
            Style::default().fg(Color::DarkGray),
        )),
    };
    lines.push(submit_line);

    let block = Block::default().borders(Borders::ALL).title("Review");
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(border_style)
}

fn render_text_field(
    frame: &mut Frame,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    area: Rect,
) {
    let block = field_block(title, focused);
    let paragraph = if value.is_empty() {
        Paragraph::new(placeholder).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(value)
    };
    frame.render_widget(paragraph.block(block), area);

    if focused {
        frame.set_cursor_position(Position::new(
            area.x + value.chars().count() as u16 + 1,
            area.y + 1,
        ));
    }
}

fn render_value_field(frame: &mut Frame, title: &str, value: &str, focused: bool, area: Rect) {
    let block = field_block(title, focused);
    frame.render_widget(Paragraph::new(value).block(block), area);
}
