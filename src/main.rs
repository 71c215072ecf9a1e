// src/main.rs

use color_eyre::eyre::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;

mod app;
mod config;
mod core;
mod logging;
mod ui;

use app::{App, ExportStatus, LoadState, Route, SIDEBAR_ROUTES};
use config::Config;
use crate::core::api::ApiClient;
use crate::core::models::Vulnerability;
use crate::core::wizard::{ConfigField, WizardStep};

/// Responses flowing back from spawned network tasks into the event loop.
/// Each carries the generation of the view that issued the request, so
/// responses landing on a defunct view are silently dropped.
enum NetMessage {
    ScanSubmitted {
        generation: u64,
        result: Result<String, String>,
    },
    VulnsFetched {
        generation: u64,
        result: Result<Vec<Vulnerability>, String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    let config = Config::from_env()?;
    let client = ApiClient::new(config.api_base.clone())?;

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel::<NetMessage>(8);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &config, &client, &tx)?;
        }

        while let Ok(message) = rx.try_recv() {
            match message {
                NetMessage::ScanSubmitted { generation, result } => {
                    app.apply_submit_result(generation, result);
                }
                NetMessage::VulnsFetched { generation, result } => {
                    app.apply_fetch_result(generation, result);
                }
            }
        }
    }

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Single event handler, dispatching by route so each view owns its keys.
fn handle_events(
    app: &mut App,
    config: &Config,
    client: &ApiClient,
    tx: &mpsc::Sender<NetMessage>,
) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
            match app.route.clone() {
                Route::NewScan => handle_wizard_key(app, key.code, client, tx),
                Route::Vulnerabilities => handle_browser_key(app, config, key.code, client, tx),
                _ => handle_global_key(app, key.code, client, tx),
            }
        }
    }
    Ok(())
}

/// Keys available on the passive views (dashboard, reports, settings,
/// per-scanner pages, scan detail).
fn handle_global_key(
    app: &mut App,
    key_code: KeyCode,
    client: &ApiClient,
    tx: &mpsc::Sender<NetMessage>,
) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char(c) => try_route_key(app, c, client, tx),
        _ => {}
    }
}

/// Maps the number row onto the sidebar entries.
fn try_route_key(app: &mut App, c: char, client: &ApiClient, tx: &mpsc::Sender<NetMessage>) {
    let index = match c {
        '1'..='9' => (c as usize) - ('1' as usize),
        '0' => 9,
        _ => return,
    };
    if let Some(route) = SIDEBAR_ROUTES.get(index) {
        navigate(app, route.clone(), client, tx);
    }
}

/// Performs a route switch and spawns the vulnerability fetch when the
/// browser view was mounted. Exactly one fetch per mount.
fn navigate(app: &mut App, route: Route, client: &ApiClient, tx: &mpsc::Sender<NetMessage>) {
    if app.navigate(route) {
        spawn_fetch(app.browser_gen, client, tx);
    }
}

fn spawn_fetch(generation: u64, client: &ApiClient, tx: &mpsc::Sender<NetMessage>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client
            .fetch_vulnerabilities()
            .await
            .map_err(|e| e.to_string());
        let _ = tx.send(NetMessage::VulnsFetched { generation, result }).await;
    });
}

/// Key handling for the scan wizard, per step.
fn handle_wizard_key(
    app: &mut App,
    key_code: KeyCode,
    client: &ApiClient,
    tx: &mpsc::Sender<NetMessage>,
) {
    match app.wizard.step {
        WizardStep::SelectType => {
            let entries = core::catalog::entries();
            match key_code {
                KeyCode::Char('q') => app.quit(),
                KeyCode::Up => {
                    app.wizard.type_cursor = app.wizard.type_cursor.saturating_sub(1);
                }
                KeyCode::Down => {
                    if app.wizard.type_cursor + 1 < entries.len() {
                        app.wizard.type_cursor += 1;
                    }
                }
                KeyCode::Enter => {
                    let scan_type = entries[app.wizard.type_cursor].scan_type;
                    app.wizard.select_type(scan_type);
                    app.wizard.next();
                }
                KeyCode::Char(c) => try_route_key(app, c, client, tx),
                _ => {}
            }
        }
        WizardStep::ConfigureTarget => handle_configure_key(app, key_code),
        WizardStep::Review => match key_code {
            KeyCode::Char('q') => app.quit(),
            KeyCode::Esc | KeyCode::Char('b') => app.wizard.back(),
            KeyCode::Enter => {
                if let Some(request) = app.wizard.begin_submit() {
                    let generation = app.wizard_gen;
                    let client = client.clone();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let result = client
                            .submit_scan(&request)
                            .await
                            .map(|response| response.scan_id)
                            .map_err(|e| e.to_string());
                        let _ = tx
                            .send(NetMessage::ScanSubmitted { generation, result })
                            .await;
                    });
                }
            }
            KeyCode::Char(c) => try_route_key(app, c, client, tx),
            _ => {}
        },
    }
}

/// The configure step mixes text fields with selectors, so printable keys
/// belong to the focused field and navigation happens on Tab/Esc only.
fn handle_configure_key(app: &mut App, key_code: KeyCode) {
    let wizard = &mut app.wizard;
    match key_code {
        KeyCode::Tab => wizard.focus = wizard.focus.next(),
        KeyCode::BackTab => wizard.focus = wizard.focus.prev(),
        KeyCode::Esc => wizard.back(),
        KeyCode::Enter => wizard.next(),
        KeyCode::Char(c) => match wizard.focus {
            ConfigField::Target => wizard.target.push(c),
            ConfigField::Timeout => wizard.options.timeout.push(c),
            ConfigField::Concurrent => wizard.options.concurrent.push(c),
            ConfigField::Tools => {
                if c == ' ' {
                    if let Some(scan_type) = wizard.scan_type {
                        let tools = core::catalog::info_for(scan_type).default_tools;
                        if let Some(tool) = tools.get(wizard.tool_cursor) {
                            wizard.toggle_tool(tool);
                        }
                    }
                }
            }
            ConfigField::Depth => {}
        },
        KeyCode::Backspace => match wizard.focus {
            ConfigField::Target => {
                wizard.target.pop();
            }
            ConfigField::Timeout => {
                wizard.options.timeout.pop();
            }
            ConfigField::Concurrent => {
                wizard.options.concurrent.pop();
            }
            _ => {}
        },
        KeyCode::Up => {
            if wizard.focus == ConfigField::Tools {
                wizard.tool_cursor = wizard.tool_cursor.saturating_sub(1);
            }
        }
        KeyCode::Down => {
            if wizard.focus == ConfigField::Tools {
                if let Some(scan_type) = wizard.scan_type {
                    let count = core::catalog::info_for(scan_type).default_tools.len();
                    if wizard.tool_cursor + 1 < count {
                        wizard.tool_cursor += 1;
                    }
                }
            }
        }
        KeyCode::Left | KeyCode::Right => {
            if wizard.focus == ConfigField::Depth {
                wizard.options.depth = if key_code == KeyCode::Left {
                    wizard.options.depth.prev()
                } else {
                    wizard.options.depth.next()
                };
            }
        }
        _ => {}
    }
}

/// Key handling for the vulnerability browser.
fn handle_browser_key(
    app: &mut App,
    config: &Config,
    key_code: KeyCode,
    client: &ApiClient,
    tx: &mpsc::Sender<NetMessage>,
) {
    if app.browser.search_focus {
        match key_code {
            KeyCode::Esc | KeyCode::Enter => app.browser.search_focus = false,
            KeyCode::Char(c) => {
                app.browser.filters.search.push(c);
                app.browser.clamp_cursor();
            }
            KeyCode::Backspace => {
                app.browser.filters.search.pop();
                app.browser.clamp_cursor();
            }
            _ => {}
        }
        return;
    }

    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('/') => app.browser.search_focus = true,
        KeyCode::Char('s') => {
            app.browser.filters.cycle_severity();
            app.browser.clamp_cursor();
        }
        KeyCode::Char('t') => {
            app.browser.filters.cycle_status();
            app.browser.clamp_cursor();
        }
        KeyCode::Char('e') => export_filtered(app, config),
        KeyCode::Char('r') => {
            // Manual retry after a failed load; remounts the view.
            if matches!(app.browser.load, LoadState::Error(_)) {
                navigate(app, Route::Vulnerabilities, client, tx);
            }
        }
        KeyCode::Up => app.browser.move_up(),
        KeyCode::Down => app.browser.move_down(),
        KeyCode::Enter => app.browser.toggle_expanded(),
        KeyCode::Char(c) => try_route_key(app, c, client, tx),
        _ => {}
    }
}

/// Exports the currently filtered view; never the unfiltered snapshot.
fn export_filtered(app: &mut App, config: &Config) {
    let filtered = app.browser.filtered();
    if !matches!(app.browser.load, LoadState::Loaded(_)) {
        return;
    }
    let outcome = core::export::write_export(&config.export_dir, &filtered, chrono::Utc::now());
    app.export_status = match outcome {
        Ok(path) => ExportStatus::Success(format!("Exported to {}", path.display())),
        Err(message) => ExportStatus::Error(message),
    };
}
