// src/app.rs

use crate::core::filters::FilterState;
use crate::core::models::{ScanType, Vulnerability};
use crate::core::wizard::{SubmitState, Wizard};
use std::collections::HashSet;

/// The fixed navigation surface. `ScanDetail` is reachable only through a
/// successful wizard submission; everything else is listed in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    NewScan,
    Vulnerabilities,
    Reports,
    Scanner(ScanType),
    Settings,
    ScanDetail(String),
}

impl Route {
    /// The route's path, used for exact-match highlighting in the sidebar.
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::NewScan => "/scan".to_string(),
            Route::Vulnerabilities => "/vulnerabilities".to_string(),
            Route::Reports => "/reports".to_string(),
            Route::Scanner(scan_type) => format!("/scanner/{scan_type}"),
            Route::Settings => "/settings".to_string(),
            Route::ScanDetail(id) => format!("/scan/{id}"),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Route::Dashboard => "Dashboard".to_string(),
            Route::NewScan => "New Scan".to_string(),
            Route::Vulnerabilities => "Vulnerabilities".to_string(),
            Route::Reports => "Reports".to_string(),
            Route::Scanner(ScanType::Web) => "Web Scanner".to_string(),
            Route::Scanner(ScanType::Mobile) => "Mobile Scanner".to_string(),
            Route::Scanner(ScanType::Api) => "API Scanner".to_string(),
            Route::Scanner(ScanType::Source) => "Source Code".to_string(),
            Route::Scanner(ScanType::SmartContract) => "Smart Contract".to_string(),
            Route::Scanner(ScanType::Blockchain) => "Blockchain".to_string(),
            Route::Settings => "Settings".to_string(),
            Route::ScanDetail(id) => format!("Scan {id}"),
        }
    }
}

/// Sidebar entries in presentation order; the number keys 1-9 and 0 map
/// onto this list.
pub const SIDEBAR_ROUTES: [Route; 10] = [
    Route::Dashboard,
    Route::NewScan,
    Route::Vulnerabilities,
    Route::Reports,
    Route::Scanner(ScanType::Web),
    Route::Scanner(ScanType::Mobile),
    Route::Scanner(ScanType::Api),
    Route::Scanner(ScanType::Source),
    Route::Scanner(ScanType::SmartContract),
    Route::Settings,
];

/// Result of the last export action, shown in the footer.
pub enum ExportStatus {
    Idle,
    Success(String),
    Error(String),
}

/// Observable states of the vulnerability fetch. No automatic retry or
/// polling: `Error` stays until the user reloads or re-enters the view.
pub enum LoadState {
    Loading,
    Loaded(Vec<Vulnerability>),
    Error(String),
}

/// State of the vulnerability browser view. The loaded list is an
/// immutable snapshot; filters only ever derive views over it.
pub struct BrowserState {
    pub load: LoadState,
    pub filters: FilterState,
    /// Cursor into the *filtered* view.
    pub cursor: usize,
    /// Ids of rows whose detail panel is open. Each row toggles
    /// independently.
    pub expanded: HashSet<String>,
    /// While true, printable keys go into the search box.
    pub search_focus: bool,
}

impl BrowserState {
    pub fn new() -> Self {
        Self {
            load: LoadState::Loading,
            filters: FilterState::default(),
            cursor: 0,
            expanded: HashSet::new(),
            search_focus: false,
        }
    }

    /// The filtered view over the snapshot; empty unless loaded.
    pub fn filtered(&self) -> Vec<&Vulnerability> {
        match &self.load {
            LoadState::Loaded(vulns) => self.filters.apply(vulns),
            _ => Vec::new(),
        }
    }

    /// Id of the row under the cursor, if any.
    pub fn selected_id(&self) -> Option<String> {
        self.filtered().get(self.cursor).map(|v| v.id.clone())
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let len = self.filtered().len();
        if len > 0 && self.cursor < len - 1 {
            self.cursor += 1;
        }
    }

    /// Keeps the cursor inside the filtered view after a filter change.
    pub fn clamp_cursor(&mut self) {
        let len = self.filtered().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn toggle_expanded(&mut self) {
        if let Some(id) = self.selected_id() {
            if !self.expanded.remove(&id) {
                self.expanded.insert(id);
            }
        }
    }

    /// Applies a fetch outcome. Only meaningful while loading; anything
    /// arriving later is dropped.
    pub fn resolve_fetch(&mut self, result: Result<Vec<Vulnerability>, String>) {
        if !matches!(self.load, LoadState::Loading) {
            return;
        }
        self.load = match result {
            Ok(vulns) => LoadState::Loaded(vulns),
            Err(message) => LoadState::Error(message),
        };
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

/// The application aggregate. Each view's state is local to it; the wizard
/// and the browser never share anything beyond living in this struct.
pub struct App {
    pub should_quit: bool,
    pub route: Route,
    pub wizard: Wizard,
    /// Bumped whenever a fresh wizard is mounted; in-flight submit
    /// responses carrying an older generation are dropped.
    pub wizard_gen: u64,
    pub browser: BrowserState,
    /// Same guard for vulnerability fetches.
    pub browser_gen: u64,
    pub export_status: ExportStatus,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            route: Route::Dashboard,
            wizard: Wizard::new(),
            wizard_gen: 0,
            browser: BrowserState::new(),
            browser_gen: 0,
            export_status: ExportStatus::Idle,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Switches routes. Entering the new-scan or vulnerabilities view is a
    /// mount: its state is rebuilt from scratch and its generation bumped,
    /// so responses addressed to the previous incarnation no-op. Returns
    /// true when the vulnerabilities view was mounted and a fetch should be
    /// spawned.
    pub fn navigate(&mut self, route: Route) -> bool {
        let mut needs_fetch = false;
        match &route {
            Route::NewScan => {
                self.wizard = Wizard::new();
                self.wizard_gen += 1;
            }
            Route::Vulnerabilities => {
                self.browser = BrowserState::new();
                self.browser_gen += 1;
                self.export_status = ExportStatus::Idle;
                needs_fetch = true;
            }
            _ => {}
        }
        self.route = route;
        needs_fetch
    }

    /// Applies a submission outcome coming back over the channel. A
    /// success navigates to the scan-detail view keyed by the returned id.
    pub fn apply_submit_result(&mut self, generation: u64, result: Result<String, String>) {
        if generation != self.wizard_gen {
            return;
        }
        self.wizard.resolve_submit(result);
        if let SubmitState::Done { scan_id } = &self.wizard.submit {
            self.route = Route::ScanDetail(scan_id.clone());
        }
    }

    /// Applies a vulnerability-fetch outcome coming back over the channel.
    pub fn apply_fetch_result(
        &mut self,
        generation: u64,
        result: Result<Vec<Vulnerability>, String>,
    ) {
        if generation != self.browser_gen {
            return;
        }
        self.browser.resolve_fetch(result);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Severity, Status};
    use chrono::Utc;

    fn vuln(id: &str, severity: Severity) -> Vulnerability {
        Vulnerability {
            id: id.to_string(),
            title: format!("Finding {id}"),
            severity,
            kind: "exposure".to_string(),
            target: "https://example.com".to_string(),
            description: "A test finding".to_string(),
            tool: "Nuclei".to_string(),
            timestamp: Utc::now(),
            status: Status::Open,
            ai_recommendations: None,
            details: None,
        }
    }

    #[test]
    fn successful_submit_navigates_to_scan_detail() {
        let mut app = App::new();
        app.navigate(Route::NewScan);
        app.wizard.select_type(ScanType::Web);
        app.wizard.next();
        app.wizard.target = "https://example.com".to_string();
        app.wizard.next();
        assert!(app.wizard.begin_submit().is_some());

        app.apply_submit_result(app.wizard_gen, Ok("abc123".to_string()));
        assert_eq!(app.route, Route::ScanDetail("abc123".to_string()));
        assert_eq!(app.route.path(), "/scan/abc123");
    }

    #[test]
    fn stale_submit_response_is_dropped() {
        let mut app = App::new();
        app.navigate(Route::NewScan);
        let old_gen = app.wizard_gen;
        // User navigates away; the wizard that sent the request is gone.
        app.navigate(Route::Dashboard);
        app.navigate(Route::NewScan);

        app.apply_submit_result(old_gen, Ok("abc123".to_string()));
        assert_eq!(app.route, Route::NewScan);
        assert_eq!(app.wizard.submit, SubmitState::Idle);
    }

    #[test]
    fn entering_vulnerabilities_mounts_a_fresh_loading_view() {
        let mut app = App::new();
        let needs_fetch = app.navigate(Route::Vulnerabilities);
        assert!(needs_fetch);
        assert!(matches!(app.browser.load, LoadState::Loading));
        assert!(app.browser.filtered().is_empty());
    }

    #[test]
    fn fetch_error_shows_no_partial_rows() {
        let mut app = App::new();
        app.navigate(Route::Vulnerabilities);
        app.apply_fetch_result(app.browser_gen, Err("Server returned HTTP 500".to_string()));
        match &app.browser.load {
            LoadState::Error(msg) => assert_eq!(msg, "Server returned HTTP 500"),
            _ => panic!("expected error state"),
        }
        assert!(app.browser.filtered().is_empty());
    }

    #[test]
    fn stale_fetch_response_is_dropped() {
        let mut app = App::new();
        app.navigate(Route::Vulnerabilities);
        let old_gen = app.browser_gen;
        app.navigate(Route::Dashboard);
        app.navigate(Route::Vulnerabilities);

        app.apply_fetch_result(old_gen, Ok(vec![vuln("1", Severity::Low)]));
        assert!(matches!(app.browser.load, LoadState::Loading));
    }

    #[test]
    fn browser_cursor_follows_the_filtered_view() {
        let mut app = App::new();
        app.navigate(Route::Vulnerabilities);
        app.apply_fetch_result(
            app.browser_gen,
            Ok(vec![
                vuln("1", Severity::Critical),
                vuln("2", Severity::Low),
                vuln("3", Severity::Info),
            ]),
        );
        app.browser.move_down();
        app.browser.move_down();
        assert_eq!(app.browser.selected_id().as_deref(), Some("3"));

        // Narrowing the filter pulls the cursor back inside the view.
        app.browser.filters.severity = Some(Severity::Critical);
        app.browser.clamp_cursor();
        assert_eq!(app.browser.selected_id().as_deref(), Some("1"));
    }

    #[test]
    fn row_expansion_toggles_independently() {
        let mut app = App::new();
        app.navigate(Route::Vulnerabilities);
        app.apply_fetch_result(
            app.browser_gen,
            Ok(vec![vuln("1", Severity::High), vuln("2", Severity::Low)]),
        );
        app.browser.toggle_expanded();
        assert!(app.browser.expanded.contains("1"));
        app.browser.move_down();
        app.browser.toggle_expanded();
        assert!(app.browser.expanded.contains("1"));
        assert!(app.browser.expanded.contains("2"));
        app.browser.toggle_expanded();
        assert!(!app.browser.expanded.contains("2"));
    }

    #[test]
    fn sidebar_paths_highlight_by_exact_match() {
        assert_eq!(Route::Vulnerabilities.path(), "/vulnerabilities");
        assert_eq!(Route::Scanner(ScanType::SmartContract).path(), "/scanner/smart-contract");
        assert_ne!(Route::NewScan.path(), Route::ScanDetail("x".to_string()).path());
    }
}
