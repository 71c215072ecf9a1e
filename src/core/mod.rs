// src/core/mod.rs

// The `core` module holds every piece of testable, UI-free logic: data
// models, the scan-type catalog, the wizard state machine, the filter
// pipeline, the export transform, and the backend HTTP client. Nothing in
// here depends on ratatui or crossterm.

/// Backend HTTP client for the scan and vulnerability endpoints.
pub mod api;

/// Static catalog of scan types, their labels and default tool sets.
pub mod catalog;

/// The export transform turning the filtered view into a JSON report file.
pub mod export;

/// The pure filter pipeline for the vulnerability browser.
pub mod filters;

/// Data structures shared across the application, such as `Vulnerability`,
/// `ScanRequest`, and the `Severity`/`Status` enums.
pub mod models;

/// The scan-configuration wizard state machine.
pub mod wizard;
