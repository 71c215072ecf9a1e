// src/core/export.rs

//! Serializes the currently filtered vulnerability view to a JSON report
//! file. This is a purely local transform: no network call is involved, and
//! the export always reflects the filtered view, never the full snapshot.
//!
//! Severity and status are tagged with their display labels (uppercased,
//! underscores spaced out); every other field, including the opaque
//! `details` payload, is exported verbatim.

use crate::core::models::Vulnerability;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Builds the artifact name, `vulnerabilities-<ISO8601>.json`.
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!(
        "vulnerabilities-{}.json",
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Maps the filtered records into their export shape.
pub fn export_records(vulns: &[&Vulnerability]) -> Result<Vec<serde_json::Value>, String> {
    vulns
        .iter()
        .map(|vuln| {
            let mut value = serde_json::to_value(vuln)
                .map_err(|e| format!("Failed to serialize finding {}: {e}", vuln.id))?;
            if let Some(object) = value.as_object_mut() {
                object.insert("severity".to_string(), vuln.severity.label().into());
                object.insert("status".to_string(), vuln.status.label().into());
            }
            Ok(value)
        })
        .collect()
}

/// Writes the filtered view to `dir`, returning the path of the written
/// file. Errors come back as user-facing messages for the export status
/// line.
pub fn write_export(
    dir: &Path,
    vulns: &[&Vulnerability],
    now: DateTime<Utc>,
) -> Result<PathBuf, String> {
    let records = export_records(vulns)?;
    let body = serde_json::to_string_pretty(&records)
        .map_err(|e| format!("Failed to serialize report: {e}"))?;

    let path = dir.join(export_filename(now));
    match fs::write(&path, body) {
        Ok(()) => {
            info!(path = %path.display(), records = vulns.len(), "Exported vulnerability report.");
            Ok(path)
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to write vulnerability report.");
            Err(format!("Failed to write {}: {e}", path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filters::FilterState;
    use crate::core::models::{Severity, Status};
    use chrono::TimeZone;

    fn vuln(id: &str, severity: Severity, status: Status) -> Vulnerability {
        Vulnerability {
            id: id.to_string(),
            title: format!("Finding {id}"),
            severity,
            kind: "misconfiguration".to_string(),
            target: "https://example.com".to_string(),
            description: "A test finding".to_string(),
            tool: "Nmap".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
            status,
            ai_recommendations: None,
            details: Some(serde_json::json!({ "port": 443 })),
        }
    }

    #[test]
    fn filename_embeds_iso8601_timestamp() {
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 9, 30, 0).unwrap();
        assert_eq!(
            export_filename(now),
            "vulnerabilities-2026-08-29T09:30:00.000Z.json"
        );
    }

    #[test]
    fn export_tags_display_labels_and_keeps_details() {
        let a = vuln("1", Severity::High, Status::InProgress);
        let records = export_records(&[&a]).unwrap();
        assert_eq!(records[0]["severity"], "HIGH");
        assert_eq!(records[0]["status"], "IN PROGRESS");
        assert_eq!(records[0]["details"]["port"], 443);
        assert_eq!(records[0]["title"], "Finding 1");
    }

    #[test]
    fn export_covers_exactly_the_filtered_view() {
        let vulns = vec![
            vuln("1", Severity::Critical, Status::Open),
            vuln("2", Severity::Low, Status::Open),
            vuln("3", Severity::Info, Status::Resolved),
        ];
        let filter = FilterState {
            severity: Some(Severity::Critical),
            ..Default::default()
        };
        let view = filter.apply(&vulns);
        let records = export_records(&view).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["id"], "1");
    }

    #[test]
    fn write_export_creates_the_file() {
        let dir = std::env::temp_dir();
        let a = vuln("1", Severity::Medium, Status::Open);
        let now = Utc.with_ymd_and_hms(2026, 8, 29, 10, 0, 0).unwrap();
        let path = write_export(&dir, &[&a], now).unwrap();
        let body = fs::read_to_string(&path).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0]["severity"], "MEDIUM");
        fs::remove_file(path).unwrap();
    }
}
