// src/core/models.rs

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::{self, Deserializer};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use strum::{Display, EnumIter};

// --- Core Data Models ---

/// The category of target being assessed. Selecting one determines the
/// default tool set offered by the scan wizard (see `core::catalog`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ScanType {
    Web,
    Mobile,
    Api,
    Source,
    SmartContract,
    Blockchain,
}

/// How thorough a scan should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Depth {
    Quick,
    Normal,
    Deep,
}

impl Depth {
    /// Steps forward through the selector, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Depth::Quick => Depth::Normal,
            Depth::Normal => Depth::Deep,
            Depth::Deep => Depth::Quick,
        }
    }

    /// Steps backward through the selector, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Depth::Quick => Depth::Deep,
            Depth::Normal => Depth::Quick,
            Depth::Deep => Depth::Normal,
        }
    }
}

/// Ordinal urgency ranking of a finding, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// Uppercase label used by chips and the export artifact.
    pub fn label(self) -> String {
        self.to_string().to_uppercase()
    }
}

/// Triage state of a finding's remediation lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    Open,
    InProgress,
    Resolved,
    FalsePositive,
}

impl Status {
    /// Uppercase label with underscores spaced out, e.g. "FALSE POSITIVE".
    pub fn label(self) -> String {
        self.to_string().replace('_', " ").to_uppercase()
    }
}

/// A single reported security issue, as returned by `GET /api/vulnerabilities`.
///
/// The fetched list is treated as an immutable snapshot for the lifetime of
/// one visit to the vulnerabilities view; filters only ever derive views over
/// it. `details` is an opaque payload and is round-tripped verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vulnerability {
    pub id: String,
    pub title: String,
    pub severity: Severity,
    #[serde(rename = "type")]
    pub kind: String,
    pub target: String,
    pub description: String,
    pub tool: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_recommendations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Accepts both RFC 3339 timestamps and the backend's offset-less ISO 8601
/// form (`2026-08-29T10:00:00.123456`), which is interpreted as UTC.
fn deserialize_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(with_offset.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc())
        .map_err(|e| de::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
}

/// Validated scan options. Timeout and concurrency are typed as positive
/// integers here; the wire format stringifies them (see `Serialize` below),
/// matching what the backend expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub depth: Depth,
    pub timeout_secs: u32,
    pub concurrency: u32,
}

impl Serialize for ScanOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Wire contract: { depth, timeout, concurrent }, all strings.
        let mut s = serializer.serialize_struct("ScanOptions", 3)?;
        s.serialize_field("depth", &self.depth.to_string())?;
        s.serialize_field("timeout", &self.timeout_secs.to_string())?;
        s.serialize_field("concurrent", &self.concurrency.to_string())?;
        s.end()
    }
}

/// The immutable snapshot the wizard submits as the body of `POST /api/scan`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub scan_type: ScanType,
    pub target: String,
    pub tools: Vec<String>,
    pub options: ScanOptions,
}

/// Success body of `POST /api/scan`. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub scan_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_type_wire_names() {
        let json = serde_json::to_string(&ScanType::SmartContract).unwrap();
        assert_eq!(json, "\"smart-contract\"");
        assert_eq!(ScanType::Web.to_string(), "web");
    }

    #[test]
    fn status_wire_and_label() {
        let json = serde_json::to_string(&Status::FalsePositive).unwrap();
        assert_eq!(json, "\"false_positive\"");
        assert_eq!(Status::FalsePositive.label(), "FALSE POSITIVE");
        assert_eq!(Status::InProgress.label(), "IN PROGRESS");
    }

    #[test]
    fn severity_label_is_uppercase() {
        assert_eq!(Severity::Critical.label(), "CRITICAL");
    }

    #[test]
    fn depth_cycles_in_both_directions() {
        assert_eq!(Depth::Quick.next(), Depth::Normal);
        assert_eq!(Depth::Deep.next(), Depth::Quick);
        assert_eq!(Depth::Quick.prev(), Depth::Deep);
        assert_eq!(Depth::Normal.prev(), Depth::Quick);
    }

    #[test]
    fn scan_request_serializes_options_as_strings() {
        let request = ScanRequest {
            scan_type: ScanType::Web,
            target: "https://example.com".to_string(),
            tools: vec!["Nmap".to_string(), "Nuclei".to_string()],
            options: ScanOptions {
                depth: Depth::Normal,
                timeout_secs: 300,
                concurrency: 10,
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["scanType"], "web");
        assert_eq!(value["options"]["depth"], "normal");
        assert_eq!(value["options"]["timeout"], "300");
        assert_eq!(value["options"]["concurrent"], "10");
    }

    #[test]
    fn timestamp_accepts_backend_isoformat_without_offset() {
        use chrono::TimeZone;

        let raw = serde_json::json!({
            "id": "vuln-7",
            "title": "Open Redirect",
            "severity": "medium",
            "type": "redirect",
            "target": "https://example.com/next",
            "description": "Unvalidated redirect target.",
            "tool": "Nuclei",
            "timestamp": "2026-08-29T10:00:00.123456",
            "status": "open"
        });
        let vuln: Vulnerability = serde_json::from_value(raw).unwrap();
        assert_eq!(
            vuln.timestamp,
            Utc.with_ymd_and_hms(2026, 8, 29, 10, 0, 0).unwrap()
                + chrono::Duration::microseconds(123_456)
        );

        // An offsetted timestamp still parses the same way.
        let vuln: Vulnerability = serde_json::from_value(serde_json::json!({
            "id": "vuln-8",
            "title": "Open Redirect",
            "severity": "medium",
            "type": "redirect",
            "target": "https://example.com/next",
            "description": "Unvalidated redirect target.",
            "tool": "Nuclei",
            "timestamp": "2026-08-29T10:00:00+02:00",
            "status": "open"
        }))
        .unwrap();
        assert_eq!(vuln.timestamp, Utc.with_ymd_and_hms(2026, 8, 29, 8, 0, 0).unwrap());
    }

    #[test]
    fn vulnerability_roundtrips_opaque_details() {
        let raw = serde_json::json!({
            "id": "vuln-1",
            "title": "SQL Injection",
            "severity": "critical",
            "type": "injection",
            "target": "https://example.com/login",
            "description": "User input reaches a query unsanitized.",
            "tool": "Nuclei",
            "timestamp": "2026-08-01T12:00:00Z",
            "status": "open",
            "details": { "parameter": "username", "payloads": ["' OR 1=1 --"] }
        });
        let vuln: Vulnerability = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(vuln.severity, Severity::Critical);
        assert!(vuln.ai_recommendations.is_none());
        let back = serde_json::to_value(&vuln).unwrap();
        assert_eq!(back["details"], raw["details"]);
        assert_eq!(back["type"], "injection");
    }
}
