// src/core/api.rs

//! The HTTP client for the two backend contracts: `POST /api/scan` and
//! `GET /api/vulnerabilities`. Nothing here retries or polls; each caller
//! issues exactly one request and maps any failure to a single
//! user-visible message.

use crate::core::models::{ScanRequest, ScanResponse, Vulnerability};
use std::fmt;
use tracing::{error, info};
use url::Url;

/// Failure taxonomy for a backend call. Every variant is recoverable: the
/// caller surfaces the message and stays in a retry-eligible state.
#[derive(Debug)]
pub enum ApiError {
    /// The request never completed (connection refused, timeout, TLS, ...).
    Network(String),
    /// The backend answered with a non-2xx status.
    Status(u16),
    /// The body of a 2xx response did not match the expected shape.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Status(code) => write!(f, "Server returned HTTP {code}"),
            ApiError::Parse(msg) => write!(f, "Malformed response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// A thin wrapper over `reqwest::Client` bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: Url) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent("ArgusRS/0.1")
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { http, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|e| ApiError::Network(format!("Invalid endpoint {path}: {e}")))
    }

    /// Posts a scan request and returns the identifier the backend assigned.
    pub async fn submit_scan(&self, request: &ScanRequest) -> Result<ScanResponse, ApiError> {
        let url = self.endpoint("/api/scan")?;
        info!(scan_type = %request.scan_type, target = %request.target, "Submitting scan request.");

        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Scan submission failed to reach the backend.");
                ApiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Backend rejected the scan request.");
            return Err(ApiError::Status(status.as_u16()));
        }

        let parsed: ScanResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Scan response body did not parse.");
            ApiError::Parse(e.to_string())
        })?;
        info!(scan_id = %parsed.scan_id, "Scan accepted by the backend.");
        Ok(parsed)
    }

    /// Fetches the full vulnerability collection. No pagination or server
    /// side filtering; the browser filters the snapshot locally.
    pub async fn fetch_vulnerabilities(&self) -> Result<Vec<Vulnerability>, ApiError> {
        let url = self.endpoint("/api/vulnerabilities")?;
        info!("Fetching vulnerability list.");

        let response = self.http.get(url).send().await.map_err(|e| {
            error!(error = %e, "Vulnerability fetch failed to reach the backend.");
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Backend refused the vulnerability fetch.");
            return Err(ApiError::Status(status.as_u16()));
        }

        let vulns: Vec<Vulnerability> = response.json().await.map_err(|e| {
            error!(error = %e, "Vulnerability list body did not parse.");
            ApiError::Parse(e.to_string())
        })?;
        info!(count = vulns.len(), "Vulnerability list loaded.");
        Ok(vulns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_messages_are_user_facing() {
        assert_eq!(
            ApiError::Status(500).to_string(),
            "Server returned HTTP 500"
        );
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            ApiError::Parse("missing field `scanId`".to_string()).to_string(),
            "Malformed response: missing field `scanId`"
        );
    }

    #[test]
    fn endpoints_join_against_the_base_url() {
        let client = ApiClient::new(Url::parse("http://127.0.0.1:8000").unwrap()).unwrap();
        let url = client.endpoint("/api/vulnerabilities").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/api/vulnerabilities");
    }
}
