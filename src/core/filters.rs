// src/core/filters.rs

//! The pure filter pipeline over the fetched vulnerability list.
//!
//! A vulnerability passes iff every active predicate matches: severity
//! (exact or all), status (exact or all), and a case-insensitive substring
//! search over title or description. Filtering never mutates the source
//! list and is referentially transparent — the same inputs always produce
//! the same view.

use crate::core::models::{Severity, Status, Vulnerability};
use strum::IntoEnumIterator;

/// Live view parameters for the vulnerability browser. `None` means "all"
/// for the two enum filters. Not persisted anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub severity: Option<Severity>,
    pub status: Option<Status>,
}

impl FilterState {
    /// Conjunction of the three predicates for one record.
    pub fn matches(&self, vuln: &Vulnerability) -> bool {
        let severity_ok = self.severity.is_none_or(|s| vuln.severity == s);
        let status_ok = self.status.is_none_or(|s| vuln.status == s);
        let search_ok = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            vuln.title.to_lowercase().contains(&needle)
                || vuln.description.to_lowercase().contains(&needle)
        };
        severity_ok && status_ok && search_ok
    }

    /// Derives the filtered view. Borrowed, so the snapshot stays untouched.
    pub fn apply<'a>(&self, vulns: &'a [Vulnerability]) -> Vec<&'a Vulnerability> {
        vulns.iter().filter(|v| self.matches(v)).collect()
    }

    /// Advances the severity selector: all -> critical -> ... -> info -> all.
    pub fn cycle_severity(&mut self) {
        self.severity = cycle(self.severity);
    }

    /// Advances the status selector the same way.
    pub fn cycle_status(&mut self) {
        self.status = cycle(self.status);
    }
}

/// Steps an optional enum selector through `None` and every variant in
/// declaration order, wrapping back to `None`.
fn cycle<T: IntoEnumIterator + PartialEq + Copy>(current: Option<T>) -> Option<T> {
    match current {
        None => T::iter().next(),
        Some(value) => {
            let mut iter = T::iter();
            iter.find(|v| *v == value);
            iter.next()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn vuln(id: &str, title: &str, severity: Severity, status: Status) -> Vulnerability {
        Vulnerability {
            id: id.to_string(),
            title: title.to_string(),
            severity,
            kind: "injection".to_string(),
            target: "https://example.com".to_string(),
            description: format!("{title} was found during scanning"),
            tool: "Nuclei".to_string(),
            timestamp: Utc::now(),
            status,
            ai_recommendations: None,
            details: None,
        }
    }

    fn sample() -> Vec<Vulnerability> {
        vec![
            vuln("1", "SQL Injection", Severity::Critical, Status::Open),
            vuln("2", "Missing HSTS header", Severity::Low, Status::Resolved),
            vuln("3", "Server banner disclosure", Severity::Info, Status::FalsePositive),
        ]
    }

    #[test]
    fn default_filter_passes_everything() {
        let vulns = sample();
        let filter = FilterState::default();
        assert_eq!(filter.apply(&vulns).len(), vulns.len());
    }

    #[test]
    fn severity_filter_is_an_exact_match() {
        let vulns = sample();
        let filter = FilterState {
            severity: Some(Severity::Critical),
            ..Default::default()
        };
        let view = filter.apply(&vulns);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "1");
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let vulns = sample();
        let filter = FilterState {
            search: "sql".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&vulns).len(), 1);

        // Matches a word only present in the description.
        let filter = FilterState {
            search: "SCANNING".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&vulns).len(), 3);
    }

    #[test]
    fn predicates_intersect() {
        let vulns = sample();
        let filter = FilterState {
            search: "header".to_string(),
            severity: Some(Severity::Low),
            status: Some(Status::Resolved),
        };
        assert_eq!(filter.apply(&vulns).len(), 1);

        // Same search, but the status predicate now excludes record 2.
        let filter = FilterState {
            search: "header".to_string(),
            severity: Some(Severity::Low),
            status: Some(Status::Open),
        };
        assert!(filter.apply(&vulns).is_empty());
    }

    #[test]
    fn filtering_is_pure_and_idempotent() {
        let vulns = sample();
        let filter = FilterState {
            search: "injection".to_string(),
            ..Default::default()
        };
        let first: Vec<String> = filter.apply(&vulns).iter().map(|v| v.id.clone()).collect();
        let second: Vec<String> = filter.apply(&vulns).iter().map(|v| v.id.clone()).collect();
        assert_eq!(first, second);
        // The source list is untouched.
        assert_eq!(vulns.len(), 3);
    }

    #[test]
    fn severity_cycle_wraps_through_all() {
        let mut filter = FilterState::default();
        filter.cycle_severity();
        assert_eq!(filter.severity, Some(Severity::Critical));
        for _ in 0..4 {
            filter.cycle_severity();
        }
        assert_eq!(filter.severity, Some(Severity::Info));
        filter.cycle_severity();
        assert_eq!(filter.severity, None);
    }

    #[test]
    fn status_cycle_wraps_through_all() {
        let mut filter = FilterState::default();
        filter.cycle_status();
        assert_eq!(filter.status, Some(Status::Open));
        for _ in 0..3 {
            filter.cycle_status();
        }
        assert_eq!(filter.status, Some(Status::FalsePositive));
        filter.cycle_status();
        assert_eq!(filter.status, None);
    }
}
