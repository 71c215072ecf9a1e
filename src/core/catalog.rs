// src/core/catalog.rs

//! Static, read-only catalog of the scan types the backend understands.
//! Each entry carries the human-facing label, a short description, the
//! placeholder shown in the target field, and the default tool set the
//! wizard preselects when that type is chosen. Keeping this data-driven
//! means adding a scan type is a one-entry change.

use crate::core::models::ScanType;

/// Everything the UI needs to present one scan type.
pub struct ScanTypeInfo {
    pub scan_type: ScanType,
    /// Short, human-readable name (e.g. "Web Application").
    pub label: &'static str,
    /// One-line explanation shown under the type selector.
    pub description: &'static str,
    /// Hint text for the target input field.
    pub placeholder: &'static str,
    /// Tools preselected when this type is chosen. The user may deselect
    /// some, but switching type always restores this full set.
    pub default_tools: &'static [&'static str],
}

/// Catalog entries, one per `ScanType`, in enum order.
static CATALOG: &[ScanTypeInfo] = &[
    ScanTypeInfo {
        scan_type: ScanType::Web,
        label: "Web Application",
        description: "Scan websites for vulnerabilities using Nmap and Nuclei",
        placeholder: "Enter URL (e.g., https://example.com)",
        default_tools: &["Nmap", "Nuclei"],
    },
    ScanTypeInfo {
        scan_type: ScanType::Mobile,
        label: "Mobile Application",
        description: "Analyze mobile applications (APK/IPA) for security issues",
        placeholder: "Upload APK/IPA file or enter URL",
        default_tools: &["MobSF"],
    },
    ScanTypeInfo {
        scan_type: ScanType::Api,
        label: "API Endpoint",
        description: "Test API endpoints for security vulnerabilities",
        placeholder: "Enter API endpoint URL",
        default_tools: &["Nuclei"],
    },
    ScanTypeInfo {
        scan_type: ScanType::Source,
        label: "Source Code",
        description: "Analyze source code for security flaws",
        placeholder: "Enter repository URL or upload files",
        default_tools: &["Static Analysis"],
    },
    ScanTypeInfo {
        scan_type: ScanType::SmartContract,
        label: "Smart Contract",
        description: "Audit smart contracts using Mythril",
        placeholder: "Enter contract address or upload file",
        default_tools: &["Mythril"],
    },
    ScanTypeInfo {
        scan_type: ScanType::Blockchain,
        label: "Blockchain",
        description: "Analyze blockchain networks and transactions",
        placeholder: "Enter target",
        default_tools: &["Custom Analysis"],
    },
];

/// All catalog entries, in presentation order.
pub fn entries() -> &'static [ScanTypeInfo] {
    CATALOG
}

/// Looks up the entry for a given scan type. The match is exhaustive over
/// the enum, so every type is guaranteed an entry.
pub fn info_for(scan_type: ScanType) -> &'static ScanTypeInfo {
    match scan_type {
        ScanType::Web => &CATALOG[0],
        ScanType::Mobile => &CATALOG[1],
        ScanType::Api => &CATALOG[2],
        ScanType::Source => &CATALOG[3],
        ScanType::SmartContract => &CATALOG[4],
        ScanType::Blockchain => &CATALOG[5],
    }
}

/// The default tool set for a scan type, as owned strings ready to go into
/// a `ScanRequest`.
pub fn default_tools(scan_type: ScanType) -> Vec<String> {
    info_for(scan_type)
        .default_tools
        .iter()
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_scan_type_has_a_consistent_entry() {
        for scan_type in ScanType::iter() {
            let info = info_for(scan_type);
            assert_eq!(info.scan_type, scan_type);
            assert!(!info.default_tools.is_empty());
        }
    }

    #[test]
    fn web_defaults_match_backend_tooling() {
        assert_eq!(default_tools(ScanType::Web), vec!["Nmap", "Nuclei"]);
        assert_eq!(default_tools(ScanType::SmartContract), vec!["Mythril"]);
    }
}
