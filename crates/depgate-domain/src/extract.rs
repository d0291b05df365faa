//! Flatten the nested scan payload into the slices the checks read.

use crate::ignore::IgnorePatterns;
use depgate_types::{DependencyWarning, GlobalWarning, ScanPayload, Vulnerability};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompactedPayload {
    pub warnings: Vec<GlobalWarning>,
    pub dependencies: CompactedDependencies,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompactedDependencies {
    /// One entry per dependency version, including versions without warnings.
    pub warnings: Vec<DependencyWarning>,
    pub vulnerabilities: Vec<Vulnerability>,
}

/// Extract global warnings, per-version dependency warnings and all vulnerabilities.
///
/// Ordering follows the payload maps (dependency name, then version). Warning entries matched
/// by `ignore` are dropped; the dependency itself stays, possibly with an empty list.
pub fn extract_scan_payload(payload: &ScanPayload, ignore: &IgnorePatterns) -> CompactedPayload {
    let mut dependency_warnings = Vec::new();
    let mut vulnerabilities = Vec::new();

    for (name, record) in &payload.dependencies {
        for (version, scanned) in &record.versions {
            let warnings = scanned
                .warnings
                .iter()
                .filter(|w| !ignore.is_ignored(&w.kind, name))
                .cloned()
                .collect();
            dependency_warnings.push(DependencyWarning {
                package: name.clone(),
                version: version.clone(),
                warnings,
            });
        }
        vulnerabilities.extend(record.vulnerabilities.iter().cloned());
    }

    CompactedPayload {
        warnings: payload.warnings.clone(),
        dependencies: CompactedDependencies {
            warnings: dependency_warnings,
            vulnerabilities,
        },
    }
}
