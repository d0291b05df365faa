use crate::ignore::IgnorePatterns;
use crate::policy::{ReporterKind, RuntimeConfiguration, Strategy, WarningsPolicy};
use camino::Utf8PathBuf;
use depgate_types::{
    DependencyRecord, DependencyWarning, Extra, Severity, Threshold, VersionRecord,
    Vulnerability, WarningEntry,
};
use std::collections::BTreeMap;

pub fn config_with_threshold(threshold: Threshold) -> RuntimeConfiguration {
    RuntimeConfiguration {
        root_dir: Utf8PathBuf::from("."),
        strategy: Strategy::Npm,
        vulnerability_severity: threshold,
        warnings: WarningsPolicy::Error,
        reporters: vec![ReporterKind::Console],
        ignore: IgnorePatterns::default(),
    }
}

pub fn vuln(severity: Option<Severity>) -> Vulnerability {
    Vulnerability {
        id: Some(format!(
            "GHSA-{}",
            severity.map(|s| s.as_str()).unwrap_or("unlabeled")
        )),
        severity,
        ..Vulnerability::default()
    }
}

pub fn dep_warning(package: &str, kinds: &[&str]) -> DependencyWarning {
    DependencyWarning {
        package: package.to_string(),
        version: "1.0.0".to_string(),
        warnings: kinds.iter().map(|k| WarningEntry::new(*k)).collect(),
    }
}

pub fn payload_dep(versions: &[(&str, &[&str])], vulnerabilities: Vec<Vulnerability>) -> DependencyRecord {
    DependencyRecord {
        versions: versions
            .iter()
            .map(|(version, kinds)| {
                (
                    version.to_string(),
                    VersionRecord {
                        warnings: kinds.iter().map(|k| WarningEntry::new(*k)).collect(),
                        extra: Extra::new(),
                    },
                )
            })
            .collect(),
        vulnerabilities,
        extra: Extra::new(),
    }
}

pub fn ignore(kind: &str, packages: &[&str]) -> IgnorePatterns {
    let mut entries = BTreeMap::new();
    entries.insert(
        kind.to_string(),
        packages.iter().map(|p| p.to_string()).collect(),
    );
    IgnorePatterns::new(entries).expect("test ignore patterns must be valid globs")
}
