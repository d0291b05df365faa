use crate::ignore::IgnorePatterns;
use camino::Utf8PathBuf;
use depgate_types::{ConfigSummary, Threshold, ids};

/// Vulnerability source the external scanner should use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Npm,
    Node,
    Snyk,
    Sonatype,
    /// No vulnerability source: the scan reports warnings only.
    Disabled,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Npm => "npm",
            Strategy::Node => "node",
            Strategy::Snyk => "snyk",
            Strategy::Sonatype => "sonatype",
            Strategy::Disabled => "none",
        }
    }
}

/// How dependency warnings should be treated by reporters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WarningsPolicy {
    Error,
    Warning,
    Off,
}

impl WarningsPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            WarningsPolicy::Error => "error",
            WarningsPolicy::Warning => "warning",
            WarningsPolicy::Off => "off",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReporterKind {
    Console,
    Json,
    Markdown,
}

impl ReporterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReporterKind::Console => ids::REPORTER_CONSOLE,
            ReporterKind::Json => ids::REPORTER_JSON,
            ReporterKind::Markdown => ids::REPORTER_MARKDOWN,
        }
    }
}

/// Policy for one run. Built once before the pipeline starts; read-only afterwards.
#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    pub root_dir: Utf8PathBuf,
    pub strategy: Strategy,
    pub vulnerability_severity: Threshold,
    pub warnings: WarningsPolicy,
    pub reporters: Vec<ReporterKind>,
    pub ignore: IgnorePatterns,
}

impl RuntimeConfiguration {
    /// Plain-label view used by reports.
    pub fn summary(&self) -> ConfigSummary {
        ConfigSummary {
            root_dir: self.root_dir.to_string(),
            strategy: self.strategy.as_str().to_string(),
            vulnerability_severity: self.vulnerability_severity.as_str().to_string(),
            warnings: self.warnings.as_str().to_string(),
            reporters: self
                .reporters
                .iter()
                .map(|r| r.as_str().to_string())
                .collect(),
        }
    }
}
