use crate::defaults::{
    DEFAULT_REPORTERS, DEFAULT_STRATEGY, DEFAULT_VULNERABILITY_SEVERITY, DEFAULT_WARNINGS,
};
use crate::error::ConfigError;
use crate::model::DepgateConfigV1;
use camino::Utf8Path;
use depgate_domain::{IgnorePatterns, ReporterKind, RuntimeConfiguration, Strategy, WarningsPolicy};
use depgate_types::{Severity, Threshold};

/// Invocation options. Each one wins over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub strategy: Option<String>,
    pub vulnerability_severity: Option<String>,
    pub warnings: Option<String>,
    pub reporters: Option<Vec<String>>,
}

/// Merge defaults, file config and overrides into the configuration for one run.
pub fn resolve_config(
    cfg: DepgateConfigV1,
    overrides: Overrides,
    root_dir: &Utf8Path,
    ignore: IgnorePatterns,
) -> Result<RuntimeConfiguration, ConfigError> {
    let strategy = overrides
        .strategy
        .or(cfg.strategy)
        .unwrap_or_else(|| DEFAULT_STRATEGY.to_string());

    let severity = overrides
        .vulnerability_severity
        .or(cfg.ci.vulnerabilities.severity)
        .unwrap_or_else(|| DEFAULT_VULNERABILITY_SEVERITY.to_string());

    let warnings = overrides
        .warnings
        .or(cfg.ci.warnings)
        .unwrap_or_else(|| DEFAULT_WARNINGS.to_string());

    let reporters = overrides
        .reporters
        .or(cfg.ci.reporters)
        .unwrap_or_else(|| DEFAULT_REPORTERS.iter().map(|r| r.to_string()).collect());

    Ok(RuntimeConfiguration {
        root_dir: root_dir.to_path_buf(),
        strategy: parse_strategy(&strategy)?,
        vulnerability_severity: parse_threshold(&severity)?,
        warnings: parse_warnings_policy(&warnings)?,
        reporters: parse_reporters(&reporters)?,
        ignore,
    })
}

pub(crate) fn parse_threshold(v: &str) -> Result<Threshold, ConfigError> {
    let severity = match v {
        "all" => return Ok(Threshold::All),
        "info" => Severity::Info,
        "low" => Severity::Low,
        "medium" => Severity::Medium,
        "high" => Severity::High,
        "critical" => Severity::Critical,
        other => return Err(ConfigError::UnknownSeverity(other.to_string())),
    };
    Ok(Threshold::Severity(severity))
}

fn parse_strategy(v: &str) -> Result<Strategy, ConfigError> {
    match v {
        "npm" => Ok(Strategy::Npm),
        "node" => Ok(Strategy::Node),
        "snyk" => Ok(Strategy::Snyk),
        "sonatype" => Ok(Strategy::Sonatype),
        "none" => Ok(Strategy::Disabled),
        other => Err(ConfigError::UnknownStrategy(other.to_string())),
    }
}

fn parse_warnings_policy(v: &str) -> Result<WarningsPolicy, ConfigError> {
    match v {
        "error" => Ok(WarningsPolicy::Error),
        "warning" => Ok(WarningsPolicy::Warning),
        "off" => Ok(WarningsPolicy::Off),
        other => Err(ConfigError::UnknownWarningsPolicy(other.to_string())),
    }
}

fn parse_reporters(ids: &[String]) -> Result<Vec<ReporterKind>, ConfigError> {
    let mut out: Vec<ReporterKind> = Vec::new();
    for id in ids {
        let kind = match id.trim() {
            "console" => ReporterKind::Console,
            "json" => ReporterKind::Json,
            "markdown" | "md" => ReporterKind::Markdown,
            other => return Err(ConfigError::UnknownReporter(other.to_string())),
        };
        // First occurrence wins.
        if !out.contains(&kind) {
            out.push(kind);
        }
    }
    Ok(out)
}
