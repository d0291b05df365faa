use super::{CheckOutcome, CheckResult};
use crate::policy::RuntimeConfiguration;
use crate::severity::exceeds;
use depgate_types::Vulnerability;

/// Keep every vulnerability at or above the configured threshold.
pub fn check_dependency_vulnerabilities(
    vulnerabilities: &[Vulnerability],
    cfg: &RuntimeConfiguration,
) -> CheckOutcome {
    let threshold = cfg.vulnerability_severity;
    let exceeding = vulnerabilities
        .iter()
        .filter(|v| exceeds(v.severity, threshold))
        .cloned()
        .collect();

    CheckOutcome::DependencyVulnerabilities(CheckResult::from_matched(exceeding))
}
