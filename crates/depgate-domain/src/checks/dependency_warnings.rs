use super::{CheckOutcome, CheckResult};
use depgate_types::DependencyWarning;

/// Fails when at least one dependency carries a warning.
///
/// Dependencies with an empty warning list are left out of the evidence.
pub fn check_dependency_warnings(dependencies: &[DependencyWarning]) -> CheckOutcome {
    let with_warnings = dependencies
        .iter()
        .filter(|d| d.has_warnings())
        .cloned()
        .collect();

    CheckOutcome::DependencyWarnings(CheckResult::from_matched(with_warnings))
}
