use crate::checks::{
    self, CheckCategory, check_dependency_vulnerabilities, check_dependency_warnings,
    check_global_warnings,
};
use crate::extract::CompactedPayload;
use crate::policy::RuntimeConfiguration;
use depgate_types::{InterpretedData, InterpretedPayload, PipelineStatus};
use std::collections::BTreeSet;

/// A deferred check. The pipeline decides when it runs; it always runs.
pub type PipelineCheck<'a> = Box<dyn Fn() -> checks::CheckOutcome + 'a>;

/// Run every check in order and fold the outcomes into one verdict.
///
/// Never short-circuits: a failing check does not prevent later checks from contributing
/// their evidence. Status is the OR of all check statuses.
pub fn run_checks(pipeline: &[PipelineCheck<'_>]) -> InterpretedPayload {
    let mut failed = false;
    let mut data = InterpretedData::default();
    let mut merged: BTreeSet<CheckCategory> = BTreeSet::new();

    for check in pipeline {
        let outcome = check();
        let fresh = merged.insert(outcome.category());
        debug_assert!(fresh, "duplicate check key: {}", outcome.category().key());

        failed |= outcome.status();
        outcome.merge_into(&mut data);
    }

    InterpretedPayload {
        status: if failed {
            PipelineStatus::Failure
        } else {
            PipelineStatus::Success
        },
        data,
    }
}

/// Interpret a compacted payload with the fixed check set:
/// global warnings, dependency warnings, dependency vulnerabilities.
pub fn interpret(payload: &CompactedPayload, cfg: &RuntimeConfiguration) -> InterpretedPayload {
    let checks: [PipelineCheck<'_>; 3] = [
        Box::new(|| check_global_warnings(&payload.warnings)),
        Box::new(|| check_dependency_warnings(&payload.dependencies.warnings)),
        Box::new(|| check_dependency_vulnerabilities(&payload.dependencies.vulnerabilities, cfg)),
    ];
    run_checks(&checks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckOutcome, CheckResult};
    use crate::extract::CompactedDependencies;
    use crate::test_support::{config_with_threshold, dep_warning, vuln};
    use depgate_types::{GlobalWarning, Severity};
    use std::cell::Cell;

    #[test]
    fn never_short_circuits_after_a_failing_check() {
        let calls = Cell::new(0);
        let pipeline: [PipelineCheck<'_>; 3] = [
            Box::new(|| {
                calls.set(calls.get() + 1);
                CheckOutcome::GlobalWarnings(CheckResult::from_matched(vec![GlobalWarning::new(
                    "boom",
                )]))
            }),
            Box::new(|| {
                calls.set(calls.get() + 1);
                CheckOutcome::DependencyWarnings(CheckResult::from_matched(Vec::new()))
            }),
            Box::new(|| {
                calls.set(calls.get() + 1);
                CheckOutcome::DependencyVulnerabilities(CheckResult::from_matched(Vec::new()))
            }),
        ];

        let interpreted = run_checks(&pipeline);

        assert_eq!(calls.get(), 3);
        assert_eq!(interpreted.status, PipelineStatus::Failure);
        let tree = serde_json::to_value(&interpreted).expect("serialize");
        assert_eq!(tree["data"]["warnings"], serde_json::json!(["boom"]));
        assert_eq!(tree["data"]["dependencies"]["warnings"], serde_json::json!([]));
        assert_eq!(
            tree["data"]["dependencies"]["vulnerabilities"],
            serde_json::json!([])
        );
    }

    #[test]
    fn critical_vulnerability_over_high_threshold_fails() {
        let payload = CompactedPayload {
            warnings: Vec::new(),
            dependencies: CompactedDependencies {
                warnings: Vec::new(),
                vulnerabilities: vec![vuln(Some(Severity::Critical))],
            },
        };
        let cfg = config_with_threshold(Severity::High.into());

        let interpreted = interpret(&payload, &cfg);

        assert_eq!(interpreted.status, PipelineStatus::Failure);
        assert_eq!(interpreted.data.dependencies.vulnerabilities.len(), 1);
        assert!(interpreted.data.warnings.is_empty());
        assert!(interpreted.data.dependencies.warnings.is_empty());
    }

    #[test]
    fn empty_dependency_warnings_and_low_vulnerability_succeed() {
        let payload = CompactedPayload {
            warnings: Vec::new(),
            dependencies: CompactedDependencies {
                warnings: vec![dep_warning("a", &[])],
                vulnerabilities: vec![vuln(Some(Severity::Low))],
            },
        };
        let cfg = config_with_threshold(Severity::High.into());

        let interpreted = interpret(&payload, &cfg);

        assert_eq!(interpreted.status, PipelineStatus::Success);
        assert!(interpreted.data.dependencies.warnings.is_empty());
        assert!(interpreted.data.dependencies.vulnerabilities.is_empty());
    }

    #[test]
    fn interpretation_is_deterministic() {
        let payload = CompactedPayload {
            warnings: vec![GlobalWarning::new("w")],
            dependencies: CompactedDependencies {
                warnings: vec![dep_warning("a", &["unsafe-import"]), dep_warning("b", &[])],
                vulnerabilities: vec![vuln(Some(Severity::High)), vuln(None)],
            },
        };
        let cfg = config_with_threshold(Severity::Medium.into());

        let first = serde_json::to_vec(&interpret(&payload, &cfg)).expect("serialize");
        let second = serde_json::to_vec(&interpret(&payload, &cfg)).expect("serialize");

        assert_eq!(first, second);
    }
}
