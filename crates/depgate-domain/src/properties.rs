//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Severity ranking and the inclusive threshold comparison
//! - Verdict aggregation (failure iff any check has evidence)
//! - Evidence filtering and determinism

use crate::extract::{CompactedDependencies, CompactedPayload};
use crate::pipeline::interpret;
use crate::severity::{exceeds, rank, threshold_rank};
use crate::test_support::config_with_threshold;
use depgate_types::{
    DependencyWarning, GlobalWarning, PipelineStatus, Severity, Threshold, Vulnerability,
    WarningEntry,
};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

fn arb_threshold() -> impl Strategy<Value = Threshold> {
    prop_oneof![
        Just(Threshold::All),
        arb_severity().prop_map(Threshold::Severity),
    ]
}

fn arb_vulnerability() -> impl Strategy<Value = Vulnerability> {
    (prop::option::of(arb_severity()), "[A-Z]{4}-[0-9]{1,4}").prop_map(|(severity, id)| {
        Vulnerability {
            id: Some(id),
            severity,
            ..Vulnerability::default()
        }
    })
}

fn arb_dependency_warning() -> impl Strategy<Value = DependencyWarning> {
    (
        "[a-z][a-z0-9-]{0,15}",
        prop::collection::vec("[a-z]+(-[a-z]+)?", 0..3),
    )
        .prop_map(|(package, kinds)| DependencyWarning {
            package,
            version: "1.0.0".to_string(),
            warnings: kinds.into_iter().map(WarningEntry::new).collect(),
        })
}

fn arb_payload() -> impl Strategy<Value = CompactedPayload> {
    (
        prop::collection::vec("[a-z ]{1,20}", 0..3),
        prop::collection::vec(arb_dependency_warning(), 0..6),
        prop::collection::vec(arb_vulnerability(), 0..8),
    )
        .prop_map(|(globals, warnings, vulnerabilities)| CompactedPayload {
            warnings: globals.into_iter().map(GlobalWarning::new).collect(),
            dependencies: CompactedDependencies {
                warnings,
                vulnerabilities,
            },
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn exceeds_matches_rank_comparison(value in prop::option::of(arb_severity()), threshold in arb_threshold()) {
        prop_assert_eq!(exceeds(value, threshold), rank(value) >= threshold_rank(threshold));
    }

    #[test]
    fn every_severity_exceeds_all(value in prop::option::of(arb_severity())) {
        prop_assert!(exceeds(value, Threshold::All));
    }

    #[test]
    fn status_is_failure_iff_any_evidence(payload in arb_payload(), threshold in arb_threshold()) {
        let interpreted = interpret(&payload, &config_with_threshold(threshold));
        let any_evidence = !interpreted.data.warnings.is_empty()
            || !interpreted.data.dependencies.warnings.is_empty()
            || !interpreted.data.dependencies.vulnerabilities.is_empty();
        prop_assert_eq!(interpreted.status == PipelineStatus::Failure, any_evidence);
    }

    #[test]
    fn evidence_respects_filters(payload in arb_payload(), threshold in arb_threshold()) {
        let interpreted = interpret(&payload, &config_with_threshold(threshold));
        prop_assert_eq!(&interpreted.data.warnings, &payload.warnings);
        prop_assert!(interpreted.data.dependencies.warnings.iter().all(|d| d.has_warnings()));
        prop_assert!(interpreted
            .data
            .dependencies
            .vulnerabilities
            .iter()
            .all(|v| exceeds(v.severity, threshold)));
        let expected_vulns = payload
            .dependencies
            .vulnerabilities
            .iter()
            .filter(|v| exceeds(v.severity, threshold))
            .count();
        prop_assert_eq!(interpreted.data.dependencies.vulnerabilities.len(), expected_vulns);
    }

    #[test]
    fn interpretation_is_byte_identical_across_runs(payload in arb_payload(), threshold in arb_threshold()) {
        let cfg = config_with_threshold(threshold);
        let first = serde_json::to_vec(&interpret(&payload, &cfg)).unwrap();
        let second = serde_json::to_vec(&interpret(&payload, &cfg)).unwrap();
        prop_assert_eq!(first, second);
    }
}
