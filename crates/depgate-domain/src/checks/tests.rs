use super::{
    CheckCategory, CheckOutcome, check_dependency_vulnerabilities, check_dependency_warnings,
    check_global_warnings,
};
use crate::test_support::{config_with_threshold, dep_warning, vuln};
use depgate_types::{GlobalWarning, Severity, Threshold, ids};

#[test]
fn global_warnings_fail_when_present_and_keep_the_full_list() {
    let warnings = vec![
        GlobalWarning::new("package.json unreadable"),
        GlobalWarning::new("lockfile missing"),
    ];

    let outcome = check_global_warnings(&warnings);

    assert!(outcome.status());
    assert_eq!(outcome.category(), CheckCategory::GlobalWarnings);
    let CheckOutcome::GlobalWarnings(result) = outcome else {
        panic!("expected global warnings outcome");
    };
    assert_eq!(result.matched, warnings);
}

#[test]
fn global_warnings_pass_when_empty() {
    let outcome = check_global_warnings(&[]);
    assert!(!outcome.status());
    assert_eq!(outcome.matched_count(), 0);
}

#[test]
fn dependency_warnings_filter_out_dependencies_without_warnings() {
    let deps = vec![
        dep_warning("a", &[]),
        dep_warning("b", &["unsafe-import"]),
        dep_warning("c", &[]),
    ];

    let outcome = check_dependency_warnings(&deps);

    assert!(outcome.status());
    let CheckOutcome::DependencyWarnings(result) = outcome else {
        panic!("expected dependency warnings outcome");
    };
    assert_eq!(result.matched.len(), 1);
    assert_eq!(result.matched[0].package, "b");
}

#[test]
fn dependency_warnings_pass_when_every_list_is_empty() {
    let outcome = check_dependency_warnings(&[dep_warning("a", &[])]);
    assert!(!outcome.status());
    assert_eq!(outcome.matched_count(), 0);
}

#[test]
fn vulnerabilities_at_or_above_threshold_are_kept_in_order() {
    let cfg = config_with_threshold(Severity::High.into());
    let vulns = vec![
        vuln(Some(Severity::Critical)),
        vuln(Some(Severity::Low)),
        vuln(Some(Severity::High)),
        vuln(None),
    ];

    let outcome = check_dependency_vulnerabilities(&vulns, &cfg);

    assert!(outcome.status());
    let CheckOutcome::DependencyVulnerabilities(result) = outcome else {
        panic!("expected vulnerabilities outcome");
    };
    let kept: Vec<Option<Severity>> = result.matched.iter().map(|v| v.severity).collect();
    assert_eq!(kept, vec![Some(Severity::Critical), Some(Severity::High)]);
}

#[test]
fn vulnerabilities_below_threshold_pass() {
    let cfg = config_with_threshold(Severity::High.into());
    let outcome = check_dependency_vulnerabilities(&[vuln(Some(Severity::Low))], &cfg);
    assert!(!outcome.status());
}

#[test]
fn threshold_all_keeps_unlabeled_vulnerabilities() {
    let cfg = config_with_threshold(Threshold::All);
    let outcome = check_dependency_vulnerabilities(&[vuln(None), vuln(Some(Severity::Info))], &cfg);
    assert!(outcome.status());
    assert_eq!(outcome.matched_count(), 2);
}

#[test]
fn checks_are_pure() {
    let cfg = config_with_threshold(Severity::Medium.into());
    let vulns = vec![vuln(Some(Severity::Medium)), vuln(Some(Severity::Low))];
    let before = vulns.clone();

    let first = check_dependency_vulnerabilities(&vulns, &cfg);
    let second = check_dependency_vulnerabilities(&vulns, &cfg);

    assert_eq!(first, second);
    assert_eq!(vulns, before);
}

#[test]
fn category_keys_are_pairwise_distinct() {
    let keys = [
        CheckCategory::GlobalWarnings.key(),
        CheckCategory::DependencyWarnings.key(),
        CheckCategory::DependencyVulnerabilities.key(),
    ];
    assert_eq!(
        keys,
        [
            ids::KEY_GLOBAL_WARNINGS,
            ids::KEY_DEPENDENCY_WARNINGS,
            ids::KEY_DEPENDENCY_VULNERABILITIES
        ]
    );
    for (i, a) in keys.iter().enumerate() {
        for b in keys.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
