//! Severity ranking.
//!
//! The ordinal table is fixed: info/all=0, low=1, medium=2, high=3, critical=4.

use depgate_types::{Severity, Threshold};

/// Rank given to a vulnerability the scanner did not label.
///
/// Lowest ordinal: an unlabeled vulnerability only fails the gate under an `info`/`all`
/// threshold. This may under-report risk for malformed scanner data; it is a policy choice
/// kept public so callers and reports can state it.
pub const UNLABELED_SEVERITY_RANK: u8 = 0;

fn severity_rank(severity: Severity) -> u8 {
    match severity {
        Severity::Info => 0,
        Severity::Low => 1,
        Severity::Medium => 2,
        Severity::High => 3,
        Severity::Critical => 4,
    }
}

/// Ordinal of a (possibly missing) vulnerability severity.
pub fn rank(severity: Option<Severity>) -> u8 {
    severity
        .map(severity_rank)
        .unwrap_or(UNLABELED_SEVERITY_RANK)
}

/// Ordinal of a policy threshold. `all` shares the lowest rank with `info`.
pub fn threshold_rank(threshold: Threshold) -> u8 {
    match threshold {
        Threshold::Severity(severity) => severity_rank(severity),
        Threshold::All => 0,
    }
}

/// Inclusive comparison: a value at the threshold exceeds it.
pub fn exceeds(value: Option<Severity>, threshold: Threshold) -> bool {
    rank(value) >= threshold_rank(threshold)
}
