use super::{CheckOutcome, CheckResult};
use depgate_types::GlobalWarning;

/// Any global warning fails the gate. Evidence is the full list.
pub fn check_global_warnings(warnings: &[GlobalWarning]) -> CheckOutcome {
    CheckOutcome::GlobalWarnings(CheckResult::from_matched(warnings.to_vec()))
}
