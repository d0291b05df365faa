//! Check functions and their typed outcomes.
//!
//! Each check evaluates one condition over one slice of the compacted payload and returns a
//! verdict plus evidence. Checks are pure: same input, same outcome.

use depgate_types::{
    DependencyWarning, GlobalWarning, InterpretedData, Vulnerability, ids,
};

mod dependency_vulnerabilities;
mod dependency_warnings;
mod global_warnings;

#[cfg(test)]
mod tests;

pub use dependency_vulnerabilities::check_dependency_vulnerabilities;
pub use dependency_warnings::check_dependency_warnings;
pub use global_warnings::check_global_warnings;

/// Evidence category. One per leaf of the evidence tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckCategory {
    GlobalWarnings,
    DependencyWarnings,
    DependencyVulnerabilities,
}

impl CheckCategory {
    /// Dotted path of this category's evidence in the interpreted payload.
    pub fn key(self) -> &'static str {
        match self {
            CheckCategory::GlobalWarnings => ids::KEY_GLOBAL_WARNINGS,
            CheckCategory::DependencyWarnings => ids::KEY_DEPENDENCY_WARNINGS,
            CheckCategory::DependencyVulnerabilities => ids::KEY_DEPENDENCY_VULNERABILITIES,
        }
    }
}

/// Verdict plus evidence of a single check. `status == true` means the gate fails.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckResult<T> {
    pub status: bool,
    pub matched: Vec<T>,
}

impl<T> CheckResult<T> {
    /// Fails whenever there is any evidence.
    pub fn from_matched(matched: Vec<T>) -> Self {
        Self {
            status: !matched.is_empty(),
            matched,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CheckOutcome {
    GlobalWarnings(CheckResult<GlobalWarning>),
    DependencyWarnings(CheckResult<DependencyWarning>),
    DependencyVulnerabilities(CheckResult<Vulnerability>),
}

impl CheckOutcome {
    pub fn category(&self) -> CheckCategory {
        match self {
            CheckOutcome::GlobalWarnings(_) => CheckCategory::GlobalWarnings,
            CheckOutcome::DependencyWarnings(_) => CheckCategory::DependencyWarnings,
            CheckOutcome::DependencyVulnerabilities(_) => CheckCategory::DependencyVulnerabilities,
        }
    }

    pub fn status(&self) -> bool {
        match self {
            CheckOutcome::GlobalWarnings(r) => r.status,
            CheckOutcome::DependencyWarnings(r) => r.status,
            CheckOutcome::DependencyVulnerabilities(r) => r.status,
        }
    }

    pub fn matched_count(&self) -> usize {
        match self {
            CheckOutcome::GlobalWarnings(r) => r.matched.len(),
            CheckOutcome::DependencyWarnings(r) => r.matched.len(),
            CheckOutcome::DependencyVulnerabilities(r) => r.matched.len(),
        }
    }

    /// Write this outcome's evidence at its key. Each variant owns a distinct leaf.
    pub fn merge_into(self, data: &mut InterpretedData) {
        match self {
            CheckOutcome::GlobalWarnings(r) => data.warnings = r.matched,
            CheckOutcome::DependencyWarnings(r) => data.dependencies.warnings = r.matched,
            CheckOutcome::DependencyVulnerabilities(r) => {
                data.dependencies.vulnerabilities = r.matched
            }
        }
    }
}
