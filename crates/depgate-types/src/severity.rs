use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity label attached to a vulnerability by the scanner.
///
/// No `Ord` on purpose: ordering lives in the domain ranker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Info,
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum severity (inclusive) that makes a vulnerability fail the gate.
///
/// `All` is the policy-only sentinel: no effective floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Threshold {
    Severity(Severity),
    All,
}

impl Threshold {
    pub fn as_str(self) -> &'static str {
        match self {
            Threshold::Severity(s) => s.as_str(),
            Threshold::All => "all",
        }
    }
}

impl From<Severity> for Threshold {
    fn from(value: Severity) -> Self {
        Threshold::Severity(value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
