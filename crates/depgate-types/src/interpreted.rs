use crate::{DependencyWarning, GlobalWarning, Vulnerability};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStatus {
    Success,
    Failure,
}

impl PipelineStatus {
    pub fn is_failure(self) -> bool {
        matches!(self, PipelineStatus::Failure)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PipelineStatus::Success => "success",
            PipelineStatus::Failure => "failure",
        }
    }
}

/// Aggregated verdict and evidence for one run.
///
/// This is the stable shape reporters consume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InterpretedPayload {
    pub status: PipelineStatus,
    pub data: InterpretedData,
}

/// Evidence tree. Each leaf is owned by exactly one check key (see `ids`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InterpretedData {
    /// `warnings`
    pub warnings: Vec<GlobalWarning>,
    pub dependencies: DependencyFindings,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DependencyFindings {
    /// `dependencies.warnings`
    pub warnings: Vec<DependencyWarning>,
    /// `dependencies.vulnerabilities`
    pub vulnerabilities: Vec<Vulnerability>,
}
