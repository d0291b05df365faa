use crate::InterpretedPayload;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for the JSON report.
pub const SCHEMA_REPORT_V1: &str = "depgate.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The policy a run was evaluated against, as plain labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConfigSummary {
    pub root_dir: String,
    pub strategy: String,
    pub vulnerability_severity: String,
    pub warnings: String,
    pub reporters: Vec<String>,
}

/// JSON report written by the `json` reporter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub config: ConfigSummary,
    pub result: InterpretedPayload,
}
