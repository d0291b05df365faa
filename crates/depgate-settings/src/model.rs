use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `depgate.toml` schema v1.
///
/// This is a *user-facing* config model: values stay strings here and are validated during
/// resolution, so error messages can name the offending value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DepgateConfigV1 {
    /// Optional schema string for tooling (`depgate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Vulnerability source used by the scanner: `npm`, `node`, `snyk`, `sonatype`, `none`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,

    #[serde(default)]
    pub ci: CiConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CiConfig {
    /// Reporter ids to run after interpretation: `console`, `json`, `markdown`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporters: Option<Vec<String>>,

    /// Dependency warnings policy: `error`, `warning`, `off`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<String>,

    #[serde(default)]
    pub vulnerabilities: VulnerabilitiesConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VulnerabilitiesConfig {
    /// Minimum severity (inclusive) that fails the gate, or `all`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}
