use crate::model::{CiConfig, DepgateConfigV1, VulnerabilitiesConfig};
use depgate_types::ids;

pub const DEFAULT_STRATEGY: &str = "npm";
pub const DEFAULT_VULNERABILITY_SEVERITY: &str = "medium";
pub const DEFAULT_WARNINGS: &str = "error";
pub const DEFAULT_REPORTERS: &[&str] = &[ids::REPORTER_CONSOLE];

/// Config file with every default spelled out.
pub fn recommended_config() -> DepgateConfigV1 {
    DepgateConfigV1 {
        schema: Some(ids::SCHEMA_CONFIG_V1.to_string()),
        strategy: Some(DEFAULT_STRATEGY.to_string()),
        ci: CiConfig {
            reporters: Some(DEFAULT_REPORTERS.iter().map(|r| r.to_string()).collect()),
            warnings: Some(DEFAULT_WARNINGS.to_string()),
            vulnerabilities: VulnerabilitiesConfig {
                severity: Some(DEFAULT_VULNERABILITY_SEVERITY.to_string()),
            },
        },
    }
}
