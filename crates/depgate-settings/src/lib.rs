//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod defaults;
mod error;
mod ignore;
mod model;
mod resolve;

pub use defaults::{
    DEFAULT_REPORTERS, DEFAULT_STRATEGY, DEFAULT_VULNERABILITY_SEVERITY, DEFAULT_WARNINGS,
    recommended_config,
};
pub use error::ConfigError;
pub use ignore::{IGNORE_FILE_NAME, IgnoreFileV1, load_ignore_patterns, parse_ignore_file};
pub use model::{CiConfig, DepgateConfigV1, VulnerabilitiesConfig};
pub use resolve::{Overrides, resolve_config};

/// Default config file name, looked up in the root directory.
pub const CONFIG_FILE_NAME: &str = "depgate.toml";

/// Parse `depgate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> Result<DepgateConfigV1, ConfigError> {
    let cfg: DepgateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Render the recommended config file written by `depgate init`.
pub fn default_config_toml() -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(&recommended_config())?)
}
