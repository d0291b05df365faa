//! `.depgate-ignore`: dependency warnings to drop, per warning kind.
//!
//! ```json
//! { "warnings": { "unsafe-import": ["left-pad", "@acme/*"] } }
//! ```

use crate::error::ConfigError;
use depgate_domain::IgnorePatterns;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub const IGNORE_FILE_NAME: &str = ".depgate-ignore";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct IgnoreFileV1 {
    /// Warning kind -> package name globs.
    #[serde(default)]
    pub warnings: BTreeMap<String, Vec<String>>,
}

/// Parse and validate ignore file contents.
pub fn parse_ignore_file(text: &str) -> Result<IgnorePatterns, ConfigError> {
    let file: IgnoreFileV1 =
        serde_json::from_str(text).map_err(|e| ConfigError::InvalidIgnoreFile(e.to_string()))?;
    IgnorePatterns::new(file.warnings).map_err(|e| ConfigError::InvalidIgnoreFile(e.to_string()))
}

/// Resolve ignore patterns from optional file contents.
///
/// A missing file means no ignores. An invalid file is reported and replaced by an empty one,
/// so a broken ignore file never silences warnings.
pub fn load_ignore_patterns(text: Option<&str>) -> IgnorePatterns {
    let Some(text) = text else {
        debug!("no ignore file; nothing ignored");
        return IgnorePatterns::default();
    };

    match parse_ignore_file(text) {
        Ok(patterns) => {
            debug!(kinds = patterns.entries().len(), "ignore file loaded");
            patterns
        }
        Err(err) => {
            warn!("{err}; an empty one will be used instead");
            IgnorePatterns::default()
        }
    }
}
