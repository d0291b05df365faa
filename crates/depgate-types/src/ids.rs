//! Stable identifiers for check keys and reporter ids.
//!
//! Check keys are dotted paths into the interpreted payload tree. They must stay pairwise
//! distinct: each one names exactly one leaf of `InterpretedData`.

// Check keys
pub const KEY_GLOBAL_WARNINGS: &str = "warnings";
pub const KEY_DEPENDENCY_WARNINGS: &str = "dependencies.warnings";
pub const KEY_DEPENDENCY_VULNERABILITIES: &str = "dependencies.vulnerabilities";

// Reporters
pub const REPORTER_CONSOLE: &str = "console";
pub const REPORTER_JSON: &str = "json";
pub const REPORTER_MARKDOWN: &str = "markdown";

// Config schema
pub const SCHEMA_CONFIG_V1: &str = "depgate.config.v1";
