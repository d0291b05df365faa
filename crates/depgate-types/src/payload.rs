//! Scan payload produced by the external scanner.
//!
//! Only `warnings` (global) and the per-dependency `warnings` / `vulnerabilities` are read by
//! depgate. Every other field is kept in a flattened `extra` map and passed through untouched.

use crate::Severity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Opaque pass-through fields. Sorted for deterministic serialization.
pub type Extra = BTreeMap<String, JsonValue>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScanPayload {
    /// Warnings not attributable to a single dependency.
    #[serde(default)]
    pub warnings: Vec<GlobalWarning>,

    /// Dependency name -> scanned record.
    #[serde(default)]
    pub dependencies: BTreeMap<String, DependencyRecord>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl ScanPayload {
    pub fn vulnerability_count(&self) -> usize {
        self.dependencies
            .values()
            .map(|d| d.vulnerabilities.len())
            .sum()
    }
}

/// A manifest-level warning (e.g. an unreadable `package.json`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct GlobalWarning(pub String);

impl GlobalWarning {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DependencyRecord {
    /// Version -> per-version scan data.
    #[serde(default)]
    pub versions: BTreeMap<String, VersionRecord>,

    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VersionRecord {
    #[serde(default)]
    pub warnings: Vec<WarningEntry>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// A single warning raised against a dependency's source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WarningEntry {
    /// Warning kind, e.g. `unsafe-import` or `obfuscated-code`.
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl WarningEntry {
    pub fn new<S: Into<String>>(kind: S) -> Self {
        Self {
            kind: kind.into(),
            file: None,
            extra: Extra::new(),
        }
    }
}

/// A vulnerability record. Only `severity` is interpreted; it may be absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Vulnerability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Compacted view of one dependency version and its warnings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DependencyWarning {
    pub package: String,
    pub version: String,
    pub warnings: Vec<WarningEntry>,
}

impl DependencyWarning {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
