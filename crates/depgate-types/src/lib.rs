//! Stable DTOs and IDs used across the depgate workspace.
//!
//! This crate is intentionally boring:
//! - severity labels and the policy threshold
//! - the scan payload shape read from the external scanner
//! - the interpreted payload handed to reporters
//! - the JSON report envelope

#![forbid(unsafe_code)]

pub mod ids;
pub mod interpreted;
pub mod payload;
pub mod report;
pub mod severity;

pub use interpreted::{DependencyFindings, InterpretedData, InterpretedPayload, PipelineStatus};
pub use payload::{
    DependencyRecord, DependencyWarning, Extra, GlobalWarning, ScanPayload, VersionRecord,
    Vulnerability, WarningEntry,
};
pub use report::{ConfigSummary, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta};
pub use severity::{Severity, Threshold};
