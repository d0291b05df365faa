//! Pure scan interpretation (no IO).
//!
//! Input: a scan payload loaded elsewhere, plus a resolved runtime configuration.
//! Output: an interpreted payload (verdict + evidence tree).

#![forbid(unsafe_code)]

pub mod checks;
pub mod extract;
pub mod ignore;
pub mod policy;
pub mod severity;

mod pipeline;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;

pub use extract::{CompactedDependencies, CompactedPayload, extract_scan_payload};
pub use ignore::IgnorePatterns;
pub use pipeline::{PipelineCheck, interpret, run_checks};
pub use policy::{ReporterKind, RuntimeConfiguration, Strategy, WarningsPolicy};
pub use severity::{UNLABELED_SEVERITY_RANK, exceeds, rank, threshold_rank};
