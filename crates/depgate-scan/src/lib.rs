//! Scanner adapters: obtain a scan payload for a root directory.
//!
//! depgate does not detect vulnerabilities itself. A scanner is anything that turns a root
//! directory and a strategy into a `ScanPayload`; this crate defines that seam and ships the
//! adapter that loads a payload written by an external scanner.

#![forbid(unsafe_code)]

mod file;

use camino::Utf8Path;
use depgate_domain::Strategy;
use depgate_types::ScanPayload;

pub use file::{DEFAULT_PAYLOAD_FILE, PayloadFileScanner};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    pub strategy: Strategy,
}

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("scan payload not found: {path}")]
    NotFound { path: String },

    #[error("read scan payload {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("parse scan payload {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("scanner failed: {0}")]
    Failed(String),
}

/// The scanner collaborator. Its internal concurrency and I/O are its own business.
pub trait Scanner {
    fn scan(&self, root_dir: &Utf8Path, options: &ScanOptions) -> Result<ScanPayload, ScanError>;
}

impl<F> Scanner for F
where
    F: Fn(&Utf8Path, &ScanOptions) -> Result<ScanPayload, ScanError>,
{
    fn scan(&self, root_dir: &Utf8Path, options: &ScanOptions) -> Result<ScanPayload, ScanError> {
        self(root_dir, options)
    }
}
