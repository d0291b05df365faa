use crate::{ScanError, ScanOptions, Scanner};
use camino::{Utf8Path, Utf8PathBuf};
use depgate_domain::Strategy;
use depgate_types::ScanPayload;
use tracing::debug;

/// Payload file looked up in the root directory when none is given.
pub const DEFAULT_PAYLOAD_FILE: &str = "depgate-payload.json";

/// Loads a scan payload JSON produced by an external scanner.
#[derive(Clone, Debug)]
pub struct PayloadFileScanner {
    path: Utf8PathBuf,
}

impl Default for PayloadFileScanner {
    fn default() -> Self {
        Self::new(DEFAULT_PAYLOAD_FILE)
    }
}

impl PayloadFileScanner {
    /// Relative paths are resolved against the root directory at scan time.
    pub fn new<P: Into<Utf8PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn resolve_path(&self, root_dir: &Utf8Path) -> Utf8PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            root_dir.join(&self.path)
        }
    }
}

impl Scanner for PayloadFileScanner {
    fn scan(&self, root_dir: &Utf8Path, options: &ScanOptions) -> Result<ScanPayload, ScanError> {
        let path = self.resolve_path(root_dir);
        if !path.exists() {
            return Err(ScanError::NotFound {
                path: path.to_string(),
            });
        }

        debug!(%path, strategy = options.strategy.as_str(), "loading scan payload");

        let text = std::fs::read_to_string(&path).map_err(|source| ScanError::Read {
            path: path.to_string(),
            source,
        })?;
        let mut payload: ScanPayload =
            serde_json::from_str(&text).map_err(|source| ScanError::Parse {
                path: path.to_string(),
                source,
            })?;

        // Without a vulnerability source the scan carries warnings only.
        if options.strategy == Strategy::Disabled {
            for record in payload.dependencies.values_mut() {
                record.vulnerabilities.clear();
            }
        }

        debug!(
            dependencies = payload.dependencies.len(),
            vulnerabilities = payload.vulnerability_count(),
            "scan payload loaded"
        );

        Ok(payload)
    }
}
