use depgate_scan::ScanError;
use depgate_settings::ConfigError;

/// Everything that can abort a run. All variants end at the same failure boundary.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("reporter '{reporter}' failed: {message}")]
    Reporting { reporter: String, message: String },
}
