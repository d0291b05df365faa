use depgate_domain::RuntimeConfiguration;
use depgate_types::ScanPayload;

/// Extension points around the scan call. Both default to no-ops.
pub trait ScanHooks {
    /// Runs once the configuration is resolved, right before the scanner is invoked.
    fn before_scan(&self, _cfg: &RuntimeConfiguration) {}

    /// Runs with the raw payload once the scanner returned successfully.
    fn after_scan(&self, _payload: &ScanPayload) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHooks;

impl ScanHooks for NoopHooks {}

/// Receives the description of an error that aborted the pipeline.
pub trait PipelineLogger {
    fn error(&self, message: &str);
}

/// Forwards pipeline errors to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl PipelineLogger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
