//! The pipeline use case: config -> scan -> interpret -> report -> exit decision.

use crate::error::PipelineError;
use crate::exit::ExitDecision;
use crate::hooks::{PipelineLogger, ScanHooks};
use crate::reporters::Reporters;
use crate::source::{ConfigFiles, ConfigSource};
use camino::Utf8Path;
use depgate_domain::{RuntimeConfiguration, extract_scan_payload, interpret};
use depgate_scan::{ScanOptions, Scanner};
use depgate_settings::{
    DepgateConfigV1, Overrides, load_ignore_patterns, parse_config_toml, resolve_config,
};
use depgate_types::InterpretedPayload;
use tracing::debug;

/// Invocation options for one run.
#[derive(Clone, Debug)]
pub struct PipelineInput<'a> {
    pub root_dir: &'a Utf8Path,
    pub overrides: Overrides,
    /// Record a failing exit decision when the interpreted status is a failure.
    pub auto_exit_after_failure: bool,
}

impl<'a> PipelineInput<'a> {
    pub fn new(root_dir: &'a Utf8Path) -> Self {
        Self {
            root_dir,
            overrides: Overrides::default(),
            auto_exit_after_failure: true,
        }
    }
}

/// The external collaborators a run talks to.
pub struct Collaborators<'a> {
    pub config: &'a dyn ConfigSource,
    pub scanner: &'a dyn Scanner,
    pub reporters: &'a Reporters,
    pub hooks: &'a dyn ScanHooks,
    pub logger: &'a dyn PipelineLogger,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PipelineOutcome {
    /// `None` when the run was aborted by an error.
    pub payload: Option<InterpretedPayload>,
    pub exit: ExitDecision,
}

/// Run one invocation end to end.
///
/// Any error aborts the remaining stages, is forwarded to the logger, and yields an empty
/// outcome with a failing exit decision. The process exit itself is left to the caller.
pub fn run_pipeline(input: PipelineInput<'_>, collab: &Collaborators<'_>) -> PipelineOutcome {
    match run_stages(input, collab) {
        Ok(outcome) => outcome,
        Err(err) => {
            collab.logger.error(&err.to_string());
            PipelineOutcome {
                payload: None,
                exit: ExitDecision::Failure,
            }
        }
    }
}

fn run_stages(
    input: PipelineInput<'_>,
    collab: &Collaborators<'_>,
) -> Result<PipelineOutcome, PipelineError> {
    let PipelineInput {
        root_dir,
        overrides,
        auto_exit_after_failure,
    } = input;

    let ConfigFiles {
        config_text,
        ignore_text,
    } = collab.config.load(root_dir)?;
    let file_cfg = if config_text.trim().is_empty() {
        DepgateConfigV1::default()
    } else {
        parse_config_toml(&config_text)?
    };
    let ignore = load_ignore_patterns(ignore_text.as_deref());
    let cfg = resolve_config(file_cfg, overrides, root_dir, ignore)?;
    debug!(
        strategy = cfg.strategy.as_str(),
        severity = cfg.vulnerability_severity.as_str(),
        "configuration resolved"
    );

    collab.hooks.before_scan(&cfg);
    let raw = collab.scanner.scan(
        &cfg.root_dir,
        &ScanOptions {
            strategy: cfg.strategy,
        },
    )?;
    collab.hooks.after_scan(&raw);

    let compacted = extract_scan_payload(&raw, &cfg.ignore);
    let payload = interpret(&compacted, &cfg);
    debug!(status = payload.status.as_str(), "payload interpreted");

    run_reporters(collab.reporters, &payload, &cfg)?;

    let exit = if payload.status.is_failure() && auto_exit_after_failure {
        ExitDecision::Failure
    } else {
        ExitDecision::Success
    };

    Ok(PipelineOutcome {
        payload: Some(payload),
        exit,
    })
}

/// Every configured reporter runs, even after one fails. The first failure is returned once
/// all of them have settled.
fn run_reporters(
    reporters: &Reporters,
    payload: &InterpretedPayload,
    cfg: &RuntimeConfiguration,
) -> Result<(), PipelineError> {
    let mut first_error = None;

    for kind in &cfg.reporters {
        let result = match reporters.get(*kind) {
            Some(reporter) => {
                reporter
                    .report(payload, cfg)
                    .map_err(|err| PipelineError::Reporting {
                        reporter: kind.as_str().to_string(),
                        message: format!("{err:#}"),
                    })
            }
            None => Err(PipelineError::Reporting {
                reporter: kind.as_str().to_string(),
                message: "no reporter registered for this id".to_string(),
            }),
        };

        if let Err(err) = result {
            debug!(reporter = kind.as_str(), "reporter failed");
            first_error.get_or_insert(err);
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
