//! Use case orchestration for depgate.
//!
//! This crate provides the application layer: the pipeline that coordinates the config source,
//! scanner, domain and reporters under one failure boundary. It is intentionally thin and
//! delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing, I/O setup and exit codes.

#![forbid(unsafe_code)]

mod error;
mod exit;
mod hooks;
mod pipeline;
mod render;
mod report;
mod reporters;
mod source;

pub use error::PipelineError;
pub use exit::ExitDecision;
pub use hooks::{NoopHooks, PipelineLogger, ScanHooks, TracingLogger};
pub use pipeline::{Collaborators, PipelineInput, PipelineOutcome, run_pipeline};
pub use render::{render_annotations, render_markdown};
pub use report::{build_report, parse_report_json, serialize_report};
pub use reporters::{ConsoleReporter, JsonReporter, MarkdownReporter, Reporter, Reporters};
pub use source::{ConfigFiles, ConfigSource, FileConfigSource, InlineConfig};
