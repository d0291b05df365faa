//! Rendering utilities for CI surfaces (console, Markdown, GitHub annotations).
//!
//! Renderers are pure: they turn an interpreted payload into text. Writing it anywhere is the
//! caller's job.

#![forbid(unsafe_code)]

mod console;
mod gha;
mod markdown;
mod model;

pub use console::render_console;
pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{describe_dependency_warning, describe_vulnerability, status_label};
