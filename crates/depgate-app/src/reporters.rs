//! Reporter collaborators: take the interpreted payload somewhere.

use crate::report::{build_report, serialize_report};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use depgate_domain::{ReporterKind, RuntimeConfiguration};
use depgate_types::InterpretedPayload;
use std::collections::BTreeMap;
use tracing::debug;

pub trait Reporter {
    fn report(&self, payload: &InterpretedPayload, cfg: &RuntimeConfiguration) -> anyhow::Result<()>;
}

/// Reporter implementations by id. The configuration picks which ones run, and in what order.
#[derive(Default)]
pub struct Reporters {
    registered: BTreeMap<ReporterKind, Box<dyn Reporter>>,
}

impl Reporters {
    /// Console to stdout, JSON and Markdown under `out_dir`.
    pub fn standard(out_dir: &Utf8Path) -> Self {
        Self::default()
            .with(ReporterKind::Console, ConsoleReporter)
            .with(
                ReporterKind::Json,
                JsonReporter::new(out_dir.join("report.json")),
            )
            .with(
                ReporterKind::Markdown,
                MarkdownReporter::new(out_dir.join("comment.md")),
            )
    }

    pub fn with<R: Reporter + 'static>(mut self, kind: ReporterKind, reporter: R) -> Self {
        self.registered.insert(kind, Box::new(reporter));
        self
    }

    pub fn get(&self, kind: ReporterKind) -> Option<&dyn Reporter> {
        self.registered.get(&kind).map(|r| r.as_ref())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, payload: &InterpretedPayload, cfg: &RuntimeConfiguration) -> anyhow::Result<()> {
        print!("{}", depgate_render::render_console(payload, &cfg.summary()));
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct JsonReporter {
    out: Utf8PathBuf,
}

impl JsonReporter {
    pub fn new<P: Into<Utf8PathBuf>>(out: P) -> Self {
        Self { out: out.into() }
    }
}

impl Reporter for JsonReporter {
    fn report(&self, payload: &InterpretedPayload, cfg: &RuntimeConfiguration) -> anyhow::Result<()> {
        let report = build_report(payload, cfg);
        let data = serialize_report(&report)?;
        write_file(&self.out, &data).context("write report json")?;
        debug!(path = %self.out, "json report written");
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct MarkdownReporter {
    out: Utf8PathBuf,
}

impl MarkdownReporter {
    pub fn new<P: Into<Utf8PathBuf>>(out: P) -> Self {
        Self { out: out.into() }
    }
}

impl Reporter for MarkdownReporter {
    fn report(&self, payload: &InterpretedPayload, cfg: &RuntimeConfiguration) -> anyhow::Result<()> {
        let md = depgate_render::render_markdown(payload, &cfg.summary());
        write_file(&self.out, md.as_bytes()).context("write markdown")?;
        debug!(path = %self.out, "markdown report written");
        Ok(())
    }
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory: {}", parent))?;
        }
    }
    std::fs::write(path, data).with_context(|| format!("write: {}", path))?;
    Ok(())
}
