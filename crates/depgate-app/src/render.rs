//! Render use cases: Markdown and GitHub annotations from a saved report.

use depgate_types::ReportEnvelope;

pub fn render_markdown(report: &ReportEnvelope) -> String {
    depgate_render::render_markdown(&report.result, &report.config)
}

pub fn render_annotations(report: &ReportEnvelope, max: usize) -> Vec<String> {
    depgate_render::render_github_annotations(&report.result)
        .into_iter()
        .take(max)
        .collect()
}
