use crate::model::{describe_dependency_warning, describe_vulnerability};
use depgate_types::InterpretedPayload;

/// Render evidence as GitHub Actions workflow command annotations.
///
/// Format: `::{level} title={title}::{message}`. Vulnerabilities are errors, warnings are
/// warnings.
pub fn render_github_annotations(payload: &InterpretedPayload) -> Vec<String> {
    let data = &payload.data;
    let mut out = Vec::new();

    for w in &data.warnings {
        out.push(annotation("warning", "depgate global warning", w.as_str()));
    }
    for d in &data.dependencies.warnings {
        out.push(annotation(
            "warning",
            "depgate dependency warning",
            &describe_dependency_warning(d),
        ));
    }
    for v in &data.dependencies.vulnerabilities {
        out.push(annotation(
            "error",
            "depgate vulnerability",
            &describe_vulnerability(v),
        ));
    }

    out
}

fn annotation(level: &str, title: &str, message: &str) -> String {
    let message = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::{} title={}::{}", level, title, message)
}
