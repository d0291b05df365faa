use crate::model::{describe_dependency_warning, describe_vulnerability, status_label};
use depgate_types::{ConfigSummary, InterpretedPayload};

pub fn render_markdown(payload: &InterpretedPayload, cfg: &ConfigSummary) -> String {
    let mut out = String::new();
    let data = &payload.data;

    out.push_str("# Depgate report\n\n");
    out.push_str(&format!(
        "- Verdict: **{}**\n- Threshold: `{}` (inclusive)\n- Warnings policy: `{}`\n- Strategy: `{}`\n\n",
        status_label(payload.status),
        cfg.vulnerability_severity,
        cfg.warnings,
        cfg.strategy
    ));

    if !payload.status.is_failure() {
        out.push_str("No findings.\n");
        return out;
    }

    if !data.warnings.is_empty() {
        out.push_str("## Global warnings\n\n");
        for w in &data.warnings {
            out.push_str(&format!("- {}\n", w.as_str()));
        }
        out.push('\n');
    }

    if !data.dependencies.warnings.is_empty() {
        out.push_str("## Dependency warnings\n\n");
        for d in &data.dependencies.warnings {
            out.push_str(&format!("- `{}`\n", describe_dependency_warning(d)));
        }
        out.push('\n');
    }

    if !data.dependencies.vulnerabilities.is_empty() {
        out.push_str("## Vulnerabilities\n\n");
        for v in &data.dependencies.vulnerabilities {
            out.push_str(&format!("- {}\n", describe_vulnerability(v)));
        }
        out.push('\n');
    }

    out
}
