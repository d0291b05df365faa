use crate::model::{describe_dependency_warning, describe_vulnerability, status_label};
use depgate_types::{ConfigSummary, InterpretedPayload};

/// Plain-text summary for a terminal.
pub fn render_console(payload: &InterpretedPayload, cfg: &ConfigSummary) -> String {
    let mut out = String::new();
    let data = &payload.data;

    out.push_str(&format!("depgate: {}\n", status_label(payload.status)));
    out.push_str(&format!(
        "  policy: vulnerabilities >= {}, warnings = {}, strategy = {}\n",
        cfg.vulnerability_severity, cfg.warnings, cfg.strategy
    ));

    out.push_str(&format!("  global warnings: {}\n", data.warnings.len()));
    for w in &data.warnings {
        out.push_str(&format!("    - {}\n", w.as_str()));
    }

    out.push_str(&format!(
        "  dependency warnings: {}\n",
        data.dependencies.warnings.len()
    ));
    for d in &data.dependencies.warnings {
        out.push_str(&format!("    - {}\n", describe_dependency_warning(d)));
    }

    out.push_str(&format!(
        "  vulnerabilities: {}\n",
        data.dependencies.vulnerabilities.len()
    ));
    for v in &data.dependencies.vulnerabilities {
        out.push_str(&format!("    - {}\n", describe_vulnerability(v)));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use depgate_types::{
        DependencyFindings, GlobalWarning, InterpretedData, PipelineStatus, Severity,
        Vulnerability,
    };

    fn summary() -> ConfigSummary {
        ConfigSummary {
            root_dir: ".".to_string(),
            strategy: "npm".to_string(),
            vulnerability_severity: "high".to_string(),
            warnings: "error".to_string(),
            reporters: vec!["console".to_string()],
        }
    }

    #[test]
    fn renders_pass_with_zero_counts() {
        let payload = InterpretedPayload {
            status: PipelineStatus::Success,
            data: InterpretedData::default(),
        };
        let text = render_console(&payload, &summary());
        assert!(text.starts_with("depgate: PASS\n"));
        assert!(text.contains("vulnerabilities >= high"));
        assert!(text.contains("  vulnerabilities: 0\n"));
    }

    #[test]
    fn renders_each_failing_item() {
        let payload = InterpretedPayload {
            status: PipelineStatus::Failure,
            data: InterpretedData {
                warnings: vec![GlobalWarning::new("lockfile missing")],
                dependencies: DependencyFindings {
                    warnings: Vec::new(),
                    vulnerabilities: vec![Vulnerability {
                        id: Some("GHSA-1".to_string()),
                        severity: Some(Severity::Critical),
                        ..Vulnerability::default()
                    }],
                },
            },
        };
        let text = render_console(&payload, &summary());
        assert!(text.starts_with("depgate: FAIL\n"));
        assert!(text.contains("    - lockfile missing\n"));
        assert!(text.contains("    - GHSA-1 (critical)\n"));
    }
}
