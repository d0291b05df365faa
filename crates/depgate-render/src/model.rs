use depgate_types::{DependencyWarning, PipelineStatus, Vulnerability};

pub fn status_label(status: PipelineStatus) -> &'static str {
    match status {
        PipelineStatus::Success => "PASS",
        PipelineStatus::Failure => "FAIL",
    }
}

/// `package id (severity): title`, with placeholders for missing fields.
pub fn describe_vulnerability(v: &Vulnerability) -> String {
    let mut out = String::new();
    if let Some(package) = &v.package {
        out.push_str(package);
        out.push(' ');
    }
    out.push_str(v.id.as_deref().unwrap_or("<no id>"));
    out.push_str(&format!(
        " ({})",
        v.severity.map(|s| s.as_str()).unwrap_or("unlabeled")
    ));
    if let Some(title) = &v.title {
        out.push_str(&format!(": {}", title));
    }
    out
}

/// `package@version: kind, kind`
pub fn describe_dependency_warning(d: &DependencyWarning) -> String {
    let kinds: Vec<&str> = d.warnings.iter().map(|w| w.kind.as_str()).collect();
    format!("{}@{}: {}", d.package, d.version, kinds.join(", "))
}
