use anyhow::Context;
use depgate_domain::RuntimeConfiguration;
use depgate_types::{InterpretedPayload, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta};
use time::OffsetDateTime;

/// Wrap an interpreted payload into the JSON report envelope.
pub fn build_report(payload: &InterpretedPayload, cfg: &RuntimeConfiguration) -> ReportEnvelope {
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "depgate".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: OffsetDateTime::now_utc(),
        config: cfg.summary(),
        result: payload.clone(),
    }
}

pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(report).context("serialize report")?;
    data.push(b'\n');
    Ok(data)
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ReportEnvelope> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse depgate v1 report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use depgate_types::{InterpretedData, PipelineStatus};

    #[test]
    fn report_roundtrips_and_rejects_foreign_schemas() {
        let payload = InterpretedPayload {
            status: PipelineStatus::Failure,
            data: InterpretedData::default(),
        };
        let cfg = depgate_settings::resolve_config(
            depgate_settings::DepgateConfigV1::default(),
            depgate_settings::Overrides::default(),
            camino::Utf8Path::new("."),
            depgate_domain::IgnorePatterns::default(),
        )
        .expect("resolve");

        let report = build_report(&payload, &cfg);
        let bytes = serialize_report(&report).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        let parsed = parse_report_json(&text).expect("parse");
        assert_eq!(parsed, report);
        assert_eq!(parsed.config.vulnerability_severity, "medium");

        let foreign = text.replace(SCHEMA_REPORT_V1, "depgate.report.v9");
        assert!(parse_report_json(&foreign).is_err());
    }
}
