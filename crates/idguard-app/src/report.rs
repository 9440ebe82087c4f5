use anyhow::Context;
use idguard_types::{
    ExclusionSummary, Finding, IdguardReport, RunCounts, SCHEMA_REPORT_V1, Severity, ToolMeta,
    Verdict, ids,
};
use time::OffsetDateTime;

pub fn serialize_report(report: &IdguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// A failing report carrying a single `tool.runtime` error and no files.
pub fn runtime_error_report(exclusion_file: &str, message: &str) -> IdguardReport {
    let now = OffsetDateTime::now_utc();
    IdguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "idguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        duration_ms: 0,
        verdict: Verdict::Fail,
        counts: RunCounts::default(),
        exclusions: ExclusionSummary {
            path: exclusion_file.to_string(),
            found: false,
            entries: 0,
        },
        files: Vec::new(),
        errors: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the tool error and re-run idguard.".to_string()),
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
    }
}
