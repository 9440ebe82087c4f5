use idguard_types::{
    ExclusionSummary, FileRecord, FileStatus, Finding, IdguardReport, Location, RepoPath,
    RunCounts, SCHEMA_REPORT_V1, Severity, TemplateFormat, ToolMeta, Verdict, ids,
};
use time::macros::datetime;

pub(crate) fn record(path: &str, status: FileStatus) -> FileRecord {
    let path = RepoPath::new(path);
    FileRecord {
        format: (status != FileStatus::Skipped)
            .then(|| TemplateFormat::from_file_name(path.file_name())),
        path,
        status,
        excluded_resources: Vec::new(),
        finding: None,
    }
}

pub(crate) fn finding(message: &str) -> Finding {
    Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_TEMPLATE_LOGICAL_ID.to_string(),
        code: ids::CODE_INVALID_RESOURCE_TYPE.to_string(),
        message: message.to_string(),
        location: Some(Location {
            path: RepoPath::new("stacks/bad.json"),
            line: None,
            col: None,
        }),
        help: None,
        url: None,
        fingerprint: None,
        data: serde_json::Value::Null,
    }
}

pub(crate) fn report(exclusions_found: bool, files: Vec<FileRecord>) -> IdguardReport {
    let counts = RunCounts::from_files(&files);
    let verdict = if files.iter().any(|f| f.status.is_failure()) {
        Verdict::Fail
    } else {
        Verdict::Pass
    };
    IdguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "idguard".to_string(),
            version: "0.0.0".to_string(),
        },
        started_at: datetime!(2024-01-01 00:00:00 UTC),
        finished_at: datetime!(2024-01-01 00:00:00 UTC),
        duration_ms: 0,
        verdict,
        counts,
        exclusions: ExclusionSummary {
            path: "exclusion_list.txt".to_string(),
            found: exclusions_found,
            entries: 0,
        },
        files,
        errors: Vec::new(),
    }
}
