use crate::RepoPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for idguard reports.
pub const SCHEMA_REPORT_V1: &str = "idguard.report.v1";

/// Every emitted finding fails its file, so only `error` is produced today.
/// The enum stays open so a softer severity does not change the wire shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub path: RepoPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub check_id: String,
    pub code: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Stable identifier intended for dedup and trending: a hash of
    /// `check_id + code + path + logical_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Check-specific structured payload.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFormat {
    Json,
    Yaml,
}

impl TemplateFormat {
    /// A name ending in `.json` decodes as JSON; everything else the walker
    /// selects is YAML.
    pub fn from_file_name(name: &str) -> Self {
        if name.ends_with(".json") {
            TemplateFormat::Json
        } else {
            TemplateFormat::Yaml
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TemplateFormat::Json => "JSON",
            TemplateFormat::Yaml => "YAML",
        }
    }
}

/// Per-file outcome as it appears in the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Compliant,
    NonCompliant,
    ParseError,
    ReadError,
    Skipped,
}

impl FileStatus {
    /// Whether this status should fail the run.
    pub fn is_failure(self) -> bool {
        matches!(
            self,
            FileStatus::NonCompliant | FileStatus::ParseError | FileStatus::ReadError
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FileRecord {
    pub path: RepoPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<TemplateFormat>,
    pub status: FileStatus,

    /// Logical ids skipped because they are in the exclusion list, in source order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_resources: Vec<String>,

    /// The finding that stopped evaluation of this file, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding: Option<Finding>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RunCounts {
    pub checked: u32,
    pub compliant: u32,
    pub non_compliant: u32,
    pub parse_errors: u32,
    pub read_errors: u32,
    pub skipped: u32,
}

impl RunCounts {
    pub fn from_files(files: &[FileRecord]) -> Self {
        let mut counts = RunCounts::default();
        for f in files {
            match f.status {
                FileStatus::Compliant => counts.compliant += 1,
                FileStatus::NonCompliant => counts.non_compliant += 1,
                FileStatus::ParseError => counts.parse_errors += 1,
                FileStatus::ReadError => counts.read_errors += 1,
                FileStatus::Skipped => counts.skipped += 1,
            }
        }
        counts.checked =
            counts.compliant + counts.non_compliant + counts.parse_errors + counts.read_errors;
        counts
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExclusionSummary {
    /// Exclusion file as passed on the command line.
    pub path: String,
    /// `false` when the file was absent and an empty set was used.
    pub found: bool,
    /// Number of distinct normalized identifiers loaded.
    pub entries: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The full report for one run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IdguardReport {
    /// Versioned schema identifier (`idguard.report.v1`).
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub duration_ms: u64,
    pub verdict: Verdict,
    pub counts: RunCounts,
    pub exclusions: ExclusionSummary,
    pub files: Vec<FileRecord>,

    /// Run-level failures not tied to a file (`tool.runtime`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Finding>,
}

impl IdguardReport {
    /// Run-level errors first, then per-file findings in file order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.errors
            .iter()
            .chain(self.files.iter().filter_map(|f| f.finding.as_ref()))
    }
}
