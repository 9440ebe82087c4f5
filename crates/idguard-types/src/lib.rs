//! Stable DTOs and IDs used across the idguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and codes
//! - canonical root-relative path handling
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod path;
pub mod report;

pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use path::RepoPath;
pub use report::{
    ExclusionSummary, FileRecord, FileStatus, Finding, IdguardReport, Location, RunCounts,
    SCHEMA_REPORT_V1, Severity, TemplateFormat, ToolMeta, Verdict,
};
