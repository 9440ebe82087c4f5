//! Filesystem adapters: load the exclusion file, discover templates, read and parse them.
//!
//! This crate is allowed to do filesystem IO. Evaluation itself lives in `idguard-domain`.

#![forbid(unsafe_code)]

mod discover;
mod exclusions;
mod parse;

pub use discover::{Discovery, SkippedFile, TEMPLATE_EXTENSIONS, discover_templates};
pub use exclusions::{LoadedExclusions, load_exclusion_list};
pub use parse::{TemplateError, parse_template, read_template};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    use idguard_types::RepoPath;

    /// Parse arbitrary text as a JSON template. **Never panics** on any input.
    pub fn parse_json_template(text: &str) -> Result<usize, super::TemplateError> {
        let path = RepoPath::new("fuzz/template.json");
        super::parse_template(&path, text).map(|t| t.resources.len())
    }

    /// Parse arbitrary text as a YAML template. **Never panics** on any input.
    pub fn parse_yaml_template(text: &str) -> Result<usize, super::TemplateError> {
        let path = RepoPath::new("fuzz/template.yaml");
        super::parse_template(&path, text).map(|t| t.resources.len())
    }
}
