use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical root-relative path used in findings and reports.
///
/// Normalization rules:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - empty input becomes `.`
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct RepoPath(String);

impl Default for RepoPath {
    fn default() -> Self {
        RepoPath::new(".")
    }
}

impl RepoPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path component (`a/b/template.yaml` -> `template.yaml`).
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Resolve against a filesystem root.
    pub fn resolve(&self, root: &Utf8Path) -> Utf8PathBuf {
        root.join(self.as_str())
    }
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Utf8Path> for RepoPath {
    fn from(value: &Utf8Path) -> Self {
        RepoPath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for RepoPath {
    fn from(value: Utf8PathBuf) -> Self {
        RepoPath::new(value.as_str())
    }
}
