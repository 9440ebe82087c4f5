use camino::{Utf8Path, Utf8PathBuf};
use idguard_types::RepoPath;
use std::path::PathBuf;
use walkdir::WalkDir;

/// File name endings selected for validation (case-sensitive).
pub const TEMPLATE_EXTENSIONS: &[&str] = &[".json", ".yaml", ".yml"];

/// Result of walking the root directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Candidate templates, sorted.
    pub templates: Vec<RepoPath>,
    /// Candidates removed by a skip fragment, sorted.
    pub skipped: Vec<SkippedFile>,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SkippedFile {
    pub path: RepoPath,
    /// The fragment that matched.
    pub fragment: String,
}

/// Discover template files under `root`.
///
/// Behavior:
/// - walks `root` recursively without descending into symlinked directories;
/// - keeps files whose name ends with one of [`TEMPLATE_EXTENSIONS`], including
///   symlinks to files and dangling symlinks (the latter surface as read errors);
/// - a candidate whose root-relative path contains any of `skip_fragments` is
///   reported in `skipped` instead of `templates`;
/// - walk errors and non-UTF-8 paths are logged and ignored.
///
/// Both lists are sorted by path so the order does not depend on the filesystem.
pub fn discover_templates(root: &Utf8Path, skip_fragments: &[String]) -> anyhow::Result<Discovery> {
    if !root.is_dir() {
        anyhow::bail!("root directory does not exist: {root}");
    }

    let mut out = Discovery::default();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        if !is_file_entry(&entry) {
            continue;
        }
        let Some(abs) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 path");
            continue;
        };
        let Some(name) = abs.file_name() else { continue };
        if !is_template_name(name) {
            continue;
        }

        let rel = RepoPath::new(abs.strip_prefix(root).unwrap_or(&abs).as_str());

        match skip_fragments.iter().find(|f| rel.as_str().contains(f.as_str())) {
            Some(fragment) => {
                tracing::debug!(path = %rel, fragment = %fragment, "skipping excluded file");
                out.skipped.push(SkippedFile {
                    path: rel,
                    fragment: fragment.clone(),
                });
            }
            None => {
                tracing::debug!(path = %rel, "discovered template");
                out.templates.push(rel);
            }
        }
    }

    // Stable order.
    out.templates.sort();
    out.skipped.sort();

    Ok(out)
}

fn is_file_entry(entry: &walkdir::DirEntry) -> bool {
    if !entry.path_is_symlink() {
        return entry.file_type().is_file();
    }
    match std::fs::metadata(entry.path()) {
        Ok(meta) => meta.is_file(),
        Err(err) => {
            tracing::debug!(path = %entry.path().display(), error = %err, "dangling symlink");
            true
        }
    }
}

fn is_template_name(name: &str) -> bool {
    TEMPLATE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
