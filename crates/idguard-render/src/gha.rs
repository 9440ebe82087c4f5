use idguard_types::{IdguardReport, Severity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line},col={col}::[{check_id}:{code}] {message}`
pub fn render_github_annotations(report: &IdguardReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in report.findings() {
        let level = match f.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "notice",
        };

        let mut meta = String::new();
        if let Some(loc) = &f.location {
            meta.push_str(&format!("file={}", loc.path.as_str()));
            if let Some(line) = loc.line {
                meta.push_str(&format!(",line={}", line));
            }
            if let Some(col) = loc.col {
                meta.push_str(&format!(",col={}", col));
            }
        }

        let message = format!("[{}:{}] {}", f.check_id, f.code, f.message)
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A");

        if meta.is_empty() {
            out.push(format!("::{}::{}", level, message));
        } else {
            out.push(format!("::{} {}::{}", level, meta, message));
        }
    }

    out
}
