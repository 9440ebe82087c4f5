use regex::Regex;
use std::sync::LazyLock;

/// ESC, then anything up to and including the next `m` (SGR color sequences).
static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b[^m]*m").expect("static ANSI escape pattern"));

/// Strip terminal escape sequences, then surrounding whitespace.
///
/// Used for both exclusion-list lines and logical ids, so the two compare equal
/// whenever their visible text does. Idempotent.
pub fn clean_identifier(raw: &str) -> String {
    ANSI_ESCAPE.replace_all(raw, "").trim().to_string()
}
