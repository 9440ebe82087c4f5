//! Shared test utilities for the idguard workspace.
//!
//! `xtask` needs `normalize_nondeterministic` at runtime (not behind
//! `#[cfg(test)]`), so this lives in its own crate.

use serde_json::Value;

const VERSION_PLACEHOLDER: &str = "__VERSION__";
const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// 1. **Root-only**: `tool.version` becomes `"__VERSION__"` only when the root
///    object is a report envelope (`schema`, `tool`, `verdict`, `files`).
///    Finding `data` payloads are never rewritten.
///
/// 2. **Recursive**: `started_at` and `finished_at` become `"__TIMESTAMP__"`
///    and `duration_ms` becomes `0` at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = ["schema", "tool", "verdict", "files"]
            .iter()
            .all(|k| obj.contains_key(*k));
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("name")
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String(VERSION_PLACEHOLDER.to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if let Some(v) = map.get_mut(key) {
                    *v = Value::String(TIMESTAMP_PLACEHOLDER.to_string());
                }
            }
            if let Some(v) = map.get_mut("duration_ms") {
                *v = Value::Number(0.into());
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_envelope_version_timestamps_and_duration() {
        let input = json!({
            "schema": "idguard.report.v1",
            "tool": { "name": "idguard", "version": "0.1.0" },
            "started_at": "2025-01-01T00:00:00Z",
            "finished_at": "2025-01-01T00:00:01Z",
            "duration_ms": 1000,
            "verdict": "pass",
            "files": []
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "__VERSION__");
        assert_eq!(result["tool"]["name"], "idguard");
        assert_eq!(result["started_at"], "__TIMESTAMP__");
        assert_eq!(result["finished_at"], "__TIMESTAMP__");
        assert_eq!(result["duration_ms"], 0);
    }

    #[test]
    fn finding_data_is_untouched() {
        let input = json!({
            "schema": "idguard.report.v1",
            "tool": { "name": "idguard", "version": "0.1.0" },
            "verdict": "fail",
            "files": [
                {
                    "finding": {
                        "data": {
                            "schema": "fake",
                            "tool": { "name": "inner", "version": "9.9.9" },
                            "verdict": "pass",
                            "files": []
                        }
                    }
                }
            ]
        });

        let result = normalize_nondeterministic(input);

        assert_eq!(result["tool"]["version"], "__VERSION__");
        assert_eq!(
            result["files"][0]["finding"]["data"]["tool"]["version"], "9.9.9",
            "nested tool.version should NOT be normalized"
        );
    }

    #[test]
    fn non_envelope_root_keeps_version() {
        let input = json!({ "tool": { "name": "x", "version": "1.0" } });
        let result = normalize_nondeterministic(input);
        assert_eq!(result["tool"]["version"], "1.0");
    }

    #[test]
    fn normalization_is_idempotent() {
        let input = json!({
            "schema": "idguard.report.v1",
            "tool": { "name": "idguard", "version": "0.1.0" },
            "started_at": "2025-01-01T00:00:00Z",
            "verdict": "pass",
            "files": []
        });
        let once = normalize_nondeterministic(input);
        let twice = normalize_nondeterministic(once.clone());
        assert_eq!(once, twice);
    }
}
