use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a template finding.
///
/// Identity fields: check_id, code, template path (root-relative), logical id.
pub fn fingerprint_for_resource(
    check_id: &str,
    code: &str,
    template_path: &str,
    logical_id: &str,
) -> String {
    let canonical = [check_id, code, template_path, logical_id].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}
