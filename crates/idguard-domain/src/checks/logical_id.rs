use crate::report::Violation;

/// Separator between the segments of a resource type.
pub const TYPE_DELIMITER: &str = "::";

/// The suffix a logical id must end with: the last two type segments, as declared.
///
/// `AWS::S3::Bucket` -> `S3Bucket`. Returns `None` when the type has fewer than
/// two segments.
pub fn expected_suffix(resource_type: &str) -> Option<String> {
    let segments: Vec<&str> = resource_type.split(TYPE_DELIMITER).collect();
    match segments.as_slice() {
        [.., service, kind] => Some(format!("{service}{kind}")),
        _ => None,
    }
}

/// Check one resource. `logical_id` must already be normalized.
pub fn check(logical_id: &str, resource_type: Option<&str>) -> Result<(), Violation> {
    let Some(declared) = resource_type else {
        return Err(Violation::InvalidResourceType {
            logical_id: logical_id.to_string(),
            resource_type: None,
        });
    };

    let Some(suffix) = expected_suffix(declared) else {
        return Err(Violation::InvalidResourceType {
            logical_id: logical_id.to_string(),
            resource_type: Some(declared.to_string()),
        });
    };

    if logical_id.to_lowercase().ends_with(&suffix.to_lowercase()) {
        Ok(())
    } else {
        Err(Violation::SuffixMismatch {
            logical_id: logical_id.to_string(),
            resource_type: declared.to_string(),
            expected_suffix: suffix,
        })
    }
}
