use crate::fingerprint::fingerprint_for_resource;
use idguard_types::{Finding, Location, RepoPath, Severity, ids};
use serde_json::json;

/// Why a resource failed the naming rule.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("missing or invalid resource type")]
    InvalidResourceType {
        logical_id: String,
        resource_type: Option<String>,
    },

    #[error("logical id does not match expected suffix")]
    SuffixMismatch {
        logical_id: String,
        resource_type: String,
        expected_suffix: String,
    },
}

impl Violation {
    pub fn logical_id(&self) -> &str {
        match self {
            Violation::InvalidResourceType { logical_id, .. }
            | Violation::SuffixMismatch { logical_id, .. } => logical_id,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Violation::InvalidResourceType { .. } => ids::CODE_INVALID_RESOURCE_TYPE,
            Violation::SuffixMismatch { .. } => ids::CODE_LOGICAL_ID_SUFFIX_MISMATCH,
        }
    }

    /// Report form of this violation for the template at `path`.
    pub fn to_finding(&self, path: &RepoPath) -> Finding {
        let (message, help, data) = match self {
            Violation::InvalidResourceType {
                logical_id,
                resource_type,
            } => (
                format!("Missing or invalid resource type for '{logical_id}' in '{path}'."),
                "Declare a namespaced type with at least two '::'-separated segments.".to_string(),
                json!({
                    "logical_id": logical_id,
                    "resource_type": resource_type,
                    "reason": self.to_string(),
                }),
            ),
            Violation::SuffixMismatch {
                logical_id,
                resource_type,
                expected_suffix,
            } => (
                format!(
                    "Logical ID '{logical_id}' for resource '{resource_type}' in '{path}' is not compliant with the expected format (expected suffix '{expected_suffix}')."
                ),
                format!("Rename the logical ID so it ends with '{expected_suffix}', or add it to the exclusion list."),
                json!({
                    "logical_id": logical_id,
                    "resource_type": resource_type,
                    "expected_suffix": expected_suffix,
                    "reason": self.to_string(),
                }),
            ),
        };

        Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TEMPLATE_LOGICAL_ID.to_string(),
            code: self.code().to_string(),
            message,
            location: Some(Location {
                path: path.clone(),
                line: None,
                col: None,
            }),
            help: Some(help),
            url: None,
            fingerprint: Some(fingerprint_for_resource(
                ids::CHECK_TEMPLATE_LOGICAL_ID,
                self.code(),
                path.as_str(),
                self.logical_id(),
            )),
            data,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateOutcome {
    Compliant,
    NonCompliant(Violation),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateEvaluation {
    /// Normalized logical ids skipped through the exclusion set, in source order.
    pub excluded: Vec<String>,
    pub outcome: TemplateOutcome,
}

impl TemplateEvaluation {
    pub fn is_compliant(&self) -> bool {
        matches!(self.outcome, TemplateOutcome::Compliant)
    }

    pub fn violation(&self) -> Option<&Violation> {
        match &self.outcome {
            TemplateOutcome::Compliant => None,
            TemplateOutcome::NonCompliant(v) => Some(v),
        }
    }
}
