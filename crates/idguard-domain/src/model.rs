use idguard_types::{RepoPath, TemplateFormat};

/// A decoded template reduced to what the naming rule needs.
#[derive(Clone, Debug)]
pub struct TemplateModel {
    pub path: RepoPath,
    pub format: TemplateFormat,

    /// Entries of `Resources`, in source order.
    pub resources: Vec<ResourceDecl>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceDecl {
    /// Key under `Resources`, exactly as written (not yet normalized).
    pub logical_id: String,

    /// `Type` when present and a string. Anything else is `None`.
    pub resource_type: Option<String>,
}

impl ResourceDecl {
    pub fn new(logical_id: impl Into<String>, resource_type: Option<&str>) -> Self {
        Self {
            logical_id: logical_id.into(),
            resource_type: resource_type.map(str::to_string),
        }
    }
}
