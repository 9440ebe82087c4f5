use crate::model::{ResourceDecl, TemplateModel};
use crate::policy::ExclusionSet;
use idguard_types::{RepoPath, TemplateFormat};

pub fn resource(logical_id: &str, resource_type: Option<&str>) -> ResourceDecl {
    ResourceDecl::new(logical_id, resource_type)
}

pub fn template(resources: Vec<ResourceDecl>) -> TemplateModel {
    TemplateModel {
        path: RepoPath::new("stacks/app.yaml"),
        format: TemplateFormat::Yaml,
        resources,
    }
}

pub fn exclusions(ids: &[&str]) -> ExclusionSet {
    ids.iter().collect()
}
