use crate::checks::logical_id;
use crate::model::TemplateModel;
use crate::normalize::clean_identifier;
use crate::policy::ExclusionSet;
use crate::report::{TemplateEvaluation, TemplateOutcome};

/// Evaluate every resource of one template, in source order.
///
/// Excluded ids are recorded and never checked. The first violation ends the
/// evaluation: later resources are not looked at.
pub fn evaluate(template: &TemplateModel, exclusions: &ExclusionSet) -> TemplateEvaluation {
    let mut excluded = Vec::new();

    for resource in &template.resources {
        let id = clean_identifier(&resource.logical_id);

        if exclusions.contains(&id) {
            excluded.push(id);
            continue;
        }

        if let Err(violation) = logical_id::check(&id, resource.resource_type.as_deref()) {
            return TemplateEvaluation {
                excluded,
                outcome: TemplateOutcome::NonCompliant(violation),
            };
        }
    }

    TemplateEvaluation {
        excluded,
        outcome: TemplateOutcome::Compliant,
    }
}
