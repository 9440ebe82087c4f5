//! Pure template evaluation (no IO).
//!
//! Input: a template model constructed elsewhere plus the exclusion set.
//! Output: the excluded logical ids and a verdict for the file.

#![forbid(unsafe_code)]

pub mod checks;
pub mod model;
pub mod normalize;
pub mod policy;
pub mod report;

mod engine;
mod fingerprint;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
pub use normalize::clean_identifier;
pub use policy::ExclusionSet;
pub use report::{TemplateEvaluation, TemplateOutcome, Violation};
