//! Exclusion-list parsing and run settings resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves settings provided as strings.

#![forbid(unsafe_code)]

mod exclusions;
mod resolve;

pub use exclusions::parse_exclusion_list;
pub use resolve::{
    DEFAULT_EXCLUSION_FILE, DEFAULT_ROOT, DEFAULT_SKIP_FRAGMENTS, Overrides, ResolvedSettings,
    resolve_settings,
};
