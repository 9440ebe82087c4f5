//! Naming rules applied to a single resource declaration.

pub mod logical_id;
