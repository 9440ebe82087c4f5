//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_TEMPLATE_LOGICAL_ID: &str = "template.logical_id";
pub const CHECK_TEMPLATE_PARSE: &str = "template.parse";

// Codes: template.logical_id
pub const CODE_LOGICAL_ID_SUFFIX_MISMATCH: &str = "logical_id_suffix_mismatch";
pub const CODE_INVALID_RESOURCE_TYPE: &str = "invalid_resource_type";

// Codes: template.parse
pub const CODE_TEMPLATE_PARSE_ERROR: &str = "template_parse_error";
pub const CODE_TEMPLATE_READ_ERROR: &str = "template_read_error";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
