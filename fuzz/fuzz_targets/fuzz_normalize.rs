//! Fuzz target for identifier normalization and the naming rule.
//!
//! Goal: normalization is idempotent and never leaves surrounding whitespace;
//! the naming rule never panics on any id/type pair.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_normalize
//! ```

#![no_main]

use arbitrary::Arbitrary;
use idguard_domain::checks::logical_id;
use idguard_domain::clean_identifier;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct NamingInput {
    logical_id: String,
    resource_type: Option<String>,
}

fuzz_target!(|input: NamingInput| {
    if input.logical_id.len() > 1024 {
        return;
    }

    let once = clean_identifier(&input.logical_id);
    assert_eq!(clean_identifier(&once), once);
    assert_eq!(once.trim(), once);

    let _ = logical_id::check(&once, input.resource_type.as_deref());
});
