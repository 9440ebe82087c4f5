//! Fuzz target for JSON and YAML template parsing.
//!
//! Goal: The parsers should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_template_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Non UTF-8 input is a read error before parsing is attempted.
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = idguard_repo::fuzz::parse_json_template(text);
        let _ = idguard_repo::fuzz::parse_yaml_template(text);
    }
});
