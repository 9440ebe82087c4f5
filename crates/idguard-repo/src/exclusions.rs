use anyhow::Context;
use camino::Utf8Path;
use idguard_domain::ExclusionSet;
use idguard_settings::parse_exclusion_list;
use std::io::ErrorKind;

/// The exclusion set plus whether its file existed.
#[derive(Clone, Debug, Default)]
pub struct LoadedExclusions {
    pub set: ExclusionSet,
    pub found: bool,
}

/// Load the exclusion file at `path`.
///
/// A missing file is not an error: the run continues with an empty set and
/// `found == false`. Any other read failure is returned.
pub fn load_exclusion_list(path: &Utf8Path) -> anyhow::Result<LoadedExclusions> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            let set = parse_exclusion_list(&text);
            tracing::debug!(path = %path, entries = set.len(), "loaded exclusion list");
            Ok(LoadedExclusions { set, found: true })
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path, "exclusion file not found; no logical ids will be skipped");
            Ok(LoadedExclusions::default())
        }
        Err(err) => Err(err).with_context(|| format!("read exclusion file {path}")),
    }
}
