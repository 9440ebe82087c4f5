use idguard_domain::ExclusionSet;

/// Parse the contents of an exclusion file: one logical id per line.
///
/// Lines are normalized (escape sequences stripped, then trimmed); lines that
/// end up blank are ignored. Order and duplicates do not matter.
pub fn parse_exclusion_list(text: &str) -> ExclusionSet {
    text.lines().collect()
}
