use camino::Utf8PathBuf;

/// Directory scanned when none is given.
pub const DEFAULT_ROOT: &str = ".";

/// Exclusion file used when none is given, relative to the working directory.
pub const DEFAULT_EXCLUSION_FILE: &str = "exclusion_list.txt";

/// Path fragments that mark files which are never templates (cluster topology,
/// CI pipeline, environment manifests). Matched as substrings of the
/// root-relative path.
pub const DEFAULT_SKIP_FRAGMENTS: &[&str] = &[
    "clusters.json",
    "bamboo.yml",
    "dev.manifest.json",
    "prod.manifest.json",
];

/// Values supplied on the command line. `None` means "use the default".
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub root: Option<Utf8PathBuf>,
    pub exclusion_file: Option<Utf8PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub root: Utf8PathBuf,
    pub exclusion_file: Utf8PathBuf,
    pub skip_fragments: Vec<String>,
}

pub fn resolve_settings(overrides: Overrides) -> ResolvedSettings {
    ResolvedSettings {
        root: overrides
            .root
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_ROOT)),
        exclusion_file: overrides
            .exclusion_file
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_EXCLUSION_FILE)),
        skip_fragments: DEFAULT_SKIP_FRAGMENTS
            .iter()
            .map(|f| f.to_string())
            .collect(),
    }
}
