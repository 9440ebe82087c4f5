use crate::normalize::clean_identifier;
use std::collections::BTreeSet;

/// Logical ids exempt from naming validation, stored normalized.
///
/// Global across every file in a run and never mutated once evaluation starts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    ids: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and insert. Returns `false` for blank entries and duplicates.
    pub fn insert(&mut self, raw: &str) -> bool {
        let id = clean_identifier(raw);
        if id.is_empty() {
            return false;
        }
        self.ids.insert(id)
    }

    /// Membership for an already-normalized logical id.
    pub fn contains(&self, normalized: &str) -> bool {
        self.ids.contains(normalized)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ExclusionSet::new();
        for raw in iter {
            set.insert(raw.as_ref());
        }
        set
    }
}
