use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::BTreeMap;

/// Dependency warnings to drop before interpretation.
///
/// Keyed by warning kind; each value is a list of package-name globs (case-sensitive).
#[derive(Clone, Debug, Default)]
pub struct IgnorePatterns {
    entries: BTreeMap<String, Vec<String>>,
    compiled: BTreeMap<String, GlobSet>,
}

impl IgnorePatterns {
    pub fn new(entries: BTreeMap<String, Vec<String>>) -> Result<Self, globset::Error> {
        let mut compiled = BTreeMap::new();
        for (kind, patterns) in &entries {
            let mut builder = GlobSetBuilder::new();
            for pattern in patterns {
                builder.add(Glob::new(pattern)?);
            }
            compiled.insert(kind.clone(), builder.build()?);
        }
        Ok(Self { entries, compiled })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|p| p.is_empty())
    }

    pub fn entries(&self) -> &BTreeMap<String, Vec<String>> {
        &self.entries
    }

    pub fn is_ignored(&self, kind: &str, package: &str) -> bool {
        self.compiled
            .get(kind)
            .map(|set| set.is_match(package))
            .unwrap_or(false)
    }
}
