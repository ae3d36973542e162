//! Policy document shapes and the normalized entry handed to the runners

use crate::policy::Permission;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;

/// One per-repository policy file, or one element of the manifest's `repos`
///
/// Every field is optional here; required-field checks happen later so a
/// missing `repository` only skips that entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicyDocument {
    #[serde(default)]
    pub repository: Option<String>,

    #[serde(default)]
    pub teams: Option<Vec<String>>,

    #[serde(default)]
    pub permission: Option<String>,
}

/// Aggregate manifest: `{ repos: [ ... ] }`
///
/// Items stay untyped until the loader looks at them; an item that is not a
/// mapping only loses its own entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ManifestDocument {
    #[serde(default)]
    pub repos: Option<Vec<serde_yaml::Value>>,
}

/// Where an entry came from, for messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    /// A per-repository file
    File(String),
    /// Position inside the aggregate manifest (zero-based)
    ManifestIndex(usize),
}

impl fmt::Display for EntrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntrySource::File(name) => f.write_str(name),
            EntrySource::ManifestIndex(idx) => write!(f, "repos[{idx}]"),
        }
    }
}

/// A loaded, normalized policy entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyEntry {
    pub source: EntrySource,
    repository: Option<String>,
    /// Desired teams, duplicates removed, first occurrence wins
    pub teams: Vec<String>,
    pub permission: Option<Permission>,
}

impl PolicyEntry {
    pub fn new(
        source: EntrySource,
        repository: Option<String>,
        teams: Vec<String>,
        permission: Option<Permission>,
    ) -> Self {
        Self {
            source,
            repository,
            teams: dedup_preserving_order(teams),
            permission,
        }
    }

    /// The target repository, `None` when the key is absent or blank
    pub fn repository(&self) -> Option<&str> {
        self.repository
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

fn dedup_preserving_order(teams: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    teams
        .into_iter()
        .filter(|team| seen.insert(team.clone()))
        .collect()
}
