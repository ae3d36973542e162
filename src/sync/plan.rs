//! Desired vs. current team diff

use crate::github::Team;
use std::collections::HashSet;

/// Grant for one desired team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upsert {
    pub team: String,
    /// The team already had some access; only affects the wording of the
    /// status line, the call is issued either way
    pub already_granted: bool,
}

/// Calls needed to converge one repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessPlan {
    /// Every desired team, in desired order
    pub upserts: Vec<Upsert>,
    /// Current teams that are not desired, in the order GitHub listed them
    pub removals: Vec<String>,
}

impl AccessPlan {
    /// Compare desired team slugs against the teams GitHub reports.
    ///
    /// The reported permission level is ignored: every desired team gets an
    /// upsert so the configured level always wins.
    pub fn compute(desired: &[String], current: &[Team]) -> Self {
        let current_slugs: HashSet<&str> = current.iter().map(|t| t.slug.as_str()).collect();
        let desired_slugs: HashSet<&str> = desired.iter().map(String::as_str).collect();

        let mut seen = HashSet::new();
        let upserts = desired
            .iter()
            .filter(|team| seen.insert(team.as_str()))
            .map(|team| Upsert {
                team: team.clone(),
                already_granted: current_slugs.contains(team.as_str()),
            })
            .collect();

        let mut removed = HashSet::new();
        let removals = current
            .iter()
            .map(|t| t.slug.as_str())
            .filter(|slug| !desired_slugs.contains(slug) && removed.insert(*slug))
            .map(str::to_string)
            .collect();

        Self { upserts, removals }
    }

    pub fn is_empty(&self) -> bool {
        self.upserts.is_empty() && self.removals.is_empty()
    }
}
