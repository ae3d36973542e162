//! GitHub API response types
//!
//! Only the fields repo-warden reads are declared; serde ignores the rest.

use crate::policy::Permission;
use serde::{Deserialize, Serialize};

/// A team with access to a repository (`GET /repos/{owner}/{repo}/teams`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u64,
    pub slug: String,
    pub name: String,
    /// Level GitHub reports for this repository; informational only
    #[serde(default)]
    pub permission: Option<String>,
}

/// A repository (`GET /repos/{owner}/{repo}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub visibility: Option<String>,
}

/// Body of `PUT /orgs/{org}/teams/{team_slug}/repos/{owner}/{repo}`
#[derive(Debug, Clone, Serialize)]
pub struct TeamRepoPermission {
    pub permission: Permission,
}
