//! Repository permission levels
//!
//! Policy files accept a few synonyms for each level; GitHub only understands
//! the canonical names (`pull`, `triage`, `push`, `maintain`, `admin`).

use crate::error::PolicyError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Team access level on a repository, least to most privileged
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    Pull,
    Triage,
    Push,
    Maintain,
    Admin,
}

impl Permission {
    /// Name used by the GitHub REST API
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Pull => "pull",
            Permission::Triage => "triage",
            Permission::Push => "push",
            Permission::Maintain => "maintain",
            Permission::Admin => "admin",
        }
    }
}

impl FromStr for Permission {
    type Err = PolicyError;

    /// Case-insensitive; `read` and `write` are accepted for `pull` and `push`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "read" | "pull" => Ok(Permission::Pull),
            "triage" => Ok(Permission::Triage),
            "write" | "push" => Ok(Permission::Push),
            "maintain" => Ok(Permission::Maintain),
            "admin" => Ok(Permission::Admin),
            _ => Err(PolicyError::InvalidPermission {
                input: input.to_string(),
            }),
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
