//! Declarative GitHub team access
//!
//! Keeps the teams that can reach each repository of an organization in line
//! with YAML policy files, and checks that declared repositories exist.
//!
//! ## Commands
//!
//! - `sync` reads `repositories/*.yml`, lists the teams on each repository,
//!   grants every declared team the configured permission and revokes the rest
//! - `validate` reads `repositories.yml` and confirms each repository is
//!   visible to the token
//!
//! Both need `ORG_NAME` and `GITHUB_TOKEN` in the environment and exit with
//! status 1 if anything failed.
//!
//! ## Permissions
//!
//! ```text
//! read | pull → pull      triage → triage      write | push → push
//! maintain → maintain     admin → admin
//! ```
//!
//! An unknown permission aborts the run before any API call. An entry without
//! `repository` is reported and skipped while the others still run.

pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod github;
pub mod policy;
pub mod report;
pub mod sync;
pub mod util;
pub mod validate;

// Re-export main types
pub use config::{AppConfig, load_config};
pub use error::{AppError, Result};
pub use github::{GitHubClient, RepoAccessApi};
pub use policy::{Permission, PolicyEntry, PolicySource};
pub use report::{Console, RunSummary};
