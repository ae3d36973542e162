//! Entry points shared by the binary and the integration tests
//!
//! Each command loads every policy entry first. Any load error is returned
//! before the first API call; after that, failures only end up in the
//! returned [`RunSummary`].

use crate::auth::{Credentials, create_auth_provider};
use crate::config::AppConfig;
use crate::error::Result;
use crate::github::{GitHubClient, RepoAccessApi};
use crate::policy::PolicySource;
use crate::report::{Console, RunSummary};
use crate::sync::{Reconciler, SyncOptions};
use crate::validate::Validator;
use tracing::info;

/// Build the production GitHub client
pub fn connect(config: &AppConfig, credentials: &Credentials) -> Result<GitHubClient> {
    let auth = create_auth_provider(credentials)?;
    Ok(GitHubClient::new(
        &config.github,
        credentials.organization.clone(),
        auth,
    )?)
}

/// Reconcile team access for every entry in `source`
pub async fn run_sync(
    api: &dyn RepoAccessApi,
    source: &PolicySource,
    options: SyncOptions,
    console: &mut Console,
) -> Result<RunSummary> {
    let entries = source.load()?;
    info!(
        organization = api.organization(),
        entries = entries.len(),
        dry_run = options.dry_run,
        "Starting sync"
    );
    Ok(Reconciler::new(api, options).run(&entries, console).await)
}

/// Check that every repository in `source` is visible
pub async fn run_validate(
    api: &dyn RepoAccessApi,
    source: &PolicySource,
    console: &mut Console,
) -> Result<RunSummary> {
    let entries = source.load()?;
    info!(
        organization = api.organization(),
        entries = entries.len(),
        "Starting validation"
    );
    Ok(Validator::new(api).run(&entries, console).await)
}
