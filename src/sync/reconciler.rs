//! Applies access plans, one repository and one call at a time

use crate::github::RepoAccessApi;
use crate::policy::{Permission, PolicyEntry};
use crate::report::{Console, RunSummary, Status};
use crate::sync::plan::{AccessPlan, Upsert};
use tracing::{debug, info};

/// Switches for a sync run
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Print the plan without calling any mutating endpoint
    pub dry_run: bool,
}

/// Converges team access for a list of policy entries
pub struct Reconciler<'a> {
    api: &'a dyn RepoAccessApi,
    options: SyncOptions,
}

impl<'a> Reconciler<'a> {
    pub fn new(api: &'a dyn RepoAccessApi, options: SyncOptions) -> Self {
        Self { api, options }
    }

    /// Process every entry in order. Failures are recorded and never stop
    /// the run.
    pub async fn run(&self, entries: &[PolicyEntry], console: &mut Console) -> RunSummary {
        let mut summary = RunSummary::default();
        for entry in entries {
            summary.entries += 1;
            self.reconcile_entry(entry, console, &mut summary).await;
        }
        info!(
            entries = summary.entries,
            failures = summary.failures.len(),
            dry_run = self.options.dry_run,
            "Sync finished"
        );
        summary
    }

    async fn reconcile_entry(
        &self,
        entry: &PolicyEntry,
        console: &mut Console,
        summary: &mut RunSummary,
    ) {
        let Some(repo) = entry.repository() else {
            let message = format!(
                "{}: entry is missing required key \"repository\"",
                entry.source
            );
            debug!(source = %entry.source, "Skipping entry without repository");
            console.headline(Status::Failure, &message);
            summary.record(None, None, message);
            return;
        };

        let Some(permission) = entry.permission else {
            let message = format!("{repo}: entry has no permission, skipping");
            debug!(repository = repo, "Skipping entry without permission");
            console.headline(Status::Failure, &message);
            summary.record(Some(repo), None, message);
            return;
        };

        console.headline(Status::Progress, format!("Processing {repo}..."));

        let current = match self.api.list_repo_teams(repo).await {
            Ok(teams) => teams,
            Err(e) => {
                debug!(repository = repo, error = %e, "Failed to list teams");
                console.headline(Status::Failure, format!("Error processing {repo}: {e}"));
                summary.record(Some(repo), None, e.to_string());
                return;
            }
        };

        let plan = AccessPlan::compute(&entry.teams, &current);
        debug!(
            repository = repo,
            upserts = plan.upserts.len(),
            removals = plan.removals.len(),
            "Computed access plan"
        );

        if plan.is_empty() {
            console.detail(Status::Warning, "No teams declared or granted");
            return;
        }

        for upsert in &plan.upserts {
            self.apply_upsert(repo, upsert, permission, console, summary)
                .await;
        }
        for team in &plan.removals {
            self.apply_removal(repo, team, console, summary).await;
        }
    }

    async fn apply_upsert(
        &self,
        repo: &str,
        upsert: &Upsert,
        permission: Permission,
        console: &mut Console,
        summary: &mut RunSummary,
    ) {
        let team = upsert.team.as_str();
        let verb = if upsert.already_granted { "update" } else { "add" };

        if self.options.dry_run {
            console.detail(
                Status::Success,
                format!("Would {verb} {team} with {permission} access"),
            );
            return;
        }

        match self.api.set_team_permission(team, repo, permission).await {
            Ok(()) if upsert.already_granted => {
                console.detail(
                    Status::Success,
                    format!("Updated {team} permission to {permission}"),
                );
            }
            Ok(()) => {
                console.detail(
                    Status::Success,
                    format!("Added {team} with {permission} access"),
                );
            }
            Err(e) => {
                debug!(repository = repo, team, error = %e, "Failed to {verb} team");
                console.detail(
                    Status::Failure,
                    format!("Failed to {verb} {team} on {repo}: {e}"),
                );
                summary.record(Some(repo), Some(team), e.to_string());
            }
        }
    }

    async fn apply_removal(
        &self,
        repo: &str,
        team: &str,
        console: &mut Console,
        summary: &mut RunSummary,
    ) {
        if self.options.dry_run {
            console.detail(Status::Removed, format!("Would remove {team} access"));
            return;
        }

        match self.api.remove_team(team, repo).await {
            Ok(()) => console.detail(Status::Removed, format!("Removed {team} access")),
            Err(e) => {
                debug!(repository = repo, team, error = %e, "Failed to remove team");
                console.detail(
                    Status::Failure,
                    format!("Failed to remove {team} from {repo}: {e}"),
                );
                summary.record(Some(repo), Some(team), e.to_string());
            }
        }
    }
}
