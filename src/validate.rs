//! Repository existence checks
//!
//! Read-only: confirms each declared repository is visible to the token.

use crate::error::GitHubResult;
use crate::github::{RepoAccessApi, Repository};
use crate::policy::PolicyEntry;
use crate::report::{Console, RunSummary, Status};
use tracing::{debug, info};

/// Outcome of one lookup
pub type ValidationResult = GitHubResult<Repository>;

pub struct Validator<'a> {
    api: &'a dyn RepoAccessApi,
}

impl<'a> Validator<'a> {
    pub fn new(api: &'a dyn RepoAccessApi) -> Self {
        Self { api }
    }

    pub async fn run(&self, entries: &[PolicyEntry], console: &mut Console) -> RunSummary {
        let mut summary = RunSummary::default();
        let org = self.api.organization();

        for entry in entries {
            summary.entries += 1;

            let Some(repo) = entry.repository() else {
                let message = format!(
                    "{}: entry is missing required key \"repository\"",
                    entry.source
                );
                debug!(source = %entry.source, "Skipping entry without repository");
                console.headline(Status::Failure, &message);
                summary.record(None, None, message);
                continue;
            };

            console.headline(Status::Progress, format!("Validating {repo}"));

            match self.check(repo).await {
                Ok(repository) => {
                    console.detail(
                        Status::Success,
                        format!("Repo exists ({})", visibility(&repository)),
                    );
                    if repository.archived {
                        console.detail(
                            Status::Warning,
                            format!("{} is archived", repository.full_name),
                        );
                    }
                }
                Err(e) => {
                    debug!(repository = repo, error = %e, "Repository lookup failed");
                    console.detail(
                        Status::Failure,
                        format!("Repo not found or inaccessible: {org}/{repo} ({e})"),
                    );
                    summary.record(Some(repo), None, e.to_string());
                }
            }
        }

        info!(
            entries = summary.entries,
            failures = summary.failures.len(),
            "Validation finished"
        );
        summary
    }

    /// Look up a single repository
    pub async fn check(&self, repo: &str) -> ValidationResult {
        self.api.get_repository(repo).await
    }
}

fn visibility(repository: &Repository) -> &str {
    match repository.visibility.as_deref() {
        Some(v) => v,
        None if repository.private => "private",
        None => "public",
    }
}
