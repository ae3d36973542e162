//! The repository-access operations the runners depend on

use crate::error::GitHubResult;
use crate::github::types::{Repository, Team};
use crate::policy::Permission;
// async_trait keeps the trait usable as `&dyn RepoAccessApi`
use async_trait::async_trait;

/// Repository access operations, scoped to one organization
///
/// [`crate::github::GitHubClient`] is the production implementation; tests
/// substitute an in-memory fake.
#[async_trait]
pub trait RepoAccessApi: Send + Sync {
    /// Organization (owner) every call is scoped to
    fn organization(&self) -> &str;

    /// All teams with any access to `repo`
    async fn list_repo_teams(&self, repo: &str) -> GitHubResult<Vec<Team>>;

    /// Grant `team` the given permission on `repo`, replacing any existing level
    async fn set_team_permission(
        &self,
        team: &str,
        repo: &str,
        permission: Permission,
    ) -> GitHubResult<()>;

    /// Revoke all access `team` has to `repo`
    async fn remove_team(&self, team: &str, repo: &str) -> GitHubResult<()>;

    /// Fetch `repo`, failing if it does not exist or is hidden from the caller
    async fn get_repository(&self, repo: &str) -> GitHubResult<Repository>;
}
