//! Shared helpers for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use repo_warden::auth::TokenProvider;
use repo_warden::config::GitHubConfig;
use repo_warden::error::{GitHubError, GitHubResult};
use repo_warden::github::{GitHubClient, RepoAccessApi, Repository, Team};
use repo_warden::policy::Permission;
use repo_warden::report::Console;
use repo_warden::util::SecretString;
use std::collections::{HashMap, HashSet};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use wiremock::MockServer;

/// Create a client pointing at the mock server
pub fn create_test_client(mock_server: &MockServer, token: &str) -> GitHubClient {
    let config = GitHubConfig {
        api_url: mock_server.uri(),
        timeout_secs: 30,
        verify_ssl: true,
    };
    let auth = TokenProvider::new(SecretString::new(token)).unwrap();
    GitHubClient::new(&config, "acme", Box::new(auth)).unwrap()
}

/// Shared in-memory sink; both console streams land in one buffer in order
#[derive(Clone, Default)]
pub struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Console writing stdout and stderr lines into one captured buffer
pub fn capture_console() -> (Console, CapturedOutput) {
    let output = CapturedOutput::default();
    (Console::new(output.clone(), output.clone()), output)
}

/// A call observed by [`FakeGitHub`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(String),
    Set(String, String, Permission),
    Remove(String, String),
    Get(String),
}

/// In-memory organization: repository name -> teams with access
#[derive(Default)]
pub struct FakeGitHub {
    repos: Mutex<HashMap<String, Vec<Team>>>,
    calls: Mutex<Vec<Call>>,
    fail_list: HashSet<String>,
    fail_team: HashSet<String>,
    hidden: HashSet<String>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a repository whose teams are listed in this order
    pub fn with_repo(self, repo: &str, teams: &[&str]) -> Self {
        let teams = teams.iter().map(|slug| team(slug)).collect();
        self.repos.lock().unwrap().insert(repo.to_string(), teams);
        self
    }

    /// Listing teams of `repo` fails with a server error
    pub fn failing_list(mut self, repo: &str) -> Self {
        self.fail_list.insert(repo.to_string());
        self
    }

    /// Any upsert or removal for `team` fails
    pub fn failing_team(mut self, team: &str) -> Self {
        self.fail_team.insert(team.to_string());
        self
    }

    /// `repo` exists but the token cannot see it
    pub fn hidden(mut self, repo: &str) -> Self {
        self.hidden.insert(repo.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Mutating calls only
    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Set(..) | Call::Remove(..)))
            .collect()
    }

    pub fn teams_of(&self, repo: &str) -> Vec<String> {
        self.repos
            .lock()
            .unwrap()
            .get(repo)
            .map(|teams| teams.iter().map(|t| t.slug.clone()).collect())
            .unwrap_or_default()
    }

    fn not_found(repo: &str) -> GitHubError {
        GitHubError::NotFound {
            resource: format!("repository {repo}"),
        }
    }
}

pub fn team(slug: &str) -> Team {
    Team {
        id: slug.len() as u64,
        slug: slug.to_string(),
        name: slug.to_string(),
        permission: Some("pull".to_string()),
    }
}

#[async_trait]
impl RepoAccessApi for FakeGitHub {
    fn organization(&self) -> &str {
        "acme"
    }

    async fn list_repo_teams(&self, repo: &str) -> GitHubResult<Vec<Team>> {
        self.calls.lock().unwrap().push(Call::List(repo.to_string()));
        if self.fail_list.contains(repo) {
            return Err(GitHubError::Api {
                status: 502,
                message: "Bad Gateway".into(),
            });
        }
        self.repos
            .lock()
            .unwrap()
            .get(repo)
            .cloned()
            .ok_or_else(|| Self::not_found(repo))
    }

    async fn set_team_permission(
        &self,
        team_slug: &str,
        repo: &str,
        permission: Permission,
    ) -> GitHubResult<()> {
        self.calls.lock().unwrap().push(Call::Set(
            team_slug.to_string(),
            repo.to_string(),
            permission,
        ));
        if self.fail_team.contains(team_slug) {
            return Err(GitHubError::from_response(422, r#"{"message":"Validation Failed"}"#));
        }
        let mut repos = self.repos.lock().unwrap();
        let teams = repos.get_mut(repo).ok_or_else(|| Self::not_found(repo))?;
        match teams.iter_mut().find(|t| t.slug == team_slug) {
            Some(existing) => existing.permission = Some(permission.to_string()),
            None => {
                let mut added = team(team_slug);
                added.permission = Some(permission.to_string());
                teams.push(added);
            }
        }
        Ok(())
    }

    async fn remove_team(&self, team_slug: &str, repo: &str) -> GitHubResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Remove(team_slug.to_string(), repo.to_string()));
        if self.fail_team.contains(team_slug) {
            return Err(GitHubError::from_response(403, r#"{"message":"Must have admin rights"}"#));
        }
        let mut repos = self.repos.lock().unwrap();
        let teams = repos.get_mut(repo).ok_or_else(|| Self::not_found(repo))?;
        teams.retain(|t| t.slug != team_slug);
        Ok(())
    }

    async fn get_repository(&self, repo: &str) -> GitHubResult<Repository> {
        self.calls.lock().unwrap().push(Call::Get(repo.to_string()));
        if self.hidden.contains(repo) {
            return Err(GitHubError::from_response(403, r#"{"message":"Resource not accessible"}"#));
        }
        if !self.repos.lock().unwrap().contains_key(repo) {
            return Err(Self::not_found(repo));
        }
        Ok(Repository {
            id: 1,
            name: repo.to_string(),
            full_name: format!("acme/{repo}"),
            private: true,
            archived: repo.starts_with("old-"),
            visibility: Some("private".to_string()),
        })
    }
}
