//! GitHub API client
//!
//! Provides a typed HTTP client for the GitHub REST API. Requests are sent
//! once; failures are reported to the caller without retrying.

use crate::auth::BoxedAuthProvider;
use crate::config::GitHubConfig;
use crate::error::{GitHubError, GitHubResult};
use crate::github::api::RepoAccessApi;
use crate::github::types::{Repository, Team, TeamRepoPermission};
use crate::policy::Permission;
use crate::util::{QueryBuilder, encode_segment};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, instrument};

/// Page size for list endpoints (GitHub's maximum)
pub const PAGE_SIZE: usize = 100;

const API_VERSION: &str = "2022-11-28";

/// GitHub API client bound to one organization
pub struct GitHubClient {
    http: Client,
    base_url: String,
    organization: String,
    auth: BoxedAuthProvider,
}

impl GitHubClient {
    /// Create a new GitHub client from configuration
    pub fn new(
        config: &GitHubConfig,
        organization: impl Into<String>,
        auth: BoxedAuthProvider,
    ) -> GitHubResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(API_VERSION),
        );

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.verify_ssl)
            .default_headers(headers)
            .user_agent(format!("repo-warden/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(GitHubError::Request)?;

        debug!(
            base_url = %config.base_url(),
            auth = auth.auth_type(),
            "Created GitHub client"
        );

        Ok(Self {
            http,
            base_url: config.base_url(),
            organization: organization.into(),
            auth,
        })
    }

    /// Build a URL for an API endpoint
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Add authentication to a request
    async fn authenticate(&self, request: RequestBuilder) -> GitHubResult<RequestBuilder> {
        let header = self
            .auth
            .get_auth_header()
            .await
            .map_err(|e| GitHubError::Api {
                status: 401,
                message: e.to_string(),
            })?;

        Ok(request.header(header.header_name(), header.header_value()))
    }

    /// Send a request once and map error statuses
    async fn execute(&self, request: RequestBuilder) -> GitHubResult<Response> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(GitHubError::from_response(status.as_u16(), &body))
    }

    /// Make a GET request
    #[instrument(skip(self), fields(endpoint = %endpoint))]
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> GitHubResult<T> {
        let request = self.http.get(self.url(endpoint));
        let request = self.authenticate(request).await?;

        let response = self.execute(request).await?;
        let data = response.json().await.map_err(|e| {
            GitHubError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        Ok(data)
    }

    /// Make a PUT request that expects no content in response (HTTP 204)
    #[instrument(skip(self, body), fields(endpoint = %endpoint))]
    pub async fn put_no_content<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> GitHubResult<()> {
        let request = self.http.put(self.url(endpoint)).json(body);
        let request = self.authenticate(request).await?;

        self.execute(request).await?;
        Ok(())
    }

    /// Make a DELETE request
    #[instrument(skip(self), fields(endpoint = %endpoint))]
    pub async fn delete(&self, endpoint: &str) -> GitHubResult<()> {
        let request = self.http.delete(self.url(endpoint));
        let request = self.authenticate(request).await?;

        self.execute(request).await?;
        Ok(())
    }

    /// `/orgs/{org}/teams/{team}/repos/{org}/{repo}`
    fn team_repo_path(&self, team: &str, repo: &str) -> String {
        let org = encode_segment(&self.organization);
        format!(
            "/orgs/{org}/teams/{}/repos/{org}/{}",
            encode_segment(team),
            encode_segment(repo)
        )
    }

    /// `/repos/{org}/{repo}`
    fn repo_path(&self, repo: &str) -> String {
        format!(
            "/repos/{}/{}",
            encode_segment(&self.organization),
            encode_segment(repo)
        )
    }
}

#[async_trait]
impl RepoAccessApi for GitHubClient {
    fn organization(&self) -> &str {
        &self.organization
    }

    async fn list_repo_teams(&self, repo: &str) -> GitHubResult<Vec<Team>> {
        let base = format!("{}/teams", self.repo_path(repo));
        let mut teams = Vec::new();
        let mut page = 1;

        loop {
            let query = QueryBuilder::new()
                .param("per_page", PAGE_SIZE)
                .param("page", page)
                .build();
            let batch: Vec<Team> = self.get(&format!("{base}{query}")).await?;
            let len = batch.len();
            teams.extend(batch);

            if len < PAGE_SIZE {
                break;
            }
            page += 1;
        }

        debug!(repository = repo, count = teams.len(), "Listed repository teams");
        Ok(teams)
    }

    async fn set_team_permission(
        &self,
        team: &str,
        repo: &str,
        permission: Permission,
    ) -> GitHubResult<()> {
        self.put_no_content(
            &self.team_repo_path(team, repo),
            &TeamRepoPermission { permission },
        )
        .await
    }

    async fn remove_team(&self, team: &str, repo: &str) -> GitHubResult<()> {
        self.delete(&self.team_repo_path(team, repo)).await
    }

    async fn get_repository(&self, repo: &str) -> GitHubResult<Repository> {
        self.get(&self.repo_path(repo)).await
    }
}
