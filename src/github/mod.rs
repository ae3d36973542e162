//! GitHub API module
//!
//! Provides a typed client for the handful of GitHub REST endpoints that
//! manage team access to repositories.

pub mod api;
pub mod client;
pub mod types;

pub use api::RepoAccessApi;
pub use client::GitHubClient;
pub use types::*;
