//! Error types for repo-warden
//!
//! This module defines the error hierarchy used throughout the application.
//! Precondition errors (`AuthError`, `ConfigError`, `PolicyError`) abort a run;
//! `GitHubError`s are turned into per-entry failures by the runners.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("GitHub API error: {0}")]
    GitHub(#[from] GitHubError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Settings-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },

    #[error("Missing required configuration: {field}")]
    Missing { field: String },
}

/// Errors raised while loading policy files
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("cannot list policy directory {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{path} not found")]
    ManifestNotFound { path: PathBuf },

    #[error("{path} has no repos defined under \"repos\"")]
    EmptyManifest { path: PathBuf },

    #[error("{path} is missing required key \"permission\"")]
    MissingPermission { path: PathBuf },

    #[error(
        "Invalid permission \"{input}\". Use one of: pull | triage | push | maintain | admin"
    )]
    InvalidPermission { input: String },
}

/// GitHub API specific errors
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("GitHub API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Not Found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized: invalid or expired token")]
    Unauthorized,

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Invalid response from GitHub: {0}")]
    InvalidResponse(String),
}

impl GitHubError {
    /// Create an appropriate error from an HTTP status code and response body
    ///
    /// GitHub error bodies look like `{"message": "...", "documentation_url": "..."}`;
    /// the `message` field is preferred over the raw body when present.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_message(body);
        match status {
            401 => GitHubError::Unauthorized,
            403 => GitHubError::Forbidden {
                message: message.unwrap_or_else(|| "insufficient permissions".into()),
            },
            404 => GitHubError::NotFound {
                resource: message.unwrap_or_else(|| "requested resource".into()),
            },
            _ => GitHubError::Api {
                status,
                message: message.unwrap_or_else(|| {
                    if body.is_empty() {
                        format!("HTTP {}", status)
                    } else {
                        body.to_string()
                    }
                }),
            },
        }
    }
}

fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{var} is required")]
    MissingEnv { var: &'static str },

    #[error("Invalid token format")]
    InvalidToken,
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for policy loading
pub type PolicyResult<T> = std::result::Result<T, PolicyError>;

/// Result type alias for GitHub API operations
pub type GitHubResult<T> = std::result::Result<T, GitHubError>;
