//! Configuration types for repo-warden
//!
//! Tool settings loaded from an optional TOML file and/or environment
//! variables. Credentials are not part of this structure; they always come
//! from `ORG_NAME` / `GITHUB_TOKEN` (see [`crate::auth::Credentials`]).

use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub connection settings
    pub github: GitHubConfig,

    /// Where policy files live
    pub policy: PolicyConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// GitHub connection configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// REST API base URL (GitHub Enterprise Server: `https://host/api/v3`)
    pub api_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Whether to verify TLS certificates
    pub verify_ssl: bool,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            timeout_secs: 30,
            verify_ssl: true,
        }
    }
}

impl GitHubConfig {
    /// API base URL without a trailing slash
    pub fn base_url(&self) -> String {
        self.api_url.trim_end_matches('/').to_string()
    }
}

/// Default locations of policy files, relative to the working directory
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Directory of per-repository policy files, used by `sync`
    pub repositories_dir: PathBuf,

    /// Aggregate manifest, used by `validate`
    pub manifest: PathBuf,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            repositories_dir: PathBuf::from("repositories"),
            manifest: PathBuf::from("repositories.yml"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format (pretty, json)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output
    #[default]
    Pretty,
    /// JSON structured output
    Json,
}
