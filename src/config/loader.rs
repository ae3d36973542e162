//! Configuration loader with layered sources
//!
//! Loads settings from multiple sources with the following precedence
//! (highest to lowest):
//! 1. Environment variables (REPO_WARDEN__*)
//! 2. Configuration file (TOML)
//! 3. Default values

use crate::config::types::AppConfig;
use crate::error::ConfigError;
use config::{Config, Environment, File, FileFormat};
use std::path::Path;

/// Default configuration file paths to check (in order)
const DEFAULT_CONFIG_PATHS: &[&str] = &[
    "repo-warden.toml",
    ".repo-warden.toml",
    "~/.config/repo-warden/config.toml",
];

/// Load configuration from a TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(toml_str, FileFormat::Toml))
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Load configuration from files and environment
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        // Explicit path provided - must exist
        let expanded = shellexpand::tilde(path);
        if !Path::new(expanded.as_ref()).exists() {
            return Err(ConfigError::Load(format!(
                "Configuration file not found: {}",
                path
            )));
        }
        builder = builder.add_source(File::new(&expanded, FileFormat::Toml));
    } else {
        // Try default paths (first existing one wins)
        for path in DEFAULT_CONFIG_PATHS {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                builder = builder.add_source(File::new(&expanded, FileFormat::Toml));
                break;
            }
        }
    }

    // e.g., REPO_WARDEN__GITHUB__API_URL, REPO_WARDEN__POLICY__MANIFEST
    // Double underscore (__) maps to nested keys (github.api_url)
    builder = builder.add_source(
        Environment::with_prefix("REPO_WARDEN")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::Load(e.to_string()))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate configuration values
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.github.api_url.is_empty() {
        return Err(ConfigError::Missing {
            field: "github.api_url".to_string(),
        });
    }

    if !config.github.api_url.starts_with("http://")
        && !config.github.api_url.starts_with("https://")
    {
        return Err(ConfigError::Invalid {
            message: format!(
                "github.api_url must start with http:// or https://, got: {}",
                config.github.api_url
            ),
        });
    }

    if config.github.timeout_secs == 0 {
        return Err(ConfigError::Invalid {
            message: "github.timeout_secs must be greater than 0".to_string(),
        });
    }

    if config.policy.repositories_dir.as_os_str().is_empty() {
        return Err(ConfigError::Missing {
            field: "policy.repositories_dir".to_string(),
        });
    }

    if config.policy.manifest.as_os_str().is_empty() {
        return Err(ConfigError::Missing {
            field: "policy.manifest".to_string(),
        });
    }

    Ok(())
}
