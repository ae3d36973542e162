//! Configuration and credential loading tests

use repo_warden::auth::Credentials;
use repo_warden::config::{LogFormat, load_config, load_config_from_str};
use repo_warden::error::AuthError;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

const FULL_CONFIG: &str = r#"
[github]
api_url = "https://ghe.company.com/api/v3"
timeout_secs = 60
verify_ssl = false

[policy]
repositories_dir = "access/repos"
manifest = "access/repositories.yml"

[logging]
level = "debug"
format = "json"
"#;

#[test]
fn test_full_config() {
    let config = load_config_from_str(FULL_CONFIG).unwrap();

    assert_eq!(config.github.api_url, "https://ghe.company.com/api/v3");
    assert_eq!(config.github.timeout_secs, 60);
    assert!(!config.github.verify_ssl);

    assert_eq!(config.policy.repositories_dir, PathBuf::from("access/repos"));
    assert_eq!(config.policy.manifest, PathBuf::from("access/repositories.yml"));

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_partial_config_keeps_defaults() {
    let config = load_config_from_str("[logging]\nlevel = \"info\"\n").unwrap();
    assert_eq!(config.github.api_url, "https://api.github.com");
    assert_eq!(config.policy.repositories_dir, PathBuf::from("repositories"));
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn test_invalid_log_format() {
    let result = load_config_from_str("[logging]\nformat = \"xml\"\n");
    assert!(result.is_err());
}

#[test]
#[serial_test::serial]
fn test_env_overrides_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("repo-warden.toml");
    fs::write(&config_path, FULL_CONFIG).unwrap();

    unsafe {
        env::set_var("REPO_WARDEN__GITHUB__API_URL", "https://api.example.test");
        env::set_var("REPO_WARDEN__GITHUB__TIMEOUT_SECS", "5");
    }

    let config = load_config(Some(config_path.to_str().unwrap()));

    unsafe {
        env::remove_var("REPO_WARDEN__GITHUB__API_URL");
        env::remove_var("REPO_WARDEN__GITHUB__TIMEOUT_SECS");
    }

    let config = config.unwrap();
    assert_eq!(config.github.api_url, "https://api.example.test");
    assert_eq!(config.github.timeout_secs, 5);
    // Untouched keys still come from the file
    assert_eq!(config.logging.level, "debug");
}

#[test]
#[serial_test::serial]
fn test_credentials_from_env() {
    unsafe {
        env::set_var("ORG_NAME", "acme");
        env::set_var("GITHUB_TOKEN", "ghp_test");
    }

    let creds = Credentials::from_env();

    unsafe {
        env::remove_var("ORG_NAME");
        env::remove_var("GITHUB_TOKEN");
    }

    let creds = creds.unwrap();
    assert_eq!(creds.organization, "acme");
    assert_eq!(creds.token.expose_secret(), "ghp_test");
    assert!(!format!("{creds:?}").contains("ghp_test"));
}

#[test]
#[serial_test::serial]
fn test_credentials_missing_token() {
    unsafe {
        env::set_var("ORG_NAME", "acme");
        env::remove_var("GITHUB_TOKEN");
    }

    let err = Credentials::from_env().unwrap_err();

    unsafe {
        env::remove_var("ORG_NAME");
    }

    assert!(matches!(err, AuthError::MissingEnv { var: "GITHUB_TOKEN" }));
    assert_eq!(err.to_string(), "GITHUB_TOKEN is required");
}
