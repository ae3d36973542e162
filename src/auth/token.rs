//! Token authentication and environment credentials

use crate::auth::provider::{AuthHeader, AuthProvider};
use crate::error::AuthError;
use crate::util::SecretString;
use async_trait::async_trait;

/// Environment variable holding the organization that owns the repositories
pub const ORG_ENV: &str = "ORG_NAME";

/// Environment variable holding the GitHub token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Organization and token for one run
#[derive(Debug, Clone)]
pub struct Credentials {
    pub organization: String,
    pub token: SecretString,
}

impl Credentials {
    /// Read `ORG_NAME` and `GITHUB_TOKEN` from the process environment.
    ///
    /// Both must be present and non-empty. The organization is checked first.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Resolve credentials through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AuthError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let organization = lookup(ORG_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(AuthError::MissingEnv { var: ORG_ENV })?;

        let token = lookup(TOKEN_ENV)
            .map(SecretString::new)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingEnv { var: TOKEN_ENV })?;

        Ok(Self {
            organization,
            token,
        })
    }
}

/// Static token authentication provider
#[derive(Debug, Clone)]
pub struct TokenProvider {
    token: SecretString,
}

impl TokenProvider {
    pub fn new(token: SecretString) -> Result<Self, AuthError> {
        if token.is_empty() {
            return Err(AuthError::InvalidToken);
        }
        Ok(Self { token })
    }
}

#[async_trait]
impl AuthProvider for TokenProvider {
    async fn get_auth_header(&self) -> Result<AuthHeader, AuthError> {
        Ok(AuthHeader::Bearer(self.token.expose_secret().to_string()))
    }

    fn auth_type(&self) -> &'static str {
        "Token"
    }
}
