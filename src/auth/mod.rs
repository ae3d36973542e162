//! Authentication module
//!
//! Resolves the organization and token from the process environment and
//! turns the token into request headers for the GitHub API.

pub mod provider;
pub mod token;

pub use provider::{AuthHeader, AuthProvider, BoxedAuthProvider};
pub use token::{Credentials, ORG_ENV, TOKEN_ENV, TokenProvider};

use crate::error::AuthError;

/// Create an auth provider from resolved credentials
pub fn create_auth_provider(credentials: &Credentials) -> Result<BoxedAuthProvider, AuthError> {
    Ok(Box::new(TokenProvider::new(credentials.token.clone())?))
}
