//! Authentication provider trait

use crate::error::AuthError;
// async_trait required for dyn-compatibility with Box<dyn AuthProvider>
use async_trait::async_trait;

/// Authentication provider trait
///
/// Implementations supply the header attached to every GitHub API request.
/// Tokens are static today; a GitHub App installation token would implement
/// this trait and mint a fresh token inside `get_auth_header`.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Get the authentication header for the next request
    async fn get_auth_header(&self) -> Result<AuthHeader, AuthError>;

    /// Get a description of the auth method (for logging)
    fn auth_type(&self) -> &'static str;
}

/// Authentication header to use with requests
#[derive(Debug, Clone)]
pub enum AuthHeader {
    /// `Authorization: Bearer <token>` (fine-grained and classic PATs, app tokens)
    Bearer(String),
}

impl AuthHeader {
    /// Get the header name for this auth type
    pub fn header_name(&self) -> &'static str {
        match self {
            AuthHeader::Bearer(_) => "Authorization",
        }
    }

    /// Get the header value for this auth type
    pub fn header_value(&self) -> String {
        match self {
            AuthHeader::Bearer(token) => format!("Bearer {}", token),
        }
    }
}

/// Box type alias for auth providers
pub type BoxedAuthProvider = Box<dyn AuthProvider>;
