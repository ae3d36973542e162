//! Secret string type for the GitHub token.

use std::fmt;

/// A token wrapper whose `Debug` and `Display` print `[REDACTED]`.
///
/// Holds the GitHub token so it never shows up in `Debug` output of the
/// credentials, in tracing fields, or in error messages. The raw value is only
/// reachable through [`SecretString::expose_secret`].
///
/// ```ignore
/// let token = SecretString::new("ghp_example");
/// assert_eq!(format!("{token:?}"), "[REDACTED]");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Only the auth provider should need this, when building the
    /// `Authorization` header.
    #[inline]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        // Best-effort; copies made into request headers are not cleared.
        self.0.clear();
        self.0.shrink_to_fit();
    }
}
