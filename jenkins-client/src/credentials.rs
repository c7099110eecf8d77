//! Credential resolution
//!
//! Jenkins authenticates API reads with HTTP Basic Authentication using a
//! username and an API token. The token is required; the username is
//! optional and, when absent, is sent as the empty string so the encoded
//! pair becomes `":token"`. Jenkins accepts this for token-only identities
//! and the behavior is preserved as-is.

use crate::error::{ClientError, Result};

/// Environment variable holding the required Jenkins API token
pub const TOKEN_ENV: &str = "JENKINS_TOKEN";

/// Environment variable holding the optional Jenkins username
pub const USER_ENV: &str = "JENKINS_USER";

/// Credentials for HTTP Basic Authentication against Jenkins
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Username, if configured
    pub username: Option<String>,
    /// API token
    pub token: String,
}

impl Credentials {
    /// Returns the `(username, token)` pair used for Basic auth encoding
    ///
    /// An unset username maps to the empty string, producing the `":token"`
    /// credential pair.
    pub fn basic_pair(&self) -> (&str, &str) {
        (self.username.as_deref().unwrap_or(""), &self.token)
    }
}

/// Source of Jenkins credentials
///
/// Injected into [`crate::JenkinsClient`] at construction so tests can
/// substitute fakes. Resolution happens per request, never at startup:
/// a missing token is detected lazily, on first use, and is a hard failure
/// before any network I/O.
pub trait CredentialProvider: Send + Sync {
    /// Resolve credentials, failing with [`ClientError::Configuration`]
    /// when the token is absent or empty
    fn resolve(&self) -> Result<Credentials>;
}

/// Reads credentials from the process environment
///
/// Expected environment variables:
/// - `JENKINS_TOKEN` (required)
/// - `JENKINS_USER` (optional)
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialProvider for EnvCredentials {
    fn resolve(&self) -> Result<Credentials> {
        resolve_from(
            std::env::var(TOKEN_ENV).ok(),
            std::env::var(USER_ENV).ok(),
        )
    }
}

/// Builds credentials from raw lookup results
///
/// Configuration absence is not transient, so there is nothing to retry;
/// the failure is logged and surfaced to the caller.
fn resolve_from(token: Option<String>, username: Option<String>) -> Result<Credentials> {
    match token {
        Some(token) if !token.is_empty() => Ok(Credentials { username, token }),
        _ => {
            tracing::error!("Jenkins API token not found in environment");
            Err(ClientError::Configuration(
                "Jenkins API token not configured.".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_configuration_error() {
        let err = resolve_from(None, Some("alice".to_string())).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("token not configured"));
    }

    #[test]
    fn test_empty_token_is_configuration_error() {
        let err = resolve_from(Some(String::new()), None).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_token_with_username() {
        let creds = resolve_from(Some("secret".to_string()), Some("alice".to_string())).unwrap();
        assert_eq!(creds.basic_pair(), ("alice", "secret"));
    }

    #[test]
    fn test_token_without_username_yields_empty_user() {
        let creds = resolve_from(Some("secret".to_string()), None).unwrap();
        assert_eq!(creds.basic_pair(), ("", "secret"));
    }
}
