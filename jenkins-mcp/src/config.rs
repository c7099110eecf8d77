//! Server configuration
//!
//! Only transport-level settings live here. Jenkins credentials are
//! deliberately not loaded at startup: they are resolved lazily, per
//! invocation, by the credential provider injected into the client.

use std::time::Duration;

/// Environment variable overriding the request timeout, in seconds
pub const REQUEST_TIMEOUT_ENV: &str = "JENKINS_REQUEST_TIMEOUT";

/// Default bound on the single outbound Jenkins request
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum time the Jenkins API request may take before failing
    pub request_timeout: Duration,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - JENKINS_REQUEST_TIMEOUT (optional, seconds, default: 10)
    pub fn from_env() -> Self {
        let request_timeout = std::env::var(REQUEST_TIMEOUT_ENV)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        Self { request_timeout }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.request_timeout.as_secs() == 0 {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
