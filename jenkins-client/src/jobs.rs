//! Job listing against the Jenkins REST API
//!
//! One endpoint is used: `GET https://{server}/api/json?tree=jobs[name,url]`.
//! The request is authenticated with HTTP Basic Authentication, bounded by a
//! fixed timeout, and never retried — a timeout or connection failure is a
//! terminal failure surfaced to the caller.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::credentials::CredentialProvider;
use crate::error::{ClientError, Result};

/// Default timeout for the job-listing request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A Jenkins job as returned by the remote server
///
/// Fields are passed through verbatim; no normalization is applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Job {
    /// Job name
    pub name: String,
    /// Absolute URL of the job on the Jenkins server
    pub url: String,
}

/// Shape of the Jenkins `api/json?tree=jobs[name,url]` response
#[derive(Debug, Deserialize)]
struct JobsResponse {
    #[serde(default)]
    jobs: Vec<Job>,
}

/// Query seam for listing jobs
///
/// The tool invocation handler depends on this trait rather than on the
/// HTTP client directly, so tests can assert behavior (including that no
/// request was issued) with a fake.
#[async_trait]
pub trait JobQuery: Send + Sync {
    /// Lists jobs configured on `server_address`, optionally retaining only
    /// those whose name contains `filter` (case-insensitive)
    ///
    /// # Arguments
    /// * `server_address` - FQDN of the Jenkins server (no scheme)
    /// * `filter` - Optional substring filter applied to job names
    async fn list_jobs(&self, server_address: &str, filter: Option<&str>) -> Result<Vec<Job>>;
}

/// HTTP client for the Jenkins job-listing endpoint
#[derive(Clone)]
pub struct JenkinsClient {
    /// HTTP client instance
    client: Client,
    /// Credential source, consulted once per request
    credentials: Arc<dyn CredentialProvider>,
    /// Request timeout
    timeout: Duration,
}

impl JenkinsClient {
    /// Create a new client with the default request timeout
    ///
    /// # Arguments
    /// * `credentials` - Source of the Basic auth username/token pair
    pub fn new(credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            client: Client::new(),
            credentials,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a client with a custom request timeout
    pub fn with_timeout(credentials: Arc<dyn CredentialProvider>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            credentials,
            timeout,
        }
    }

    /// Create a client with a custom HTTP client and timeout
    ///
    /// This allows configuring proxies, TLS settings, or a different bound
    /// on the single outbound request.
    pub fn with_client(
        credentials: Arc<dyn CredentialProvider>,
        client: Client,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            credentials,
            timeout,
        }
    }
}

#[async_trait]
impl JobQuery for JenkinsClient {
    async fn list_jobs(&self, server_address: &str, filter: Option<&str>) -> Result<Vec<Job>> {
        // Credentials first: a missing token must fail before any network I/O.
        let creds = self.credentials.resolve()?;
        let (username, token) = creds.basic_pair();

        let url = job_list_url(server_address);
        let response = self
            .client
            .get(&url)
            .basic_auth(username, Some(token))
            .timeout(self.timeout)
            .send()
            .await
            .inspect_err(|e| tracing::error!("Error calling Jenkins API: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Jenkins API returned status {status}: {body}");
            return Err(ClientError::api(status.as_u16(), body));
        }

        let parsed: JobsResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Jenkins response: {e}");
            ClientError::Parse(format!("Failed to parse JSON response: {e}"))
        })?;

        Ok(filter_jobs(parsed.jobs, filter))
    }
}

/// Builds the job-listing URL for a server address
fn job_list_url(server_address: &str) -> String {
    format!("https://{server_address}/api/json?tree=jobs[name,url]")
}

/// Retains jobs whose name contains `filter`, case-insensitively
///
/// Both sides are lower-cased before comparison. This is a pure,
/// order-preserving subsequence selection; an empty or absent filter
/// returns the input unchanged.
pub fn filter_jobs(jobs: Vec<Job>, filter: Option<&str>) -> Vec<Job> {
    match filter {
        Some(needle) if !needle.is_empty() => {
            let needle = needle.to_lowercase();
            jobs.into_iter()
                .filter(|job| job.name.to_lowercase().contains(&needle))
                .collect()
        }
        _ => jobs,
    }
}
