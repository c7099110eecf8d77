//! Jenkins HTTP Client
//!
//! A small, type-safe client for the Jenkins REST API, covering the single
//! read this project needs: listing the jobs configured on a server.
//!
//! Credentials are resolved through an injected [`CredentialProvider`] rather
//! than read from the process environment at call sites, so tests can
//! substitute fakes without touching global state. Resolution stays lazy:
//! nothing is read until the first request is made.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use jenkins_client::{EnvCredentials, JenkinsClient, JobQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), jenkins_client::ClientError> {
//!     let client = JenkinsClient::new(Arc::new(EnvCredentials));
//!
//!     let jobs = client.list_jobs("jenkins.example.com", Some("deploy")).await?;
//!     for job in jobs {
//!         println!("{} -> {}", job.name, job.url);
//!     }
//!     Ok(())
//! }
//! ```

mod credentials;
pub mod error;
mod jobs;

pub use credentials::{CredentialProvider, Credentials, EnvCredentials, TOKEN_ENV, USER_ENV};
pub use error::{ClientError, Result};
pub use jobs::{DEFAULT_TIMEOUT, JenkinsClient, Job, JobQuery, filter_jobs};
