//! Tool invocation handler
//!
//! The single externally invocable entry point. The invocation context is a
//! JSON object with an `arguments` sub-object carrying `jenkinsServerFQDN`
//! and an optional `searchString`; the result is always a serialized JSON
//! string, either `{"jobs": [...]}` or `{"error": "..."}`. No fault escapes
//! this boundary: every failure is logged and converted to an error payload.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::tools::{SEARCH_PROPERTY, SERVER_PROPERTY};
use jenkins_client::{Job, JobQuery};

/// Result of a tool invocation: the job list or an error message,
/// mutually exclusive
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ToolResponse {
    /// Jobs returned by the server, in remote order
    Jobs { jobs: Vec<Job> },
    /// A failure surfaced as data
    Error { error: String },
}

impl ToolResponse {
    fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }
}

/// Handles `list_jenkins_jobs` invocations
pub struct ToolHandler {
    jobs: Arc<dyn JobQuery>,
}

impl ToolHandler {
    /// Creates a handler delegating job queries to `jobs`
    pub fn new(jobs: Arc<dyn JobQuery>) -> Self {
        Self { jobs }
    }

    /// Runs one invocation and serializes the outcome
    ///
    /// Always returns a string; callers never see a panic or an error type.
    pub async fn invoke(&self, raw_context: &str) -> String {
        let response = self.run(raw_context).await;
        serde_json::to_string(&response)
            .unwrap_or_else(|e| format!(r#"{{"error":"failed to serialize response: {e}"}}"#))
    }

    /// The linear invocation pipeline: parse, extract, validate, query
    async fn run(&self, raw_context: &str) -> ToolResponse {
        let context: Value = match serde_json::from_str(raw_context) {
            Ok(value) => value,
            Err(e) => {
                error!("Invalid invocation context: {e}");
                return ToolResponse::error(e.to_string());
            }
        };

        // An absent arguments object is treated as empty, which then fails
        // the FQDN check below rather than the parse step.
        let args = context.get("arguments").and_then(Value::as_object);
        let server_address = args
            .and_then(|a| a.get(SERVER_PROPERTY))
            .and_then(Value::as_str)
            .unwrap_or("");
        let search = args
            .and_then(|a| a.get(SEARCH_PROPERTY))
            .and_then(Value::as_str);

        if server_address.is_empty() {
            return ToolResponse::error("Jenkins server FQDN is required.");
        }

        match self.jobs.list_jobs(server_address, search).await {
            Ok(jobs) => ToolResponse::Jobs { jobs },
            Err(e) => {
                error!("Error calling Jenkins API: {e}");
                ToolResponse::error(e.to_string())
            }
        }
    }
}
