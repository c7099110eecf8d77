//! JSON-RPC method dispatch
//!
//! Implements the MCP methods an agent framework needs to call the tool:
//! `initialize`, `notifications/initialized`, `ping`, `tools/list`, and
//! `tools/call`. Tool failures are never protocol errors — they come back
//! as `{"error": ...}` text content, so `tools/call` only fails at the
//! protocol level for a wrong tool name or malformed params.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::handler::ToolHandler;
use crate::tools;

/// MCP protocol version advertised in `initialize`
pub const MCP_VERSION: &str = "2024-11-05";

/// Server name advertised in `initialize`
pub const SERVER_NAME: &str = "jenkins-mcp";

/// Server version advertised in `initialize`
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A decoded JSON-RPC request
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// Builds a JSON-RPC success response
fn json_rpc_response(id: Option<Value>, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

/// Builds a JSON-RPC error response
fn json_rpc_error(id: Option<Value>, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message }
    })
}

/// The MCP server: one tool, no shared mutable state between calls
pub struct McpServer {
    handler: ToolHandler,
    /// Tool definitions, built once and reused for every tools/list
    tool_definitions: Vec<Value>,
}

impl McpServer {
    /// Creates a server dispatching tool calls to `handler`
    pub fn new(handler: ToolHandler) -> Self {
        Self {
            handler,
            tool_definitions: tools::tool_definitions(),
        }
    }

    /// Handles one raw JSON-RPC frame
    ///
    /// Returns `None` for notifications, which get no response.
    pub async fn handle_raw(&self, raw: &str) -> Option<Value> {
        let data: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => return Some(json_rpc_error(None, -32700, &format!("Parse error: {e}"))),
        };

        let id = data.as_object().and_then(|obj| obj.get("id")).cloned();
        let request: JsonRpcRequest = match serde_json::from_value(data) {
            Ok(request) => request,
            Err(e) => {
                return Some(json_rpc_error(id, -32600, &format!("Invalid Request: {e}")));
            }
        };

        self.handle(request).await
    }

    /// Dispatches a decoded request to the matching method
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<Value> {
        match request.method.as_str() {
            "initialize" => Some(json_rpc_response(
                request.id,
                json!({
                    "protocolVersion": MCP_VERSION,
                    "serverInfo": { "name": SERVER_NAME, "version": SERVER_VERSION },
                    "capabilities": { "tools": {} }
                }),
            )),
            "notifications/initialized" => None,
            "ping" => Some(json_rpc_response(request.id, json!({}))),
            "tools/list" => Some(json_rpc_response(
                request.id,
                json!({ "tools": self.tool_definitions }),
            )),
            "tools/call" => Some(self.handle_tool_call(request.id, request.params).await),
            other => Some(json_rpc_error(
                request.id,
                -32601,
                &format!("Method not found: {other}"),
            )),
        }
    }

    async fn handle_tool_call(&self, id: Option<Value>, params: Option<Value>) -> Value {
        let Some(params) = params.filter(Value::is_object) else {
            return json_rpc_error(id, -32602, "params must be an object");
        };

        match params.get("name").and_then(Value::as_str) {
            Some(tools::TOOL_NAME) => {}
            Some(other) => {
                return json_rpc_error(id, -32602, &format!("Unknown tool: {other}"));
            }
            None => return json_rpc_error(id, -32602, "name must be a string"),
        }

        // The params object carries the `arguments` sub-object; serializing it
        // whole preserves the handler's invocation-context contract.
        let raw_context = params.to_string();
        let text = self.handler.invoke(&raw_context).await;

        json_rpc_response(
            id,
            json!({ "content": [{ "type": "text", "text": text }] }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use jenkins_client::{Job, JobQuery, filter_jobs};

    struct FixedJobs(Vec<Job>);

    #[async_trait]
    impl JobQuery for FixedJobs {
        async fn list_jobs(
            &self,
            _server_address: &str,
            filter: Option<&str>,
        ) -> jenkins_client::Result<Vec<Job>> {
            Ok(filter_jobs(self.0.clone(), filter))
        }
    }

    fn test_server() -> McpServer {
        let jobs = vec![
            Job {
                name: "Pipeline-A".to_string(),
                url: "https://j/job/Pipeline-A/".to_string(),
            },
            Job {
                name: "Build-B".to_string(),
                url: "https://j/job/Build-B/".to_string(),
            },
            Job {
                name: "pipeline-C".to_string(),
                url: "https://j/job/pipeline-C/".to_string(),
            },
        ];
        McpServer::new(ToolHandler::new(Arc::new(FixedJobs(jobs))))
    }

    /// Extracts the tool text payload from a tools/call response
    fn extract_tool_text(response: &Value) -> Value {
        let text = response["result"]["content"][0]["text"]
            .as_str()
            .expect("result.content[0].text");
        serde_json::from_str(text).expect("tool text is JSON")
    }

    #[tokio::test]
    async fn test_initialize_advertises_tools_capability() {
        let server = test_server();
        let response = server
            .handle_raw(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#)
            .await
            .expect("initialize must respond");

        assert_eq!(response["result"]["protocolVersion"], MCP_VERSION);
        assert_eq!(response["result"]["serverInfo"]["name"], SERVER_NAME);
        assert!(response["result"]["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_initialized_notification_gets_no_response() {
        let server = test_server();
        let response = server
            .handle_raw(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_tools_list_has_single_tool() {
        let server = test_server();
        let response = server
            .handle_raw(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#)
            .await
            .expect("tools/list must respond");

        let tools = response["result"]["tools"].as_array().expect("result.tools");
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], tools::TOOL_NAME);
    }

    #[tokio::test]
    async fn test_tool_call_filters_jobs() {
        let server = test_server();
        let response = server
            .handle_raw(
                r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"list_jenkins_jobs","arguments":{"jenkinsServerFQDN":"jenkins.example.com","searchString":"pipe"}}}"#,
            )
            .await
            .expect("tools/call must respond");

        let payload = extract_tool_text(&response);
        let names: Vec<&str> = payload["jobs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|j| j["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Pipeline-A", "pipeline-C"]);
    }

    #[tokio::test]
    async fn test_tool_call_without_fqdn_is_error_payload_not_protocol_error() {
        let server = test_server();
        let response = server
            .handle_raw(
                r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"list_jenkins_jobs","arguments":{}}}"#,
            )
            .await
            .expect("tools/call must respond");

        assert!(response.get("error").is_none());
        let payload = extract_tool_text(&response);
        assert_eq!(payload["error"], "Jenkins server FQDN is required.");
    }

    #[tokio::test]
    async fn test_unknown_tool_is_rejected() {
        let server = test_server();
        let response = server
            .handle_raw(
                r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"nope","arguments":{}}}"#,
            )
            .await
            .expect("tools/call must respond");
        assert_eq!(response["error"]["code"], -32602);
    }

    #[tokio::test]
    async fn test_unknown_method_is_rejected() {
        let server = test_server();
        let response = server
            .handle_raw(r#"{"jsonrpc":"2.0","id":6,"method":"resources/list"}"#)
            .await
            .expect("unknown method must respond");
        assert_eq!(response["error"]["code"], -32601);
    }

    #[tokio::test]
    async fn test_malformed_frame_is_parse_error() {
        let server = test_server();
        let response = server.handle_raw("{oops").await.expect("must respond");
        assert_eq!(response["error"]["code"], -32700);
    }
}
