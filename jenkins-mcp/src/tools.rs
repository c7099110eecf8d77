//! Tool metadata
//!
//! The server exposes exactly one tool. Its name, description, and input
//! schema are static: the definitions are built once when the server is
//! constructed and reused for every `tools/list` response.

use serde_json::{Value, json};

/// Name of the single exposed tool
pub const TOOL_NAME: &str = "list_jenkins_jobs";

/// Property key for the Jenkins server FQDN
pub const SERVER_PROPERTY: &str = "jenkinsServerFQDN";

/// Property key for the optional name filter
pub const SEARCH_PROPERTY: &str = "searchString";

/// Returns the MCP tool definitions advertised by this server
pub fn tool_definitions() -> Vec<Value> {
    vec![json!({
        "name": TOOL_NAME,
        "description": "List Jenkins jobs, optionally filtered by name.",
        "inputSchema": {
            "type": "object",
            "properties": {
                (SERVER_PROPERTY): {
                    "type": "string",
                    "description": "The FQDN of the Jenkins server."
                },
                (SEARCH_PROPERTY): {
                    "type": "string",
                    "description": "Optional: Filter jobs by name containing this string."
                }
            },
            "required": [SERVER_PROPERTY]
        }
    })]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tool_with_two_properties() {
        let tools = tool_definitions();
        assert_eq!(tools.len(), 1);

        let tool = &tools[0];
        assert_eq!(tool["name"], TOOL_NAME);

        let properties = tool["inputSchema"]["properties"]
            .as_object()
            .expect("inputSchema.properties");
        assert_eq!(properties.len(), 2);
        assert!(properties.contains_key(SERVER_PROPERTY));
        assert!(properties.contains_key(SEARCH_PROPERTY));

        let required = tool["inputSchema"]["required"]
            .as_array()
            .expect("inputSchema.required");
        assert_eq!(required.len(), 1);
        assert_eq!(required[0], SERVER_PROPERTY);
    }
}
