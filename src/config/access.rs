use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TimestampConfig;

/// Configuration for [`AccessJsonLayout`](crate::AccessJsonLayout).
///
/// Verbose or sensitive fields — request/response bodies and headers, the
/// server name, local port, remote host and full request URL — default to
/// off; everything else defaults to on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessLayoutConfig {
    pub include_content_length: bool,
    pub include_local_port: bool,
    pub include_method: bool,
    pub include_protocol: bool,
    pub include_remote_addr: bool,
    pub include_remote_user: bool,
    pub include_request_content: bool,
    pub include_request_headers: bool,
    pub include_request_parameters: bool,
    pub include_request_time: bool,
    pub include_request_uri: bool,
    pub include_request_url: bool,
    pub include_remote_host: bool,
    pub include_response_content: bool,
    pub include_response_headers: bool,
    pub include_server_name: bool,
    pub include_status_code: bool,
    pub include_timestamp: bool,
    pub include_user_agent: bool,
    /// Emitted as the `version` field in every document when non-empty.
    pub version: Option<String>,
    pub timestamp: TimestampConfig,
    /// Canonical field name → replacement name.
    pub field_names: HashMap<String, String>,
    /// Static fields merged into every document, in their own order.
    /// Keys colliding with a built-in field are dropped silently.
    pub additional_fields: serde_json::Map<String, Value>,
    pub pretty_print: bool,
    pub append_line_separator: bool,
}

impl Default for AccessLayoutConfig {
    fn default() -> Self {
        Self {
            include_content_length: true,
            include_local_port: false,
            include_method: true,
            include_protocol: true,
            include_remote_addr: true,
            include_remote_user: true,
            include_request_content: false,
            include_request_headers: false,
            include_request_parameters: true,
            include_request_time: true,
            include_request_uri: true,
            include_request_url: false,
            include_remote_host: false,
            include_response_content: false,
            include_response_headers: false,
            include_server_name: false,
            include_status_code: true,
            include_timestamp: true,
            include_user_agent: true,
            version: None,
            timestamp: TimestampConfig::default(),
            field_names: HashMap::new(),
            additional_fields: serde_json::Map::new(),
            pretty_print: false,
            append_line_separator: false,
        }
    }
}
