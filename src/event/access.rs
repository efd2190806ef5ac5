use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One HTTP access record, fully populated by the host server before
/// rendering. Sorted maps keep nested objects deterministic across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessEvent {
    /// Event instant as epoch milliseconds.
    pub timestamp: i64,
    pub local_port: u16,
    /// Response content length in bytes; `-1` when unknown.
    pub content_length: i64,
    pub method: String,
    pub protocol: String,
    pub request_content: Option<String>,
    pub remote_addr: String,
    pub remote_user: String,
    pub remote_host: String,
    pub server_name: String,
    pub request_headers: BTreeMap<String, String>,
    pub response_headers: BTreeMap<String, String>,
    pub request_parameters: BTreeMap<String, Vec<String>>,
    /// Time the request took to serve, in milliseconds.
    pub elapsed_time_millis: i64,
    pub request_uri: String,
    pub request_url: String,
    pub response_content: Option<String>,
    pub status_code: u16,
    pub user_agent: Option<String>,
}

impl AccessEvent {
    /// The `User-Agent` value for this request: the dedicated field when the
    /// host supplied one, otherwise a case-insensitive lookup in the request
    /// headers.
    pub fn user_agent_header(&self) -> Option<&str> {
        self.user_agent.as_deref().or_else(|| {
            self.request_headers
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case("user-agent"))
                .map(|(_, value)| value.as_str())
        })
    }
}
