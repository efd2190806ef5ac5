use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TimestampConfig;

/// Configuration for [`ApplicationJsonLayout`](crate::ApplicationJsonLayout),
/// resolved once before the layout is built and immutable afterwards.
///
/// Defaults follow the "generally useful and low-risk" rule: everything is
/// included except the logger context name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationLayoutConfig {
    pub include_timestamp: bool,
    pub include_level: bool,
    pub include_thread_name: bool,
    pub include_mdc: bool,
    pub include_logger_name: bool,
    pub include_message: bool,
    pub include_exception: bool,
    pub include_context_name: bool,
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

impl Default for ApplicationLayoutConfig {
    fn default() -> Self {
        Self {
            include_timestamp: true,
            include_level: true,
            include_thread_name: true,
            include_mdc: true,
            include_logger_name: true,
            include_message: true,
            include_exception: true,
            include_context_name: false,
            version: None,
            timestamp: TimestampConfig::default(),
            field_names: HashMap::new(),
            additional_fields: serde_json::Map::new(),
            pretty_print: false,
            append_line_separator: false,
        }
    }
}
