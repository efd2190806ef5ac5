use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ErrorChain;

/// One application log occurrence, fully populated by the host logging
/// framework before rendering. The layout only reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationEvent {
    /// Event instant as epoch milliseconds.
    pub timestamp: i64,
    pub level: String,
    pub thread_name: String,
    /// Mapped diagnostic context. Key order carries no meaning; a sorted map
    /// keeps the nested object deterministic.
    pub mdc: BTreeMap<String, String>,
    pub logger_name: String,
    pub formatted_message: String,
    /// Name of the logger context the event came from.
    pub context_name: String,
    pub throwable: Option<ErrorChain>,
}
