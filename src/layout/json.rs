use serde_json::{Map, Value};

use super::LayoutError;

/// Thin wrapper over the JSON encoder.
///
/// Emits one compact, single-line JSON object with no trailing newline by
/// default; pretty printing and a trailing line separator are opt-in. Field
/// order in the output always equals the map's iteration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pretty_print: bool,
    append_line_separator: bool,
}

impl JsonFormatter {
    pub const fn new(pretty_print: bool, append_line_separator: bool) -> Self {
        Self {
            pretty_print,
            append_line_separator,
        }
    }

    /// Encodes one ordered field map as a JSON object.
    pub fn format(&self, fields: &Map<String, Value>) -> Result<String, LayoutError> {
        let mut text = if self.pretty_print {
            serde_json::to_string_pretty(fields)?
        } else {
            serde_json::to_string(fields)?
        };
        if self.append_line_separator {
            text.push('\n');
        }
        Ok(text)
    }
}
