use serde::{Deserialize, Serialize};

/// How the `timestamp` field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampMode {
    /// Emit the epoch-millisecond value unchanged as a JSON number.
    #[default]
    Numeric,
    /// Emit a string formatted with a strftime pattern.
    Pattern,
}

/// Timestamp rendering options, resolved before the layout is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestampConfig {
    pub mode: TimestampMode,
    /// strftime pattern; `None` selects the standard
    /// date-time-with-milliseconds-and-offset pattern.
    pub pattern: Option<String>,
    /// `local` (the default), `utc`, an IANA zone name such as
    /// `Europe/Berlin`, or a fixed offset such as `+02:00`.
    pub zone: Option<String>,
}

impl TimestampConfig {
    /// Numeric epoch milliseconds, the default.
    pub fn numeric() -> Self {
        Self::default()
    }

    /// Pattern mode with an explicit pattern and zone.
    pub fn formatted(pattern: impl Into<String>, zone: impl Into<String>) -> Self {
        Self {
            mode: TimestampMode::Pattern,
            pattern: Some(pattern.into()),
            zone: Some(zone.into()),
        }
    }
}
