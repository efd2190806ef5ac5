//! Timestamp rendering for the `timestamp` field.

use chrono::format::{Item, StrftimeItems};
use chrono::{FixedOffset, Local, TimeZone, Utc};
use chrono_tz::Tz;
use serde_json::Value;

use crate::config::{TimestampConfig, TimestampMode};

use super::LayoutError;

/// Standard pattern: date-time with milliseconds and offset.
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

#[derive(Debug, Clone)]
enum ZoneSpec {
    Local,
    Utc,
    Fixed(FixedOffset),
    Named(Tz),
}

/// Renders epoch-millisecond instants either as the raw number or as a
/// pattern-formatted string.
///
/// The pattern is parsed once at construction into owned format items, so
/// the formatter is an immutable value afterwards and safe to share across
/// render threads without synchronization.
#[derive(Debug, Clone)]
pub struct TimestampFormatter {
    /// `None` renders the raw millisecond value.
    pattern: Option<(Vec<Item<'static>>, ZoneSpec)>,
}

impl TimestampFormatter {
    /// Builds a formatter from resolved configuration. Invalid patterns and
    /// unknown zones fail here; nothing fails at render time.
    pub fn new(config: &TimestampConfig) -> Result<Self, LayoutError> {
        match config.mode {
            TimestampMode::Numeric => Ok(Self { pattern: None }),
            TimestampMode::Pattern => {
                let pattern = config
                    .pattern
                    .as_deref()
                    .unwrap_or(DEFAULT_TIMESTAMP_PATTERN);
                let items = StrftimeItems::new(pattern).parse_to_owned().map_err(
                    |source| LayoutError::InvalidTimestampPattern {
                        pattern: pattern.to_string(),
                        source,
                    },
                )?;
                let zone = parse_zone(config.zone.as_deref())?;
                Ok(Self {
                    pattern: Some((items, zone)),
                })
            }
        }
    }

    /// Renders one instant. Any `i64` is accepted: values chrono cannot
    /// represent (near the extremes) fall back to the numeric rendering
    /// instead of failing.
    pub fn format(&self, epoch_millis: i64) -> Value {
        match &self.pattern {
            None => Value::from(epoch_millis),
            Some((items, zone)) => match zone.render(epoch_millis, items) {
                Some(text) => Value::String(text),
                None => {
                    tracing::debug!(
                        epoch_millis,
                        "timestamp outside representable range, emitting raw value"
                    );
                    Value::from(epoch_millis)
                }
            },
        }
    }
}

impl ZoneSpec {
    fn render(&self, epoch_millis: i64, items: &[Item<'static>]) -> Option<String> {
        match self {
            Self::Local => Local
                .timestamp_millis_opt(epoch_millis)
                .single()
                .map(|instant| instant.format_with_items(items.iter()).to_string()),
            Self::Utc => Utc
                .timestamp_millis_opt(epoch_millis)
                .single()
                .map(|instant| instant.format_with_items(items.iter()).to_string()),
            Self::Fixed(offset) => offset
                .timestamp_millis_opt(epoch_millis)
                .single()
                .map(|instant| instant.format_with_items(items.iter()).to_string()),
            Self::Named(tz) => tz
                .timestamp_millis_opt(epoch_millis)
                .single()
                .map(|instant| instant.format_with_items(items.iter()).to_string()),
        }
    }
}

fn parse_zone(zone: Option<&str>) -> Result<ZoneSpec, LayoutError> {
    let Some(name) = zone else {
        return Ok(local_zone());
    };
    let name = name.trim();
    if name.is_empty() || name.eq_ignore_ascii_case("local") {
        return Ok(local_zone());
    }
    if name.eq_ignore_ascii_case("utc") || name.eq_ignore_ascii_case("z") {
        return Ok(ZoneSpec::Utc);
    }
    if let Ok(tz) = name.parse::<Tz>() {
        return Ok(ZoneSpec::Named(tz));
    }
    if let Ok(offset) = name.parse::<FixedOffset>() {
        return Ok(ZoneSpec::Fixed(offset));
    }
    Err(LayoutError::UnknownTimeZone {
        zone: name.to_string(),
    })
}

/// The process-default zone, pinned when the formatter is built. A later
/// `TZ` change does not move already-constructed formatters. Falls back to
/// render-time local resolution only when the platform zone has no
/// resolvable IANA name.
fn local_zone() -> ZoneSpec {
    iana_time_zone::get_timezone()
        .ok()
        .and_then(|name| name.parse::<Tz>().ok())
        .map_or(ZoneSpec::Local, ZoneSpec::Named)
}
