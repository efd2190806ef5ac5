pub mod access;
pub mod application;
pub mod exception;
pub mod field_map;
pub mod json;
pub mod timestamp;

pub use access::AccessJsonLayout;
pub use application::ApplicationJsonLayout;
pub use exception::ExceptionRenderer;
pub use field_map::FieldMapBuilder;
pub use json::JsonFormatter;
pub use timestamp::{DEFAULT_TIMESTAMP_PATTERN, TimestampFormatter};

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid timestamp pattern '{pattern}': {source}")]
    InvalidTimestampPattern {
        pattern: String,
        #[source]
        source: chrono::format::ParseError,
    },
    #[error("Unknown time zone: {zone}")]
    UnknownTimeZone { zone: String },
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One event kind's JSON layout.
///
/// A layout assembles the ordered field map for an event and serializes it.
/// `render` reads only configuration frozen at construction, so any number
/// of threads may render through a shared reference at once; `start` and
/// `stop` take `&mut self` and therefore cannot overlap an in-flight render.
pub trait JsonLayout {
    type Event;

    /// The configured JSON encoder for this layout.
    fn formatter(&self) -> &JsonFormatter;

    /// Assembles the ordered field map for one event. Exposed separately
    /// from `render` so embedders and tests can inspect fields before
    /// encoding.
    fn to_json_map(&self, event: &Self::Event) -> Map<String, Value>;

    /// Renders one event to JSON text.
    fn render(&self, event: &Self::Event) -> Result<String, LayoutError> {
        self.formatter().format(&self.to_json_map(event))
    }

    /// Pipeline startup hook. Configuration was already validated at
    /// construction; this only brings stateful sub-converters up.
    fn start(&mut self) {}

    /// Pipeline shutdown hook.
    fn stop(&mut self) {}
}
