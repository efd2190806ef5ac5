//! JSON layout for application log events.

use serde_json::{Map, Value};

use crate::config::ApplicationLayoutConfig;
use crate::event::ApplicationEvent;

use super::field_map::string_map;
use super::{
    ExceptionRenderer, FieldMapBuilder, JsonFormatter, JsonLayout, LayoutError, TimestampFormatter,
};

/// Renders [`ApplicationEvent`]s as ordered JSON documents.
///
/// Potential fields, in output order: timestamp, level, thread, mdc, logger,
/// message, context, version, exception. Each flag-driven field obeys its
/// `include_*` flag from [`ApplicationLayoutConfig`]; `version` appears only
/// when a non-empty version tag is configured, and `exception` only when its
/// flag is on *and* the event carries an error chain.
///
/// All configuration is resolved in [`new`](Self::new) and immutable
/// afterwards, so one instance serves any number of render threads.
#[derive(Debug)]
pub struct ApplicationJsonLayout {
    config: ApplicationLayoutConfig,
    version: Option<String>,
    timestamps: TimestampFormatter,
    exceptions: ExceptionRenderer,
    formatter: JsonFormatter,
}

impl ApplicationJsonLayout {
    /// Builds a layout from resolved configuration. Fails fast on an invalid
    /// timestamp pattern or unknown zone.
    pub fn new(config: ApplicationLayoutConfig) -> Result<Self, LayoutError> {
        let timestamps = TimestampFormatter::new(&config.timestamp)?;
        let formatter = JsonFormatter::new(config.pretty_print, config.append_line_separator);
        let version = config.version.clone().filter(|tag| !tag.is_empty());
        Ok(Self {
            config,
            version,
            timestamps,
            exceptions: ExceptionRenderer::new(),
            formatter,
        })
    }
}

impl JsonLayout for ApplicationJsonLayout {
    type Event = ApplicationEvent;

    fn formatter(&self) -> &JsonFormatter {
        &self.formatter
    }

    fn to_json_map(&self, event: &ApplicationEvent) -> Map<String, Value> {
        let config = &self.config;
        FieldMapBuilder::new(
            &self.timestamps,
            &config.field_names,
            &config.additional_fields,
            16,
        )
        .timestamp("timestamp", config.include_timestamp, event.timestamp)
        .field("level", config.include_level, event.level.as_str())
        .field(
            "thread",
            config.include_thread_name,
            event.thread_name.as_str(),
        )
        .field_with("mdc", config.include_mdc, || string_map(&event.mdc))
        .field(
            "logger",
            config.include_logger_name,
            event.logger_name.as_str(),
        )
        .field(
            "message",
            config.include_message,
            event.formatted_message.as_str(),
        )
        .field(
            "context",
            config.include_context_name,
            event.context_name.as_str(),
        )
        .field_with("version", self.version.is_some(), || {
            Value::from(self.version.as_deref().unwrap_or_default())
        })
        .field_with(
            "exception",
            config.include_exception && event.throwable.is_some(),
            || {
                event
                    .throwable
                    .as_ref()
                    .map_or(Value::Null, |chain| self.exceptions.render(chain).into())
            },
        )
        .build()
    }

    fn start(&mut self) {
        self.exceptions.start();
        tracing::debug!("application json layout started");
    }

    fn stop(&mut self) {
        self.exceptions.stop();
        tracing::debug!("application json layout stopped");
    }
}
