//! JSON layout for HTTP access events.

use serde_json::{Map, Value};

use crate::config::AccessLayoutConfig;
use crate::event::AccessEvent;

use super::field_map::{multi_map, string_map};
use super::{FieldMapBuilder, JsonFormatter, JsonLayout, LayoutError, TimestampFormatter};

/// Renders [`AccessEvent`]s as ordered JSON documents.
///
/// Potential fields, in output order: port, contentLength, timestamp,
/// method, protocol, requestContent, remoteAddress, remoteUser, headers,
/// params, requestTime, uri, url, remoteHost, responseContent,
/// responseHeaders, serverName, status, userAgent, version. Optional event
/// values (bodies, user agent) render as JSON null when their flag is on but
/// the value is absent; an excluded field leaves no key at all.
#[derive(Debug)]
pub struct AccessJsonLayout {
    config: AccessLayoutConfig,
    version: Option<String>,
    timestamps: TimestampFormatter,
    formatter: JsonFormatter,
}

impl AccessJsonLayout {
    /// Builds a layout from resolved configuration. Fails fast on an invalid
    /// timestamp pattern or unknown zone.
    pub fn new(config: AccessLayoutConfig) -> Result<Self, LayoutError> {
        let timestamps = TimestampFormatter::new(&config.timestamp)?;
        let formatter = JsonFormatter::new(config.pretty_print, config.append_line_separator);
        let version = config.version.clone().filter(|tag| !tag.is_empty());
        Ok(Self {
            config,
            version,
            timestamps,
            formatter,
        })
    }
}

impl JsonLayout for AccessJsonLayout {
    type Event = AccessEvent;

    fn formatter(&self) -> &JsonFormatter {
        &self.formatter
    }

    fn to_json_map(&self, event: &AccessEvent) -> Map<String, Value> {
        let config = &self.config;
        FieldMapBuilder::new(
            &self.timestamps,
            &config.field_names,
            &config.additional_fields,
            24,
        )
        .field("port", config.include_local_port, event.local_port)
        .field(
            "contentLength",
            config.include_content_length,
            event.content_length,
        )
        .timestamp("timestamp", config.include_timestamp, event.timestamp)
        .field("method", config.include_method, event.method.as_str())
        .field("protocol", config.include_protocol, event.protocol.as_str())
        .field_with("requestContent", config.include_request_content, || {
            Value::from(event.request_content.as_deref())
        })
        .field(
            "remoteAddress",
            config.include_remote_addr,
            event.remote_addr.as_str(),
        )
        .field(
            "remoteUser",
            config.include_remote_user,
            event.remote_user.as_str(),
        )
        .field_with("headers", config.include_request_headers, || {
            string_map(&event.request_headers)
        })
        .field_with("params", config.include_request_parameters, || {
            multi_map(&event.request_parameters)
        })
        .field(
            "requestTime",
            config.include_request_time,
            event.elapsed_time_millis,
        )
        .field("uri", config.include_request_uri, event.request_uri.as_str())
        .field("url", config.include_request_url, event.request_url.as_str())
        .field(
            "remoteHost",
            config.include_remote_host,
            event.remote_host.as_str(),
        )
        .field_with("responseContent", config.include_response_content, || {
            Value::from(event.response_content.as_deref())
        })
        .field_with("responseHeaders", config.include_response_headers, || {
            string_map(&event.response_headers)
        })
        .field(
            "serverName",
            config.include_server_name,
            event.server_name.as_str(),
        )
        .field("status", config.include_status_code, event.status_code)
        .field_with("userAgent", config.include_user_agent, || {
            Value::from(event.user_agent_header())
        })
        .field_with("version", self.version.is_some(), || {
            Value::from(self.version.as_deref().unwrap_or_default())
        })
        .build()
    }
}
