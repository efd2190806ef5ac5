use json_log_layout::{AccessEvent, AccessJsonLayout, AccessLayoutConfig, JsonLayout};
use serde_json::Value;

fn get_orders_event() -> AccessEvent {
    let mut event = AccessEvent {
        timestamp: 1_700_000_000_000,
        local_port: 8443,
        content_length: 2048,
        method: "GET".to_string(),
        protocol: "HTTP/1.1".to_string(),
        remote_addr: "203.0.113.9".to_string(),
        remote_user: "alice".to_string(),
        remote_host: "client.example".to_string(),
        server_name: "api.example".to_string(),
        elapsed_time_millis: 37,
        request_uri: "/orders".to_string(),
        request_url: "GET /orders?page=2 HTTP/1.1".to_string(),
        status_code: 200,
        user_agent: Some("curl/8.5.0".to_string()),
        ..AccessEvent::default()
    };
    event
        .request_headers
        .insert("Accept".to_string(), "application/json".to_string());
    event
        .response_headers
        .insert("Content-Type".to_string(), "application/json".to_string());
    event
        .request_parameters
        .insert("page".to_string(), vec!["2".to_string()]);
    event
}

fn rendered_keys(text: &str) -> Vec<String> {
    let parsed: serde_json::Map<String, Value> = serde_json::from_str(text).unwrap();
    parsed.keys().cloned().collect()
}

#[test]
fn default_configuration_field_order() {
    let layout = AccessJsonLayout::new(AccessLayoutConfig::default()).unwrap();
    let text = layout.render(&get_orders_event()).unwrap();

    assert_eq!(
        rendered_keys(&text),
        [
            "contentLength",
            "timestamp",
            "method",
            "protocol",
            "remoteAddress",
            "remoteUser",
            "params",
            "requestTime",
            "uri",
            "status",
            "userAgent",
        ]
    );
}

#[test]
fn status_scenario_excludes_response_headers() {
    let config = AccessLayoutConfig {
        include_response_headers: false,
        include_status_code: true,
        ..AccessLayoutConfig::default()
    };
    let layout = AccessJsonLayout::new(config).unwrap();
    let mut event = get_orders_event();
    event.status_code = 404;

    let parsed: Value = serde_json::from_str(&layout.render(&event).unwrap()).unwrap();
    assert_eq!(parsed["status"], Value::from(404));
    assert!(parsed.get("responseHeaders").is_none());
}

#[test]
fn everything_enabled_renders_all_twenty_slots() {
    let config = AccessLayoutConfig {
        include_local_port: true,
        include_request_content: true,
        include_request_headers: true,
        include_request_url: true,
        include_remote_host: true,
        include_response_content: true,
        include_response_headers: true,
        include_server_name: true,
        version: Some("2".to_string()),
        ..AccessLayoutConfig::default()
    };
    let layout = AccessJsonLayout::new(config).unwrap();
    let text = layout.render(&get_orders_event()).unwrap();

    assert_eq!(
        rendered_keys(&text),
        [
            "port",
            "contentLength",
            "timestamp",
            "method",
            "protocol",
            "requestContent",
            "remoteAddress",
            "remoteUser",
            "headers",
            "params",
            "requestTime",
            "uri",
            "url",
            "remoteHost",
            "responseContent",
            "responseHeaders",
            "serverName",
            "status",
            "userAgent",
            "version",
        ]
    );

    let parsed: Value = serde_json::from_str(&text).unwrap();
    // bodies were absent on the event, so the pinned keys carry null
    assert_eq!(parsed["requestContent"], Value::Null);
    assert_eq!(parsed["responseContent"], Value::Null);
    assert_eq!(parsed["headers"]["Accept"], Value::from("application/json"));
    assert_eq!(parsed["port"], Value::from(8443));
    assert_eq!(parsed["version"], Value::from("2"));
}

#[test]
fn version_tag_sits_at_its_slot_for_access_events() {
    let config = AccessLayoutConfig {
        version: Some("1".to_string()),
        ..AccessLayoutConfig::default()
    };
    let layout = AccessJsonLayout::new(config).unwrap();
    let keys = rendered_keys(&layout.render(&get_orders_event()).unwrap());
    assert_eq!(keys.last().map(String::as_str), Some("version"));
}

#[test]
fn multi_valued_parameters_render_as_arrays() {
    let layout = AccessJsonLayout::new(AccessLayoutConfig::default()).unwrap();
    let mut event = get_orders_event();
    event.request_parameters.insert(
        "tag".to_string(),
        vec!["new".to_string(), "sale".to_string()],
    );

    let parsed: Value = serde_json::from_str(&layout.render(&event).unwrap()).unwrap();
    assert_eq!(
        parsed["params"]["tag"],
        Value::Array(vec!["new".into(), "sale".into()])
    );
}

#[test]
fn render_is_idempotent() {
    let layout = AccessJsonLayout::new(AccessLayoutConfig::default()).unwrap();
    let event = get_orders_event();
    assert_eq!(layout.render(&event).unwrap(), layout.render(&event).unwrap());
}
