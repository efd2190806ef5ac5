//! Ordered assembly of the output field map.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::TimestampFormatter;

/// Builds the output map one field at a time, preserving insertion order.
///
/// Every field goes through the same gate: an inclusion flag decides whether
/// the key appears at all, and the configured name overrides decide what the
/// key is called. Excluded fields leave no trace, not even a `null`.
pub struct FieldMapBuilder<'a> {
    fields: Map<String, Value>,
    field_names: &'a HashMap<String, String>,
    additional_fields: &'a Map<String, Value>,
    timestamps: &'a TimestampFormatter,
}

impl<'a> FieldMapBuilder<'a> {
    pub fn new(
        timestamps: &'a TimestampFormatter,
        field_names: &'a HashMap<String, String>,
        additional_fields: &'a Map<String, Value>,
        capacity: usize,
    ) -> Self {
        Self {
            fields: Map::with_capacity(capacity),
            field_names,
            additional_fields,
            timestamps,
        }
    }

    /// Appends `name` with an eagerly computed value when `included` is set.
    #[must_use]
    pub fn field(mut self, name: &str, included: bool, value: impl Into<Value>) -> Self {
        if included {
            let key = self.effective_name(name);
            self.fields.insert(key, value.into());
        }
        self
    }

    /// Appends `name`, invoking the producer only when `included` is set.
    /// Use this when building the value walks event data.
    #[must_use]
    pub fn field_with(mut self, name: &str, included: bool, value: impl FnOnce() -> Value) -> Self {
        if included {
            let key = self.effective_name(name);
            self.fields.insert(key, value());
        }
        self
    }

    /// Appends a timestamp field rendered through the configured formatter.
    #[must_use]
    pub fn timestamp(self, name: &str, included: bool, epoch_millis: i64) -> Self {
        let timestamps = self.timestamps;
        self.field_with(name, included, || timestamps.format(epoch_millis))
    }

    /// Merges the configured additional fields and finishes the map.
    /// Built-in fields win on key collision.
    #[must_use]
    pub fn build(mut self) -> Map<String, Value> {
        for (key, value) in self.additional_fields {
            self.fields
                .entry(key.as_str())
                .or_insert_with(|| value.clone());
        }
        self.fields
    }

    fn effective_name(&self, name: &str) -> String {
        self.field_names
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }
}

/// Renders a string map as a JSON object, keeping the map's iteration order.
pub(crate) fn string_map(entries: &std::collections::BTreeMap<String, String>) -> Value {
    Value::Object(
        entries
            .iter()
            .map(|(key, value)| (key.clone(), Value::from(value.as_str())))
            .collect(),
    )
}

/// Renders a multi-valued map as a JSON object of string arrays.
pub(crate) fn multi_map(entries: &std::collections::BTreeMap<String, Vec<String>>) -> Value {
    Value::Object(
        entries
            .iter()
            .map(|(key, values)| {
                let list = values.iter().map(|v| Value::from(v.as_str())).collect();
                (key.clone(), Value::Array(list))
            })
            .collect(),
    )
}
