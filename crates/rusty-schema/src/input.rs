// File: src/input.rs
// Purpose: Flat raw input mapping (query parameters, form fields, uploads)

use crate::error::{Result, SchemaError};
use crate::value::{FileUpload, Value};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Raw key/value input handed to [`Schema::parse`](crate::Schema::parse)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Input {
    fields: HashMap<String, Value>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from already-decoded form fields
    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        fields.into_iter().collect()
    }

    /// Parse an `application/x-www-form-urlencoded` query string
    ///
    /// - `+` decodes to a space, `%XX` sequences are percent-decoded
    /// - `key` without `=` maps to an empty string
    /// - a repeated `key` keeps its last value
    /// - `key[]=a&key[]=b` collects into an array under `key`
    pub fn from_query(query: &str) -> Self {
        let mut input = Self::new();

        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }

            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(raw_key);
            let value = Value::String(decode_component(raw_value));

            if let Some(base) = key.strip_suffix("[]") {
                if !base.is_empty() {
                    input.push(base.to_string(), value);
                }
            } else if !key.is_empty() {
                input.insert(key, value);
            }
        }

        input
    }

    /// Convert a JSON object body
    ///
    /// Nested objects are only accepted when they describe an upload (any of
    /// the `error`, `size` or `type` keys). A descriptor that cannot be read
    /// becomes a file with a nonzero error code. Other objects, including
    /// those inside arrays, are rejected.
    pub fn from_json(json: JsonValue) -> Result<Self> {
        let map = match json {
            JsonValue::Object(map) => map,
            other => return Err(SchemaError::NotAnObject(json_kind(&other))),
        };

        let mut input = Self::new();
        for (key, value) in map {
            let value = convert_json(&key, value)?;
            input.insert(key, value);
        }
        Ok(input)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_map(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Append to the array stored under `key`, replacing any scalar there
    fn push(&mut self, key: String, value: Value) {
        match self.fields.get_mut(&key) {
            Some(Value::Array(items)) => items.push(value),
            _ => {
                self.fields.insert(key, Value::Array(vec![value]));
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Input
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl From<HashMap<String, Value>> for Input {
    fn from(fields: HashMap<String, Value>) -> Self {
        Self { fields }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// Error code given to upload descriptors with unreadable fields
const UNREADABLE_UPLOAD_ERROR: i64 = 1;

fn is_upload(map: &serde_json::Map<String, JsonValue>) -> bool {
    ["error", "size", "type"].iter().any(|k| map.contains_key(*k))
}

fn read_upload(key: &str, map: serde_json::Map<String, JsonValue>) -> FileUpload {
    let text = |field: &str| {
        map.get(field)
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let name = text("name");
    let mime_type = text("type");
    let size = map.get("size").and_then(JsonValue::as_u64).unwrap_or(0);

    match serde_json::from_value(JsonValue::Object(map)) {
        Ok(upload) => upload,
        Err(e) => {
            tracing::debug!(field = %key, error = %e, "unreadable upload descriptor");
            FileUpload::new(name, mime_type, size).with_error(UNREADABLE_UPLOAD_ERROR)
        }
    }
}

fn convert_json(key: &str, json: JsonValue) -> Result<Value> {
    Ok(match json {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
        JsonValue::String(s) => Value::String(s),
        JsonValue::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| convert_json(key, item))
                .collect::<Result<Vec<_>>>()?,
        ),
        JsonValue::Object(map) if is_upload(&map) => Value::File(read_upload(key, map)),
        JsonValue::Object(_) => return Err(SchemaError::NestedObject(key.to_string())),
    })
}
