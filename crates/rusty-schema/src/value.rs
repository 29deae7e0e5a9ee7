// File: src/value.rs
// Purpose: Tagged input values and uploaded file descriptors

use rusty_schema_validation::{format_number, parse_numeric};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// An uploaded file as handed over by the HTTP layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUpload {
    /// Original client-side file name
    #[serde(default)]
    pub name: String,

    /// MIME type reported for the upload
    #[serde(rename = "type")]
    pub mime_type: String,

    /// Size in bytes
    pub size: u64,

    /// Upload error code (0 = uploaded without error)
    pub error: i64,

    /// Temporary path on the server, if the upload was stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmp_name: Option<String>,
}

impl FileUpload {
    /// Create a successfully uploaded file descriptor
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            error: 0,
            tmp_name: None,
        }
    }

    /// Set the upload error code
    pub fn with_error(mut self, error: i64) -> Self {
        self.error = error;
        self
    }

    pub fn with_tmp_name(mut self, tmp_name: impl Into<String>) -> Self {
        self.tmp_name = Some(tmp_name.into());
        self
    }
}

/// Supported input value types
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    File(FileUpload),
}

/// Untagged, with integral numbers written as integers (`42`, not `42.0`)
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => serializer.collect_seq(items),
            Value::File(file) => file.serialize(serializer),
        }
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric reading of the value: numbers, or text holding a decimal number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Some(*n),
            Value::String(s) => parse_numeric(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileUpload> {
        match self {
            Value::File(file) => Some(file),
            _ => None,
        }
    }

    /// Short name of the variant, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::File(_) => "file",
        }
    }

    /// Equality used for enum membership
    ///
    /// Text and numbers compare by numeric value (`"1"` equals `1`).
    /// Every other pairing requires the same variant.
    pub fn loosely_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::String(s), Value::Number(n)) | (Value::Number(n), Value::String(s)) => {
                parse_numeric(s) == Some(*n)
            }
            _ => self == other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                let items: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Value::File(file) => f.write_str(&file.name),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<FileUpload> for Value {
    fn from(file: FileUpload) -> Self {
        Value::File(file)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
