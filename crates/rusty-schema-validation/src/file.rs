//! Uploaded file validation functions

use crate::numeric::format_number;
use serde::{Deserialize, Serialize};

pub const MIN_FILE_SIZE: u64 = 0;
pub const MAX_FILE_SIZE: u64 = 2 * 1024 * 1024;
pub const DEFAULT_MIME_TYPES: &[&str] = &["image/png", "image/jpeg", "image/jpg", "application/pdf"];

pub const CORRUPTED_FILE_MESSAGE: &str = "The file is either corrupted or not uploaded properly.";

/// Size and type constraints for an uploaded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLimits {
    /// Minimum size in bytes (inclusive)
    #[serde(default = "default_min_size")]
    pub min_size: u64,

    /// Maximum size in bytes (inclusive)
    #[serde(default = "default_max_size")]
    pub max_size: u64,

    /// Accepted MIME types, compared exactly
    #[serde(default = "default_mime_types")]
    pub mime_types: Vec<String>,
}

fn default_min_size() -> u64 {
    MIN_FILE_SIZE
}

fn default_max_size() -> u64 {
    MAX_FILE_SIZE
}

fn default_mime_types() -> Vec<String> {
    DEFAULT_MIME_TYPES.iter().map(|m| m.to_string()).collect()
}

impl Default for FileLimits {
    fn default() -> Self {
        Self {
            min_size: default_min_size(),
            max_size: default_max_size(),
            mime_types: default_mime_types(),
        }
    }
}

impl FileLimits {
    /// Subtypes of the accepted MIME types ("image/png" -> "png")
    pub fn subtypes(&self) -> Vec<&str> {
        self.mime_types
            .iter()
            .map(|m| m.split_once('/').map_or(m.as_str(), |(_, sub)| sub))
            .collect()
    }
}

fn megabytes(bytes: u64) -> String {
    format_number(bytes as f64 / 1024.0 / 1024.0)
}

/// Validates an upload against `limits`
///
/// A nonzero upload error code is reported first, regardless of size or type.
pub fn validate_upload(error_code: i64, size: u64, mime_type: &str, limits: &FileLimits) -> Result<(), String> {
    if error_code != 0 {
        return Err(CORRUPTED_FILE_MESSAGE.to_string());
    }

    if size < limits.min_size {
        return Err(format!("File must be more than {}MB.", megabytes(limits.min_size)));
    }

    if size > limits.max_size {
        return Err(format!("File must be under {}MB.", megabytes(limits.max_size)));
    }

    if !limits.mime_types.iter().any(|m| m == mime_type) {
        return Err(format!(
            "File must be one of the following types: {}.",
            limits.subtypes().join(", ")
        ));
    }

    Ok(())
}
