// File: src/error.rs
// Purpose: Construction-time errors (programmer mistakes, not invalid input)

use thiserror::Error;

/// Errors raised while building validators or assembling input
///
/// Invalid user input never ends up here; it is reported through
/// [`ValidationOutcome`](crate::ValidationOutcome) and [`ParseResult`](crate::ParseResult).
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid regex pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid file limits: min_size {min} is greater than max_size {max}")]
    InvalidFileLimits { min: u64, max: u64 },

    #[error("invalid file limits: at least one MIME type is required")]
    EmptyMimeTypes,

    #[error("input must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("field `{0}` holds a nested object, which is not supported")]
    NestedObject(String),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
