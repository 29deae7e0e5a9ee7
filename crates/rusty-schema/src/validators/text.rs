// File: src/validators/text.rs
// Purpose: Substring and length validators

use super::on_str;
use crate::validator::Validator;
use crate::value::Value;
use rusty_schema_validation as checks;

pub fn includes(substring: impl Into<String>) -> impl Validator {
    let substring = substring.into();
    move |value: &Value| on_str(value, |s| checks::validate_includes(s, &substring).into())
}

pub fn starts_with(prefix: impl Into<String>) -> impl Validator {
    let prefix = prefix.into();
    move |value: &Value| on_str(value, |s| checks::validate_starts_with(s, &prefix).into())
}

pub fn ends_with(suffix: impl Into<String>) -> impl Validator {
    let suffix = suffix.into();
    move |value: &Value| on_str(value, |s| checks::validate_ends_with(s, &suffix).into())
}

/// At least `min` characters
pub fn min_length(min: usize) -> impl Validator {
    move |value: &Value| on_str(value, |s| checks::validate_min_length(s, min).into())
}

/// At most `max` characters
pub fn max_length(max: usize) -> impl Validator {
    move |value: &Value| on_str(value, |s| checks::validate_max_length(s, max).into())
}
