// File: src/validators/format.rs
// Purpose: Text format validators (email, url, regex, base64, json, ip, uuid, phone, dates)

use super::on_str;
use crate::error::{Result, SchemaError};
use crate::outcome::ValidationOutcome;
use crate::validator::Validator;
use crate::value::Value;
use ::regex::Regex;
use rusty_schema_validation as checks;

pub fn email() -> impl Validator {
    |value: &Value| on_str(value, |s| ValidationOutcome::check(checks::is_valid_email(s), "invalid email address."))
}

pub fn url() -> impl Validator {
    |value: &Value| on_str(value, |s| ValidationOutcome::check(checks::is_valid_url(s), "invalid URL."))
}

pub fn base64() -> impl Validator {
    |value: &Value| on_str(value, |s| ValidationOutcome::check(checks::is_valid_base64(s), "invalid base64 string."))
}

pub fn json() -> impl Validator {
    |value: &Value| on_str(value, |s| ValidationOutcome::check(checks::is_valid_json(s), "invalid JSON string."))
}

/// IPv4 or IPv6 literal
pub fn ip() -> impl Validator {
    |value: &Value| on_str(value, |s| ValidationOutcome::check(checks::is_valid_ip(s), "invalid IP address."))
}

/// Hyphenated 8-4-4-4-12 hex form, any case
pub fn uuid() -> impl Validator {
    |value: &Value| on_str(value, |s| ValidationOutcome::check(checks::is_valid_uuid(s), "invalid UUID."))
}

pub fn phone() -> impl Validator {
    |value: &Value| {
        on_str(value, |s| {
            ValidationOutcome::check(
                checks::is_valid_phone(s),
                "invalid phone number. Must contain 7-15 digits, optionally with spaces, dashes, or parentheses.",
            )
        })
    }
}

// date, datetime and time share one lenient recognizer and differ only in wording.

pub fn date() -> impl Validator {
    |value: &Value| on_str(value, |s| ValidationOutcome::check(checks::is_date_like(s), "invalid date."))
}

pub fn datetime() -> impl Validator {
    |value: &Value| on_str(value, |s| ValidationOutcome::check(checks::is_date_like(s), "invalid datetime."))
}

pub fn time() -> impl Validator {
    |value: &Value| on_str(value, |s| ValidationOutcome::check(checks::is_date_like(s), "invalid time."))
}

/// Text matching a regular expression
///
/// The pattern is compiled once, here; a pattern that does not compile is a
/// programming error and is returned as [`SchemaError::InvalidPattern`].
/// Anchor the pattern (`^...$`) to match the whole value.
pub fn regex(pattern: &str) -> Result<Pattern> {
    let regex = Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(Pattern { regex })
}

#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Validator for Pattern {
    fn validate(&self, value: &Value) -> ValidationOutcome {
        on_str(value, |s| ValidationOutcome::check(self.regex.is_match(s), "invalid format."))
    }
}
