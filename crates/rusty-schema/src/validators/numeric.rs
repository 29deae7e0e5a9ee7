// File: src/validators/numeric.rs
// Purpose: Numeric bound validators

use super::NOT_A_NUMBER;
use crate::outcome::ValidationOutcome;
use crate::validator::Validator;
use crate::value::Value;
use rusty_schema_validation as checks;

/// Numeric value (number or numeric text) of at least `min`
pub fn min(min: f64) -> impl Validator {
    move |value: &Value| match value.as_number() {
        Some(n) => ValidationOutcome::from(checks::validate_min(n, min)),
        None => ValidationOutcome::fail(NOT_A_NUMBER),
    }
}

/// Numeric value (number or numeric text) of at most `max`
pub fn max(max: f64) -> impl Validator {
    move |value: &Value| match value.as_number() {
        Some(n) => ValidationOutcome::from(checks::validate_max(n, max)),
        None => ValidationOutcome::fail(NOT_A_NUMBER),
    }
}
