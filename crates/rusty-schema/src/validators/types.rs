// File: src/validators/types.rs
// Purpose: Kind checks (string, number, boolean, array)

use super::{NOT_A_NUMBER, NOT_A_STRING};
use crate::outcome::ValidationOutcome;
use crate::validator::Validator;
use crate::value::Value;

const NOT_AN_ARRAY: &str = "Invalid input. Expected an array.";
const INVALID_ELEMENT: &str = "Invalid array element.";

pub fn string() -> impl Validator {
    |value: &Value| ValidationOutcome::check(matches!(value, Value::String(_)), NOT_A_STRING)
}

/// A number, or text that reads as a decimal number ("42", " -3.5 ", "1e3")
pub fn number() -> impl Validator {
    |value: &Value| ValidationOutcome::check(value.as_number().is_some(), NOT_A_NUMBER)
}

/// Strictly `Value::Bool`; "true" and 1 are rejected
pub fn boolean() -> impl Validator {
    |value: &Value| ValidationOutcome::check(matches!(value, Value::Bool(_)), "must be a boolean.")
}

/// Any array, elements unchecked
pub fn array() -> impl Validator {
    |value: &Value| ValidationOutcome::check(matches!(value, Value::Array(_)), NOT_AN_ARRAY)
}

/// An array whose elements all pass `element`
///
/// The first failing element fails the whole array with the generic
/// `Invalid array element.`; the element's own message and index are not
/// reported.
pub fn array_of<V: Validator>(element: V) -> ArrayOf<V> {
    ArrayOf { element }
}

#[derive(Debug, Clone)]
pub struct ArrayOf<V> {
    element: V,
}

impl<V: Validator> Validator for ArrayOf<V> {
    fn validate(&self, value: &Value) -> ValidationOutcome {
        let Some(items) = value.as_array() else {
            return ValidationOutcome::fail(NOT_AN_ARRAY);
        };

        let all_valid = items.iter().all(|item| self.element.validate(item).is_ok());
        ValidationOutcome::check(all_valid, INVALID_ELEMENT)
    }
}
