// File: src/validator.rs
// Purpose: The Validator capability shared by every catalog entry

use crate::outcome::ValidationOutcome;
use crate::value::Value;

/// A pure check of one input value
///
/// Implementations must not panic on unexpected value kinds; a mismatched kind is
/// an ordinary failure. Any `Fn(&Value) -> ValidationOutcome` closure is a validator:
///
/// ```rust
/// use rusty_schema::{ValidationOutcome, Validator, Value};
///
/// let even = |value: &Value| {
///     ValidationOutcome::check(
///         value.as_number().is_some_and(|n| n % 2.0 == 0.0),
///         "must be even.",
///     )
/// };
/// assert!(even.validate(&Value::from(4)).is_ok());
/// ```
pub trait Validator: Send + Sync {
    fn validate(&self, value: &Value) -> ValidationOutcome;
}

impl<F> Validator for F
where
    F: Fn(&Value) -> ValidationOutcome + Send + Sync,
{
    fn validate(&self, value: &Value) -> ValidationOutcome {
        self(value)
    }
}
