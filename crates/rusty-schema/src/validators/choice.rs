// File: src/validators/choice.rs
// Purpose: Enum membership validator

use crate::outcome::ValidationOutcome;
use crate::validator::Validator;
use crate::value::Value;
use rusty_schema_validation::choice_message;

/// Value must be one of `allowed`
///
/// Membership uses [`Value::loosely_equals`], so the text `"1"` matches an
/// allowed `1`. The failure text lists every allowed value.
pub fn one_of<I, T>(allowed: I) -> OneOf
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    let allowed: Vec<Value> = allowed.into_iter().map(Into::into).collect();
    let labels: Vec<String> = allowed.iter().map(|v| v.to_string()).collect();

    OneOf {
        message: choice_message(&labels),
        allowed,
    }
}

#[derive(Debug, Clone)]
pub struct OneOf {
    allowed: Vec<Value>,
    message: String,
}

impl OneOf {
    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }
}

impl Validator for OneOf {
    fn validate(&self, value: &Value) -> ValidationOutcome {
        ValidationOutcome::check(
            self.allowed.iter().any(|a| a.loosely_equals(value)),
            &self.message,
        )
    }
}
