// File: src/validators/mod.rs
// Purpose: Catalog of reusable validator constructors

//! Built-in validators.
//!
//! Every constructor captures its configuration and returns a [`Validator`].
//! Text-shaped validators only accept [`Value::String`]; other kinds fail with
//! `must be a string.` instead of being coerced.

mod choice;
mod file;
mod format;
mod numeric;
mod text;
mod types;

pub use choice::{one_of, OneOf};
pub use file::{file, file_with, FileValidator};
pub use format::{base64, date, datetime, email, ip, json, phone, regex, time, url, uuid, Pattern};
pub use numeric::{max, min};
pub use text::{ends_with, includes, max_length, min_length, starts_with};
pub use types::{array, array_of, boolean, number, string, ArrayOf};

use crate::outcome::ValidationOutcome;
use crate::validator::Validator;
use crate::value::Value;

pub(crate) const NOT_A_STRING: &str = "must be a string.";
pub(crate) const NOT_A_NUMBER: &str = "must be a number.";

/// Accepts every value; a field using it only has to be present
pub fn any() -> impl Validator {
    |_: &Value| ValidationOutcome::pass()
}

/// Run `check` on text values, fail with `must be a string.` otherwise
pub(crate) fn on_str(value: &Value, check: impl FnOnce(&str) -> ValidationOutcome) -> ValidationOutcome {
    match value {
        Value::String(s) => check(s),
        _ => ValidationOutcome::fail(NOT_A_STRING),
    }
}
