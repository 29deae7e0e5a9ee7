// File: src/schema.rs
// Purpose: Ordered field rules and fail-fast parsing

use crate::input::Input;
use crate::outcome::ValidationOutcome;
use crate::validator::Validator;
use crate::validators;
use crate::value::Value;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Message used when neither a required nor an invalid message was given
pub fn default_required_message(name: &str) -> String {
    format!("Please enter a valid {} to proceed further.", name)
}

/// One schema entry: a field name, its validator and optional messages
pub struct FieldRule {
    name: String,
    validator: Box<dyn Validator>,
    invalid_message: Option<String>,
    required_message: Option<String>,
}

impl FieldRule {
    /// A rule that only requires the field to be present
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            validator: Box::new(validators::any()),
            invalid_message: None,
            required_message: None,
        }
    }

    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    /// Shown instead of the validator's text when the value fails.
    /// Also used for a missing field when no required message is set.
    pub fn invalid_message(mut self, message: impl Into<String>) -> Self {
        self.invalid_message = Some(message.into());
        self
    }

    /// Shown when the field is missing or null
    pub fn required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = Some(message.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// required message > invalid message > generated default
    fn missing_text(&self) -> String {
        self.required_message
            .as_ref()
            .or(self.invalid_message.as_ref())
            .cloned()
            .unwrap_or_else(|| default_required_message(&self.name))
    }

    /// invalid message > "⚠️ Error, {name} {text}" > generated default
    fn invalid_text(&self, outcome: &ValidationOutcome) -> String {
        if let Some(message) = &self.invalid_message {
            return message.clone();
        }
        if outcome.message.is_empty() {
            return default_required_message(&self.name);
        }
        format!("⚠️ Error, {} {}", self.name, outcome.message)
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("name", &self.name)
            .field("invalid_message", &self.invalid_message)
            .field("required_message", &self.required_message)
            .finish_non_exhaustive()
    }
}

/// Successfully validated fields, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedData {
    entries: Vec<(String, Value)>,
}

impl ParsedData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field; an existing key keeps its position and gets the new value
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ParsedData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Aggregated result of [`Schema::parse`]
///
/// On failure `data` still holds the fields accepted before the failing one.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ParseResult {
    pub ok: bool,
    pub error: Option<String>,
    pub data: ParsedData,
}

impl ParseResult {
    fn success() -> Self {
        Self {
            ok: true,
            error: None,
            data: ParsedData::new(),
        }
    }

    fn fail(&mut self, message: String) {
        self.ok = false;
        self.error = Some(message);
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> &ParsedData {
        &self.data
    }

    /// Validated data, or the failure message
    pub fn into_result(self) -> Result<ParsedData, String> {
        if self.ok {
            Ok(self.data)
        } else {
            Err(self.error.unwrap_or_default())
        }
    }
}

/// Ordered collection of field rules
///
/// ```rust
/// use rusty_schema::{validators, Input, Schema};
///
/// let schema = Schema::new()
///     .field("id", validators::number())
///     .field("email", validators::email());
///
/// let result = schema.parse(&Input::from_query("id=42&email=a@b.com"));
/// assert!(result.is_ok());
/// assert_eq!(result.data().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Schema {
    rules: Vec<FieldRule>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field checked by `validator`
    pub fn field(self, name: impl Into<String>, validator: impl Validator + 'static) -> Self {
        self.rule(FieldRule::new(name).validator(validator))
    }

    /// Append a field with optional invalid/required messages
    pub fn field_with(
        self,
        name: impl Into<String>,
        validator: impl Validator + 'static,
        invalid_message: Option<&str>,
        required_message: Option<&str>,
    ) -> Self {
        let mut rule = FieldRule::new(name).validator(validator);
        rule.invalid_message = invalid_message.map(str::to_string);
        rule.required_message = required_message.map(str::to_string);
        self.rule(rule)
    }

    /// Append a field that only has to be present
    pub fn required(self, name: impl Into<String>) -> Self {
        self.rule(FieldRule::new(name))
    }

    /// Append a fully built rule
    ///
    /// Duplicate names are kept; rules run in the order they were added.
    pub fn rule(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validate `input` rule by rule, stopping at the first failure
    ///
    /// A missing or null field fails with the rule's required message. A present
    /// value that fails its validator fails with the rule's invalid message.
    /// Accepted values are copied into `data` unchanged.
    pub fn parse(&self, input: &Input) -> ParseResult {
        let mut result = ParseResult::success();

        for rule in &self.rules {
            let value = match input.get(&rule.name) {
                Some(value) if !value.is_null() => value,
                _ => {
                    tracing::debug!(field = %rule.name, "Missing required field");
                    result.fail(rule.missing_text());
                    break;
                }
            };

            let outcome = rule.validator.validate(value);
            if !outcome.ok {
                tracing::debug!(
                    field = %rule.name,
                    kind = value.kind(),
                    reason = %outcome.message,
                    "Field failed validation"
                );
                result.fail(rule.invalid_text(&outcome));
                break;
            }

            tracing::trace!(field = %rule.name, "Field accepted");
            result.data.insert(rule.name.clone(), value.clone());
        }

        result
    }
}
