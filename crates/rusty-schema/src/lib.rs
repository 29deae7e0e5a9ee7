//! # rusty-schema
//!
//! Declarative, fail-fast validation for flat key/value input such as query
//! parameters, form fields and uploaded files.
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_schema::{validators, Input, Schema};
//!
//! let schema = Schema::new()
//!     .field_with(
//!         "id",
//!         validators::number(),
//!         Some("`id` must be a number."),
//!         Some("Please add `id` to URL query."),
//!     )
//!     .field("role", validators::one_of(["admin", "user"]));
//!
//! let result = schema.parse(&Input::from_query("id=42&role=guest"));
//! assert!(!result.is_ok());
//! assert_eq!(result.error(), Some("⚠️ Error, role Please choose either admin, user."));
//!
//! // Fields accepted before the failure are still available
//! assert!(result.data().contains_key("id"));
//! ```
//!
//! ## Evaluation
//!
//! Rules run in the order they were added and parsing stops at the first
//! failure, so a [`ParseResult`] carries at most one error message. Values are
//! never transformed: `data` holds the raw input value of every accepted field.
//!
//! ## Architecture
//!
//! - **`rusty-schema-validation`** - pure check functions (formats, lengths, uploads)
//! - **`rusty-schema`** - values, the [`Validator`] trait, the [`validators`] catalog
//!   and [`Schema`]

pub mod config;
pub mod error;
pub mod input;
pub mod outcome;
pub mod schema;
pub mod validator;
pub mod validators;
pub mod value;

pub use config::SchemaConfig;
pub use error::SchemaError;
pub use input::Input;
pub use outcome::ValidationOutcome;
pub use schema::{default_required_message, FieldRule, ParseResult, ParsedData, Schema};
pub use validator::Validator;
pub use value::{FileUpload, Value};

// Re-export so callers can build file limits without a second dependency
pub use rusty_schema_validation::FileLimits;
