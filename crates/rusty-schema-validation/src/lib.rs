//! Rusty-Schema-Validation Core
//!
//! Pure check functions used by the `rusty-schema` validator catalog.
//! Nothing in here knows about schemas, fields or input values: every function
//! takes plain Rust data and answers with a `bool` or a `Result<(), String>`
//! whose error text is shown to end users.

pub mod datetime;
pub mod file;
pub mod format;
pub mod numeric;
pub mod string;

// Re-export all validators
pub use datetime::*;
pub use file::*;
pub use format::*;
pub use numeric::*;
pub use string::*;
