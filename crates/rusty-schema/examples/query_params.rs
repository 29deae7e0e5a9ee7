//! Validate a query string the way a `GET /api/demo?id=...` handler would.
//!
//! ```text
//! cargo run -p rusty-schema --example query_params -- "id=42"
//! RUST_LOG=rusty_schema=debug cargo run -p rusty-schema --example query_params -- "id=abc"
//! ```

use rusty_schema::validators::number;
use rusty_schema::{Input, Schema};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let query = std::env::args().nth(1).unwrap_or_default();

    let schema = Schema::new().field_with(
        "id",
        number(),
        Some("`id` must be a number."),
        Some("Please add `id` to URL query."),
    );

    let result = schema.parse(&Input::from_query(&query));
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
