//! Numeric validation functions

/// Reads a decimal number out of text.
///
/// Surrounding whitespace is ignored. Infinite and NaN results are rejected,
/// so `"inf"`, `"NaN"` and overflowing literals such as `"1e400"` are not numbers.
pub fn parse_numeric(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Check if text is numeric
pub fn is_numeric(s: &str) -> bool {
    parse_numeric(s).is_some()
}

/// Format a number for messages (remove .0 for integers)
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Validates minimum value
pub fn validate_min(value: f64, min: f64) -> Result<(), String> {
    if value >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {}.", format_number(min)))
    }
}

/// Validates maximum value
pub fn validate_max(value: f64, max: f64) -> Result<(), String> {
    if value <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {}.", format_number(max)))
    }
}
