//! String validation functions

/// Number of characters (Unicode scalar values) in `s`
pub fn char_length(s: &str) -> usize {
    s.chars().count()
}

/// Validates minimum string length
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if char_length(s) >= min {
        Ok(())
    } else {
        Err(format!("must be at least {} characters long.", min))
    }
}

/// Validates maximum string length
pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if char_length(s) <= max {
        Ok(())
    } else {
        Err(format!("must be at most {} characters long.", max))
    }
}

/// String matching validators
pub fn validate_includes(s: &str, substring: &str) -> Result<(), String> {
    if s.contains(substring) {
        Ok(())
    } else {
        Err(format!("must include \"{}\".", substring))
    }
}

pub fn validate_starts_with(s: &str, prefix: &str) -> Result<(), String> {
    if s.starts_with(prefix) {
        Ok(())
    } else {
        Err(format!("must start with \"{}\".", prefix))
    }
}

pub fn validate_ends_with(s: &str, suffix: &str) -> Result<(), String> {
    if s.ends_with(suffix) {
        Ok(())
    } else {
        Err(format!("must end with \"{}\".", suffix))
    }
}

/// Enum/value restriction message: "Please choose either a, b."
pub fn choice_message<S: AsRef<str>>(allowed: &[S]) -> String {
    let joined = allowed
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Please choose either {}.", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_validators() {
        assert!(validate_min_length("hello", 3).is_ok());
        assert!(validate_min_length("hello", 5).is_ok());
        assert!(validate_min_length("hi", 3).is_err());

        assert!(validate_max_length("hello", 10).is_ok());
        assert!(validate_max_length("verylongstring", 5).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 5 characters, 10 bytes
        assert_eq!(char_length("héllö"), 5);
        assert!(validate_max_length("ééééé", 5).is_ok());
    }

    #[test]
    fn test_length_messages() {
        assert_eq!(
            validate_min_length("ab", 3).unwrap_err(),
            "must be at least 3 characters long."
        );
        assert_eq!(
            validate_max_length("abcd", 3).unwrap_err(),
            "must be at most 3 characters long."
        );
    }

    #[test]
    fn test_string_matching() {
        assert!(validate_includes("hello world", "world").is_ok());
        assert!(validate_includes("hello world", "foo").is_err());

        assert!(validate_starts_with("user_john", "user_").is_ok());
        assert!(validate_starts_with("admin_john", "user_").is_err());

        assert!(validate_ends_with("file.txt", ".txt").is_ok());
        assert_eq!(
            validate_ends_with("file.doc", ".txt").unwrap_err(),
            "must end with \".txt\"."
        );
    }

    #[test]
    fn test_choice_message() {
        assert_eq!(choice_message(&["a", "b"]), "Please choose either a, b.");
        assert_eq!(choice_message::<&str>(&[]), "Please choose either .");
    }
}
