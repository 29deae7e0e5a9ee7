// File: src/outcome.rs
// Purpose: Result of running one validator against one value

use serde::Serialize;

/// Pass/fail result of one validator invocation
///
/// `message` is empty when `ok` is true. A failing outcome normally carries
/// text; when it does not, the schema falls back to the field's generic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub ok: bool,
    pub message: String,
}

impl ValidationOutcome {
    pub fn pass() -> Self {
        Self {
            ok: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }

    /// Pass when `ok`, otherwise fail with `message`
    pub fn check(ok: bool, message: &str) -> Self {
        if ok {
            Self::pass()
        } else {
            Self::fail(message)
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }
}

impl From<Result<(), String>> for ValidationOutcome {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::pass(),
            Err(message) => Self::fail(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check() {
        assert_eq!(ValidationOutcome::check(true, "nope"), ValidationOutcome::pass());
        assert_eq!(ValidationOutcome::check(false, "nope").message, "nope");
    }

    #[test]
    fn test_from_result() {
        assert!(ValidationOutcome::from(Ok(())).is_ok());

        let failed = ValidationOutcome::from(Err("too short".to_string()));
        assert!(!failed.is_ok());
        assert_eq!(failed.message, "too short");
    }
}
