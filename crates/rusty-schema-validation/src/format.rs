//! Format predicates: email, URL, IP, UUID, base64, JSON and phone numbers

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use once_cell::sync::Lazy;
use regex::Regex;
use std::net::IpAddr;

static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});

// 7-15 characters of digits and grouping punctuation, optional leading '+'
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9\s\-()]{7,15}$").unwrap()
});

/// Standard alphabet, padding optional when decoding
const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Schemes that are complete without a host part
const HOSTLESS_SCHEMES: &[&str] = &["mailto", "news", "file"];

/// Validate email format (RFC 5322 addr-spec)
///
/// The domain must be dotted, so `user@localhost` is rejected.
pub fn is_valid_email(s: &str) -> bool {
    if !email_address::EmailAddress::is_valid(s) {
        return false;
    }
    match s.rsplit_once('@') {
        Some((_, domain)) => {
            domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Validate URL format
///
/// The text must be an absolute URL. Apart from `mailto:`, `news:` and `file:`,
/// a host is required, so `http://` on its own is rejected.
pub fn is_valid_url(s: &str) -> bool {
    match url::Url::parse(s) {
        Ok(url) => url.has_host() || HOSTLESS_SCHEMES.contains(&url.scheme()),
        Err(_) => false,
    }
}

/// IPv4 or IPv6 literal
pub fn is_valid_ip(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}

/// Canonical hyphenated UUID, any letter case
pub fn is_valid_uuid(s: &str) -> bool {
    UUID_REGEX.is_match(s)
}

pub fn is_valid_base64(s: &str) -> bool {
    BASE64_LENIENT.decode(s).is_ok()
}

pub fn is_valid_json(s: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(s).is_ok()
}

pub fn is_valid_phone(s: &str) -> bool {
    PHONE_REGEX.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("user.name+tag@example.co.uk"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("test@"));
        assert!(!is_valid_email(""));
    }

    #[rstest]
    #[case("a@b")]
    #[case("a@localhost")]
    #[case("admin@mailserver")]
    fn test_email_requires_dotted_domain(#[case] input: &str) {
        assert!(!is_valid_email(input), "expected {input:?} to be rejected");
    }

    #[test]
    fn test_url_validation() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://sub.example.com/path?query=1"));
        assert!(is_valid_url("ftp://files.example.com"));
        assert!(is_valid_url("mailto:someone@example.com"));

        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("http://"));
        assert!(!is_valid_url(""));
    }

    #[rstest]
    #[case("127.0.0.1", true)]
    #[case("255.255.255.255", true)]
    #[case("::1", true)]
    #[case("2001:db8::ff00:42:8329", true)]
    #[case("256.1.1.1", false)]
    #[case("1.2.3", false)]
    #[case("localhost", false)]
    fn test_ip_validation(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(is_valid_ip(input), valid);
    }

    #[test]
    fn test_uuid_validation() {
        assert!(is_valid_uuid("123e4567-e89b-12d3-a456-426614174000"));
        assert!(is_valid_uuid("123E4567-E89B-12D3-A456-426614174000"));
        assert!(!is_valid_uuid("123e4567e89b12d3a456426614174000"));
        assert!(!is_valid_uuid("{123e4567-e89b-12d3-a456-426614174000}"));
        assert!(!is_valid_uuid("123e4567-e89b-12d3-a456-42661417400g"));
    }

    #[test]
    fn test_base64_validation() {
        assert!(is_valid_base64("aGVsbG8="));
        assert!(is_valid_base64("aGVsbG8"));
        assert!(is_valid_base64(""));
        assert!(!is_valid_base64("not base64!"));
        assert!(!is_valid_base64("aGVs*G8="));
    }

    #[test]
    fn test_json_validation() {
        assert!(is_valid_json(r#"{"a": [1, 2, 3]}"#));
        assert!(is_valid_json("42"));
        assert!(is_valid_json("\"text\""));
        assert!(!is_valid_json("{a: 1}"));
        assert!(!is_valid_json(""));
    }

    #[rstest]
    #[case("+1 555 123 4567", true)]
    #[case("(555) 123-4567", true)]
    #[case("5551234", true)]
    #[case("020-7946-0958", true)]
    #[case("123456", false)]
    #[case("+1234567890123456", false)]
    #[case("555-CALL-NOW", false)]
    fn test_phone_validation(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(is_valid_phone(input), valid);
    }
}
