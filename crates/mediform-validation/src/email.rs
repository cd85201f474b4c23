//! Email validation

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email address is required".to_string());
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err("Please enter a valid email address (e.g., user@domain.com)".to_string());
    }

    Ok(())
}

/// Check email format without producing a message
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
