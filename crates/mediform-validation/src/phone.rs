//! Phone number validation

use once_cell::sync::Lazy;
use regex::Regex;

// US phone formats: (555) 123-4567, 555-123-4567, 5551234567
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+1\s?)?(\([0-9]{3}\)|[0-9]{3})[\s\-]?[0-9]{3}[\s\-]?[0-9]{4}$").unwrap()
});

/// Validate a 10-digit US phone number
pub fn validate_phone(phone: &str) -> Result<(), String> {
    if phone.trim().is_empty() {
        return Err("Phone number is required".to_string());
    }

    let digits_only: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits_only.len() != 10 {
        return Err("Please enter a valid 10-digit phone number".to_string());
    }

    if !PHONE_REGEX.is_match(phone) {
        return Err("Please enter a valid phone number (e.g., (555) 123-4567)".to_string());
    }

    Ok(())
}
