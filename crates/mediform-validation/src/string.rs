//! Generic string validation

/// Required field validation: cannot be empty or whitespace only
pub fn validate_required(value: &str, field_label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", field_label));
    }

    Ok(())
}
