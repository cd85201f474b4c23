//! Password validation

/// Validate password strength: minimum 8 characters, uppercase, lowercase, number
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }

    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least one uppercase letter".to_string());
    }

    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter".to_string());
    }

    if !password.chars().any(|c| c.is_numeric()) {
        return Err("Password must contain at least one number".to_string());
    }

    Ok(())
}

/// Validate that the confirmation matches the original password
pub fn validate_confirm_password(password: &str, confirm_password: &str) -> Result<(), String> {
    if confirm_password.is_empty() {
        return Err("Please confirm your password".to_string());
    }

    if password != confirm_password {
        return Err("Passwords do not match".to_string());
    }

    Ok(())
}
