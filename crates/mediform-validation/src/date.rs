//! Date validation

use chrono::{Datelike, Local, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate that a date is today or later
pub fn validate_future_date(date: &str) -> Result<(), String> {
    if date.trim().is_empty() {
        return Err("Date is required".to_string());
    }

    let selected = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|_| "Please enter a valid date".to_string())?;

    if selected < Local::now().date_naive() {
        return Err("Please select a future date".to_string());
    }

    Ok(())
}

/// Validate a date of birth against a minimum age in whole years
pub fn validate_minimum_age(date_of_birth: &str, min_years: i32) -> Result<(), String> {
    if date_of_birth.trim().is_empty() {
        return Err("Date of birth is required".to_string());
    }

    let dob = NaiveDate::parse_from_str(date_of_birth.trim(), DATE_FORMAT)
        .map_err(|_| "Please enter a valid date".to_string())?;

    if age_in_years(dob, Local::now().date_naive()) < min_years {
        return Err(format!("You must be at least {} years old", min_years));
    }

    Ok(())
}

/// Whole years between `dob` and `today`, accounting for whether the
/// birthday has occurred yet this year
fn age_in_years(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}
