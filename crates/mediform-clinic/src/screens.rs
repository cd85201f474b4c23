// File: src/screens.rs
// Purpose: Per-screen form definitions wiring validators into FormEngine

use std::sync::Arc;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use mediform::domain::{BookingRequest, Patient, RegisterData};
use mediform::validation::{
    validate_confirm_password, validate_email, validate_future_date, validate_minimum_age,
    validate_password, validate_phone, validate_required,
};
use mediform::{FormEngine, FormValues, ValidationRules};

use crate::auth::AuthService;
use crate::booking::BookingService;
use crate::session::SessionStore;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn field(values: &FormValues, name: &str) -> String {
    values.get(name).cloned().unwrap_or_default()
}

fn empty_values(fields: &[&str]) -> FormValues {
    fields
        .iter()
        .map(|name| (name.to_string(), String::new()))
        .collect()
}

/// Login screen: email + password, submitting through the auth service
pub fn login_form(auth: Arc<AuthService>) -> FormEngine {
    let rules = ValidationRules::new()
        .rule("email", |value, _| validate_email(value))
        .rule("password", |value, _| validate_required(value, "Password"));

    FormEngine::new(empty_values(&["email", "password"]), rules, move |values| {
        let auth = auth.clone();
        async move {
            let signed_in = auth
                .login(&field(&values, "email"), &field(&values, "password"))
                .await?;
            if !signed_in {
                bail!("Invalid email or password");
            }
            Ok(())
        }
    })
}

/// Registration screen; confirmPassword is the one cross-field rule
pub fn register_form(auth: Arc<AuthService>) -> FormEngine {
    let rules = ValidationRules::new()
        .rule("firstName", |value, _| validate_required(value, "First name"))
        .rule("lastName", |value, _| validate_required(value, "Last name"))
        .rule("email", |value, _| validate_email(value))
        .rule("password", |value, _| validate_password(value))
        .rule("confirmPassword", |value, form| {
            let password = form.get("password").map(String::as_str).unwrap_or("");
            validate_confirm_password(password, value)
        })
        .rule("phone", |value, _| validate_phone(value))
        .rule("dateOfBirth", |value, _| validate_minimum_age(value, 18));

    let initial = empty_values(&[
        "firstName",
        "lastName",
        "email",
        "password",
        "confirmPassword",
        "phone",
        "dateOfBirth",
    ]);

    FormEngine::new(initial, rules, move |values| {
        let auth = auth.clone();
        async move {
            let date_of_birth =
                NaiveDate::parse_from_str(&field(&values, "dateOfBirth"), DATE_FORMAT)
                    .context("invalid date of birth")?;
            let created = auth
                .register(RegisterData {
                    first_name: field(&values, "firstName"),
                    last_name: field(&values, "lastName"),
                    email: field(&values, "email"),
                    password: field(&values, "password"),
                    phone: field(&values, "phone"),
                    date_of_birth,
                })
                .await?;
            if !created {
                bail!("An account with this email already exists");
            }
            Ok(())
        }
    })
}

/// Appointment booking screen
pub fn booking_form(booking: Arc<BookingService>) -> FormEngine {
    let rules = ValidationRules::new()
        .rule("fullName", |value, _| validate_required(value, "Full name"))
        .rule("email", |value, _| validate_email(value))
        .rule("doctorId", |value, _| {
            validate_required(value, "Doctor selection")
        })
        .rule("date", |value, _| validate_future_date(value))
        .rule("timeSlot", |value, _| validate_required(value, "Time slot"));

    let initial = empty_values(&["fullName", "email", "doctorId", "date", "timeSlot"]);

    FormEngine::new(initial, rules, move |values| {
        let booking = booking.clone();
        async move {
            let date = NaiveDate::parse_from_str(&field(&values, "date"), DATE_FORMAT)
                .context("invalid appointment date")?;
            booking.book(BookingRequest {
                full_name: field(&values, "fullName"),
                email: field(&values, "email"),
                doctor_id: field(&values, "doctorId"),
                date,
                time_slot: field(&values, "timeSlot"),
            })?;
            Ok(())
        }
    })
}

/// Profile edit screen, pre-filled from the signed-in patient and saved
/// back through the session store
pub fn profile_form(session: SessionStore, patient: &Patient) -> FormEngine {
    let rules = ValidationRules::new()
        .rule("firstName", |value, _| validate_required(value, "First name"))
        .rule("lastName", |value, _| validate_required(value, "Last name"))
        .rule("email", |value, _| validate_email(value))
        .rule("phone", |value, _| validate_phone(value));

    let initial = FormValues::from([
        ("firstName".to_string(), patient.first_name.clone()),
        ("lastName".to_string(), patient.last_name.clone()),
        ("email".to_string(), patient.email.clone()),
        ("phone".to_string(), patient.phone.clone()),
        ("address".to_string(), patient.address.clone()),
    ]);

    let patient = patient.clone();
    FormEngine::new(initial, rules, move |values| {
        let session = session.clone();
        let mut updated = patient.clone();
        async move {
            updated.first_name = field(&values, "firstName");
            updated.last_name = field(&values, "lastName");
            updated.email = field(&values, "email");
            updated.phone = field(&values, "phone");
            updated.address = field(&values, "address");
            session.save(&updated)
        }
    })
}
