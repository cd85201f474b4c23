//! # mediform
//!
//! Form validation and submission toolkit for the mediform clinic
//! application.
//!
//! This crate is a convenience wrapper that re-exports three component
//! crates:
//!
//! - **`mediform-engine`** - the field-keyed form state and submission
//!   controller ([`FormEngine`])
//! - **`mediform-validation`** - pure validator functions (email, password,
//!   phone, dates, required fields)
//! - **`mediform-domain`** - clinic domain types, seed data and geolocation
//!   utilities
//!
//! ## Quick Start
//!
//! ```rust
//! use mediform::{FormEngine, FormValues, ValidationRules};
//! use mediform::validation::validate_email;
//!
//! let initial = FormValues::from([
//!     ("email".to_string(), String::new()),
//! ]);
//! let rules = ValidationRules::new().rule("email", |value, _| validate_email(value));
//!
//! let mut form = FormEngine::new(initial, rules, |_values| async { Ok(()) });
//! form.handle_blur("email");
//! assert_eq!(form.get_field_error("email"), "Email address is required");
//! ```

pub use mediform_engine::{
    FormEngine, FormErrors, FormValues, RuleFn, SubmitFn, SubmitFuture, ValidationRules,
};

// Re-export component crates under stable module names
pub use mediform_domain as domain;
pub use mediform_validation as validation;
