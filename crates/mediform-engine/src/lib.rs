//! Mediform Engine
//!
//! Generic, field-name-keyed form validation and submission controller.
//!
//! A form screen supplies three things: a mapping of field names to initial
//! values, a set of validation rules, and a submit callback. The engine owns
//! all per-field state (value, error message, touched flag) and exposes the
//! change/blur/submit handlers the screen wires to its inputs.
//!
//! Errors are only surfaced for fields the user has interacted with, so a
//! freshly mounted form never opens with a wall of error messages.
//!
//! ```rust,ignore
//! use mediform_engine::{FormEngine, FormValues, ValidationRules};
//!
//! let initial = FormValues::from([("email".to_string(), String::new())]);
//! let rules = ValidationRules::new()
//!     .rule("email", |value, _| mediform_validation::validate_email(value));
//!
//! let mut form = FormEngine::new(initial, rules, |values| async move {
//!     submit_to_service(values).await
//! });
//!
//! form.handle_blur("email");
//! assert_eq!(form.get_field_error("email"), "Email address is required");
//! ```

mod engine;
mod rules;

pub use engine::{FormEngine, SubmitFn, SubmitFuture};
pub use rules::{RuleFn, ValidationRules};

use std::collections::HashMap;

/// Current value of every form field, keyed by field name
pub type FormValues = HashMap<String, String>;

/// Current error message per field; an empty string means no error
pub type FormErrors = HashMap<String, String>;
