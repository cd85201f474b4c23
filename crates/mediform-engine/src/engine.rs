// File: src/engine.rs
// Purpose: Form state ownership, validation timing and submission lifecycle

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

use crate::rules::ValidationRules;
use crate::{FormErrors, FormValues};

/// Future returned by a submit callback
pub type SubmitFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send>>;

/// Boxed submit callback invoked with a snapshot of the form values
pub type SubmitFn = Box<dyn FnMut(FormValues) -> SubmitFuture + Send>;

/// Form validation and submission controller.
///
/// Owns the per-field value/error/touched state for one form instance and
/// decides when an error becomes visible: a field shows its error only after
/// it has been blurred at least once, or after a whole-form validation pass
/// (e.g. a submit attempt) has forced every field touched.
///
/// Each field moves `untouched -> touched` on blur or forced validation and
/// never back, except through [`FormEngine::reset_form`], which resets the
/// whole form at once. Once touched, every change re-validates the field
/// immediately.
pub struct FormEngine {
    initial_values: FormValues,
    values: FormValues,
    rules: ValidationRules,
    errors: FormErrors,
    touched: HashSet<String>,
    submitting: bool,
    on_submit: SubmitFn,
}

impl FormEngine {
    /// Create an engine from initial values, rules and a submit callback.
    ///
    /// The field set is defined by `initial_values`; any field named in
    /// `rules` is validated, all others are treated as always valid.
    pub fn new<F, Fut>(initial_values: FormValues, rules: ValidationRules, mut on_submit: F) -> Self
    where
        F: FnMut(FormValues) -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Self {
            values: initial_values.clone(),
            initial_values,
            rules,
            errors: FormErrors::new(),
            touched: HashSet::new(),
            submitting: false,
            on_submit: Box::new(move |values| -> SubmitFuture { Box::pin(on_submit(values)) }),
        }
    }

    /// Validate a single field without mutating any engine state.
    ///
    /// Fields without a rule are always valid. `snapshot` is handed to the
    /// rule for cross-field checks and defaults to the current form values.
    pub fn validate_field(
        &self,
        field: &str,
        value: &str,
        snapshot: Option<&FormValues>,
    ) -> Result<(), String> {
        match self.rules.get(field) {
            Some(rule) => rule(value, snapshot.unwrap_or(&self.values)),
            None => Ok(()),
        }
    }

    /// Record a new value for `field`.
    ///
    /// Touched fields are re-validated immediately against the updated
    /// values, so corrections clear their error without another blur.
    /// Untouched fields stay silent until they are blurred.
    ///
    /// A cross-field rule on field B that reads field A is re-evaluated only
    /// when B itself changes or blurs; editing A leaves B's recorded error
    /// as-is until then.
    pub fn handle_change(&mut self, field: &str, value: impl Into<String>) {
        let value = value.into();
        self.values.insert(field.to_string(), value.clone());

        if self.touched.contains(field) {
            let result = self.validate_field(field, &value, None);
            self.errors
                .insert(field.to_string(), result.err().unwrap_or_default());
        }
    }

    /// Mark `field` as touched and validate it against the current values
    pub fn handle_blur(&mut self, field: &str) {
        self.touched.insert(field.to_string());

        let value = self.values.get(field).cloned().unwrap_or_default();
        let result = self.validate_field(field, &value, None);
        self.errors
            .insert(field.to_string(), result.err().unwrap_or_default());
    }

    /// Validate every declared field, rebuilding the error map from scratch.
    ///
    /// Marks all declared fields touched so every error becomes visible at
    /// once. Returns whether the whole form is valid.
    pub fn validate_form(&mut self) -> bool {
        let mut errors = FormErrors::new();
        let mut is_valid = true;

        for (field, rule) in self.rules.iter() {
            let value = self.values.get(field).map(String::as_str).unwrap_or("");
            if let Err(message) = rule(value, &self.values) {
                errors.insert(field.to_string(), message);
                is_valid = false;
            }
        }

        self.errors = errors;
        self.touched = self.rules.field_names().map(str::to_string).collect();

        is_valid
    }

    /// Run the whole-form validation pass and, when it succeeds, await the
    /// submit callback with a snapshot of the current values.
    ///
    /// Errors from the callback are logged and swallowed; they never reach
    /// the caller. The submitting flag is set for the duration of the call
    /// and is always false once it settles. Re-entrant submission is not
    /// blocked here: callers are expected to disable their submit control
    /// while [`FormEngine::is_submitting`] is true.
    pub async fn handle_submit(&mut self) {
        self.submitting = true;

        if self.validate_form() {
            let future = (self.on_submit)(self.values.clone());
            if let Err(error) = future.await {
                tracing::error!("Form submission error: {error:#}");
            }
        }

        self.submitting = false;
    }

    /// Restore initial values and clear all errors, touched flags and the
    /// submitting flag
    pub fn reset_form(&mut self) {
        self.values = self.initial_values.clone();
        self.errors.clear();
        self.touched.clear();
        self.submitting = false;
    }

    /// Error message for `field`, gated on visibility: empty unless the
    /// field has been touched
    pub fn get_field_error(&self, field: &str) -> &str {
        if !self.touched.contains(field) {
            return "";
        }
        self.errors.get(field).map(String::as_str).unwrap_or("")
    }

    /// Whether `field` has been touched and currently has no error.
    ///
    /// An untouched field is neither valid nor invalid for display purposes,
    /// so this returns false for it.
    pub fn is_field_valid(&self, field: &str) -> bool {
        self.touched.contains(field) && self.get_field_error(field).is_empty()
    }

    /// Live whole-form check against the current values.
    ///
    /// Ignores recorded errors and touched state, so it can gate a submit
    /// control without forcing premature error display.
    pub fn is_form_valid(&self) -> bool {
        self.rules.field_names().all(|field| {
            let value = self.values.get(field).map(String::as_str).unwrap_or("");
            self.validate_field(field, value, None).is_ok()
        })
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Current value of `field`, empty if never set
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }
}
