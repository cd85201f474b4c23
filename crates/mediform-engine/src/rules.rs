// File: src/rules.rs
// Purpose: Named collection of per-field validation rules

use std::collections::HashMap;

use crate::FormValues;

/// A validation rule for one field.
///
/// Receives the field's current value and a snapshot of the whole form so
/// cross-field rules (e.g. confirm-password) can inspect sibling fields.
/// `Ok(())` means valid; `Err(message)` carries the user-facing reason.
///
/// Rules must be total over their input: a panicking rule is a programming
/// error and propagates out of whichever engine operation triggered it.
pub type RuleFn = Box<dyn Fn(&str, &FormValues) -> Result<(), String> + Send + Sync>;

/// Field-name-keyed set of validation rules, fixed for a form's lifetime.
///
/// Fields without a rule are never validated and are treated as always
/// valid. Rule order is insignificant.
#[derive(Default)]
pub struct ValidationRules {
    rules: HashMap<String, RuleFn>,
}

impl ValidationRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for `field`, replacing any existing rule for the same name
    pub fn rule<F>(mut self, field: &str, rule: F) -> Self
    where
        F: Fn(&str, &FormValues) -> Result<(), String> + Send + Sync + 'static,
    {
        self.rules.insert(field.to_string(), Box::new(rule));
        self
    }

    pub fn get(&self, field: &str) -> Option<&RuleFn> {
        self.rules.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.rules.contains_key(field)
    }

    /// Names of every validated field
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Iterate over `(field, rule)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleFn)> {
        self.rules.iter().map(|(field, rule)| (field.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_lookup() {
        let rules = ValidationRules::new()
            .rule("email", |value, _| {
                if value.contains('@') {
                    Ok(())
                } else {
                    Err("Invalid email format".to_string())
                }
            })
            .rule("name", |value, _| {
                if value.is_empty() {
                    Err("Name is required".to_string())
                } else {
                    Ok(())
                }
            });

        assert_eq!(rules.len(), 2);
        assert!(rules.contains("email"));
        assert!(!rules.contains("address"));

        let rule = rules.get("email").unwrap();
        assert!(rule("a@b.com", &FormValues::new()).is_ok());
        assert!(rule("nope", &FormValues::new()).is_err());
    }

    #[test]
    fn test_later_rule_replaces_earlier() {
        let rules = ValidationRules::new()
            .rule("field", |_, _| Err("first".to_string()))
            .rule("field", |_, _| Err("second".to_string()));

        assert_eq!(rules.len(), 1);
        let rule = rules.get("field").unwrap();
        assert_eq!(rule("", &FormValues::new()), Err("second".to_string()));
    }
}
