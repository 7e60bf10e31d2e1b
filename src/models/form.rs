//! Read-only access to the fields of the sign-in form

use std::collections::HashMap;
use std::fmt;

pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";
pub const CONFIRM_PASSWORD_FIELD: &str = "confirm_password";

/// A source of named input values, such as an HTML form or CLI arguments
pub trait Form: Send + Sync {
    /// Current value of the named field, if the form has one
    fn field(&self, name: &str) -> Option<String>;

    /// Current value of the named field, empty when absent
    fn value(&self, name: &str) -> String {
        self.field(name).unwrap_or_default()
    }
}

/// In-memory form backed by a map of field names to values
#[derive(Clone, Default)]
pub struct FieldMap {
    fields: HashMap<String, String>,
}

impl FieldMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }
}

impl Form for FieldMap {
    fn field(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }
}

// Field values are passwords more often than not, so only names are shown.
impl fmt::Debug for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.fields.keys().collect();
        names.sort();
        f.debug_struct("FieldMap").field("fields", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_reads_empty() {
        let form = FieldMap::new().with(EMAIL_FIELD, "a@example.com");
        assert_eq!(form.field(PASSWORD_FIELD), None);
        assert_eq!(form.value(PASSWORD_FIELD), "");
        assert_eq!(form.value(EMAIL_FIELD), "a@example.com");
    }

    #[test]
    fn test_debug_hides_values() {
        let form = FieldMap::new()
            .with(EMAIL_FIELD, "a@example.com")
            .with(PASSWORD_FIELD, "secret123");
        let rendered = format!("{form:?}");
        assert!(rendered.contains("password"));
        assert!(!rendered.contains("secret123"));
    }
}
