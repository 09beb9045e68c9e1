use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Validation messages keyed by field name.
///
/// A field holds at most one message: the first failure recorded for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Errors {
    inner: HashMap<String, String>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless a message is already stored.
    ///
    /// Returns `true` if the message was stored.
    pub fn add(&mut self, field: &str, message: impl Into<String>) -> bool {
        if self.inner.contains_key(field) {
            return false;
        }
        self.inner.insert(field.to_string(), message.into());
        true
    }

    /// Message recorded for `field`, or `""` if there is none.
    pub fn get(&self, field: &str) -> &str {
        self.inner.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, field: &str) -> bool {
        self.inner.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort();
        let list = entries
            .into_iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<String>>()
            .join(", ");
        f.write_str(&list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = Errors::new();

        assert!(errors.add("email", "Invalid email address"));
        assert!(!errors.add("email", "This field cannot be blank"));

        assert_eq!(errors.get("email"), "Invalid email address");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_get_missing_field() {
        let errors = Errors::new();

        assert_eq!(errors.get("name"), "");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_display_lists_fields_in_order() {
        let mut errors = Errors::new();
        errors.add("password", "too short");
        errors.add("email", "bad");

        assert_eq!(errors.to_string(), "email: bad, password: too short");
    }

    #[test]
    fn test_serializes_as_object() {
        let mut errors = Errors::new();
        errors.add("name", "This field cannot be blank");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "This field cannot be blank" }));
    }
}
