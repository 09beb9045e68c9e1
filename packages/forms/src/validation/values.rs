use std::collections::HashMap;

use url::form_urlencoded;

/// Submitted form data: each field name maps to every value sent for it,
/// in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    inner: HashMap<String, Vec<String>>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` payload.
    ///
    /// Repeated keys keep all of their values.
    pub fn parse(input: &[u8]) -> Self {
        form_urlencoded::parse(input).collect()
    }

    /// Decode a raw query string (without the leading `?`).
    pub fn from_query(query: &str) -> Self {
        Self::parse(query.as_bytes())
    }

    /// Append a value for `field`, keeping any values already present.
    pub fn add(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.inner
            .entry(field.into())
            .or_insert_with(Vec::new)
            .push(value.into());
    }

    /// First value submitted for `field`, or `""` when the field is absent.
    pub fn get(&self, field: &str) -> &str {
        self.inner
            .get(field)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn get_all(&self, field: &str) -> &[String] {
        self.inner.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: &str) -> bool {
        self.inner.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<HashMap<String, Vec<String>>> for Values {
    fn from(inner: HashMap<String, Vec<String>>) -> Self {
        Self { inner }
    }
}

impl<K, V> FromIterator<(K, V)> for Values
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Values::new();
        for (field, value) in iter {
            values.add(field, value);
        }
        values
    }
}
