use serde::Serialize;
use std::collections::BTreeMap;

/// Route value defaults keyed case-insensitively
///
/// Keys are normalized to ASCII lowercase on insert and on lookup, so
/// `"Page"`, `"page"` and `"PAGE"` all address the same entry.
///
/// # Examples
///
/// ```
/// use page_routes::RouteValues;
///
/// let mut values = RouteValues::new();
/// values.insert("Area", "Products");
///
/// assert_eq!(values.get("area"), Some("Products"));
/// assert_eq!(values.get("AREA"), Some("Products"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteValues {
    values: BTreeMap<String, String>,
}

impl RouteValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returning the previous value for the key if any
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) -> Option<String> {
        self.values.insert(normalize_key(key.as_ref()), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(&normalize_key(key)).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(&normalize_key(key))
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(&normalize_key(key))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates entries in key order (keys are lowercase)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn normalize_key(key: &str) -> String {
    key.to_ascii_lowercase()
}
