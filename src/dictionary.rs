//! Placeholder dictionaries used to fill templates.

use crate::constants::LIST_RENDER_SEPARATOR;
use indexmap::IndexMap;
use std::fmt;

/// A value a placeholder can be bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderValue {
    Text(String),
    List(Vec<String>),
}

impl PlaceholderValue {
    /// Converts a JSON value from a description into a placeholder value.
    ///
    /// Strings stay text, arrays become lists, `null` becomes empty text and
    /// everything else is rendered as its JSON representation.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => PlaceholderValue::Text(text.clone()),
            serde_json::Value::Null => PlaceholderValue::Text(String::new()),
            serde_json::Value::Array(items) => PlaceholderValue::List(
                items
                    .iter()
                    .map(|item| match item {
                        serde_json::Value::String(text) => text.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            other => PlaceholderValue::Text(other.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            PlaceholderValue::Text(text) => text.is_empty(),
            PlaceholderValue::List(items) => items.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PlaceholderValue::Text(text) => Some(text),
            PlaceholderValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PlaceholderValue::Text(_) => None,
            PlaceholderValue::List(items) => Some(items),
        }
    }
}

impl fmt::Display for PlaceholderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderValue::Text(text) => f.write_str(text),
            PlaceholderValue::List(items) => f.write_str(&items.join(LIST_RENDER_SEPARATOR)),
        }
    }
}

impl From<String> for PlaceholderValue {
    fn from(value: String) -> Self {
        PlaceholderValue::Text(value)
    }
}

impl From<&str> for PlaceholderValue {
    fn from(value: &str) -> Self {
        PlaceholderValue::Text(value.to_string())
    }
}

impl From<Vec<String>> for PlaceholderValue {
    fn from(value: Vec<String>) -> Self {
        PlaceholderValue::List(value)
    }
}

/// Insertion-ordered mapping from placeholder name to value.
///
/// Keys are unique; inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderDictionary {
    values: IndexMap<String, PlaceholderValue>,
}

impl PlaceholderDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K: Into<String>, V: Into<PlaceholderValue>>(&mut self, key: K, value: V) {
        self.values.insert(key.into(), value.into());
    }

    /// Inserts only if the key is not bound yet.
    pub fn insert_missing<K: Into<String>, V: Into<PlaceholderValue>>(
        &mut self,
        key: K,
        value: V,
    ) {
        self.values.entry(key.into()).or_insert_with(|| value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PlaceholderValue> {
        self.values.get(key)
    }

    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PlaceholderValue::as_text)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Overrides entries of `self` with every entry of `other`.
    pub fn merge(&mut self, other: &PlaceholderDictionary) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Builds a new dictionary from layers, later layers taking precedence.
    pub fn layered(layers: &[&PlaceholderDictionary]) -> Self {
        let mut result = PlaceholderDictionary::new();
        for layer in layers {
            result.merge(layer);
        }
        result
    }
}

impl<K: Into<String>, V: Into<PlaceholderValue>> FromIterator<(K, V)> for PlaceholderDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = PlaceholderDictionary::new();
        for (key, value) in iter {
            dictionary.insert(key, value);
        }
        dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn later_layers_override_earlier() {
        let base: PlaceholderDictionary =
            [("name", "base"), ("delimiter", ",")].into_iter().collect();
        let element: PlaceholderDictionary = [("name", "element")].into_iter().collect();
        let delimiters: PlaceholderDictionary = [("delimiter", "")].into_iter().collect();

        let merged = PlaceholderDictionary::layered(&[&base, &element, &delimiters]);
        assert_eq!(merged.get_text("name"), Some("element"));
        assert_eq!(merged.get_text("delimiter"), Some(""));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn insert_missing_keeps_existing() {
        let mut dictionary = PlaceholderDictionary::new();
        dictionary.insert("attribute_default", "supplied");
        dictionary.insert_missing("attribute_default", "fallback");
        dictionary.insert_missing("attribute_other", "fallback");
        assert_eq!(dictionary.get_text("attribute_default"), Some("supplied"));
        assert_eq!(dictionary.get_text("attribute_other"), Some("fallback"));
    }

    #[test]
    fn converts_json_values() {
        assert_eq!(PlaceholderValue::from_json(&json!("x")), PlaceholderValue::Text("x".into()));
        assert_eq!(PlaceholderValue::from_json(&json!(null)), PlaceholderValue::Text("".into()));
        assert_eq!(
            PlaceholderValue::from_json(&json!(true)),
            PlaceholderValue::Text("true".into())
        );
        assert_eq!(PlaceholderValue::from_json(&json!(1.5)), PlaceholderValue::Text("1.5".into()));
        assert_eq!(
            PlaceholderValue::from_json(&json!(["a", 2])),
            PlaceholderValue::List(vec!["a".into(), "2".into()])
        );
    }

    #[test]
    fn renders_lists_joined() {
        let value = PlaceholderValue::List(vec!["a".into(), "b".into()]);
        assert_eq!(value.to_string(), "a, b");
        assert!(PlaceholderValue::List(vec![]).is_empty());
    }
}
