//! Template dictionaries.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use weave_core::Inflector;

use super::flatten;

/// An ordered dictionary of values handed to a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Tokens(IndexMap<String, Value>);

impl Tokens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a serializable value into a dictionary.
    ///
    /// Every string leaf also contributes its case variants under derived
    /// keys (`name` adds `namePascalCase`, `nameKebabCasePlural`, ...). A
    /// member that fails to serialize is replaced by an empty object; a value
    /// that is not a struct or map yields an empty dictionary.
    pub fn from_object<T: Serialize + ?Sized>(inflector: &Inflector, value: &T) -> Self {
        let value = match flatten::to_value(value) {
            Ok(value) => flatten::expand(inflector, value),
            Err(err) => {
                tracing::warn!(error = %err, "could not flatten template tokens");
                return Self::new();
            }
        };

        match value {
            Value::Object(map) => Self(map.into_iter().collect()),
            other => {
                tracing::warn!(kind = value_kind(&other), "template tokens must be an object");
                Self::new()
            }
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Chainable [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an identifier under `key` together with its derived keys.
    pub fn with_identifier(mut self, inflector: &Inflector, key: &str, identifier: &str) -> Self {
        self.insert(key, identifier);
        for (k, v) in flatten::derived_keys(inflector, key, identifier) {
            self.insert(k, v);
        }
        self
    }

    /// A copy without the listed keys.
    pub fn without(&self, keys: &[&str]) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(k, _)| !keys.contains(&k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    pub fn extend(&mut self, other: Tokens) {
        self.0.extend(other.0);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Tokens {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
