//! Locale message catalogs
//!
//! A catalog is a JSON-shaped tree of message templates for one locale.
//! Keys are resolved as dotted paths (`menu.login`, `items.0`) first and as
//! flat keys (`"menu.login": "..."`) second.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(Map<String, Value>);

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from an arbitrary JSON value, which must be an object
    pub fn from_value(locale: &str, value: Value) -> CoreResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(CoreError::invalid_catalog(
                locale,
                format!("expected an object at the catalog root, found {}", value_kind(&other)),
            )),
        }
    }

    pub fn from_json(locale: &str, json: &str) -> CoreResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(locale, value)
    }

    /// Serialize a typed message schema into a catalog
    pub fn from_schema<S: Serialize>(locale: &str, schema: &S) -> CoreResult<Self> {
        Self::from_value(locale, serde_json::to_value(schema)?)
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<Value>) -> &mut Self {
        self.0.insert(key.into(), message.into());
        self
    }

    /// Resolve a key to its message template
    pub fn resolve(&self, key: &str) -> Option<&str> {
        self.resolve_path(key)
            .or_else(|| self.0.get(key).and_then(Value::as_str))
    }

    fn resolve_path(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        current.as_str()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Catalog {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Typed message schema supplied by the application.
///
/// Every locale provides the same `S`, so a locale missing a message is a
/// compile error instead of a runtime fallback to the key.
///
/// ```
/// use lingo_core::Messages;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Resources {
///     hello: &'static str,
/// }
///
/// let catalogs = Messages::new()
///     .locale("en", Resources { hello: "Hello, {name}" })
///     .locale("ja", Resources { hello: "こんにちは、{name}" })
///     .into_catalogs()
///     .unwrap();
/// assert_eq!(catalogs["ja"].resolve("hello"), Some("こんにちは、{name}"));
/// ```
#[derive(Debug, Clone)]
pub struct Messages<S> {
    entries: Vec<(String, S)>,
}

impl<S: Serialize> Messages<S> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn locale(mut self, locale: impl Into<String>, messages: S) -> Self {
        self.entries.push((locale.into(), messages));
        self
    }

    pub fn into_catalogs(self) -> CoreResult<HashMap<String, Catalog>> {
        self.entries
            .into_iter()
            .map(|(locale, schema)| {
                let catalog = Catalog::from_schema(&locale, &schema)?;
                Ok((locale, catalog))
            })
            .collect()
    }
}

impl<S: Serialize> Default for Messages<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, L: Into<String>> FromIterator<(L, S)> for Messages<S> {
    fn from_iter<I: IntoIterator<Item = (L, S)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(locale, schema)| (locale.into(), schema)).collect() }
    }
}
