//! Translate call arguments
//!
//! `TranslateArgs` covers every argument shape a translate call accepts:
//! plural count, default message, list or named interpolation, and the
//! per-call options. The `From` impls let callers pass the common shapes
//! directly.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

/// Message used when the key is missing from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultMessage {
    /// Format this template instead
    Text(String),
    /// Use the key itself as the template
    Key,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslateArgs {
    pub list: Vec<Value>,
    pub named: Map<String, Value>,
    pub plural: Option<i64>,
    pub default_message: Option<DefaultMessage>,
    /// Overrides the context locale for this call
    pub locale: Option<String>,
    pub missing_warn: Option<bool>,
    pub escape_parameter: Option<bool>,
}

impl TranslateArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self {
            named: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            ..Self::default()
        }
    }

    pub fn list<V, I>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self { list: items.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    /// Add one named value
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(key.into(), value.into());
        self
    }

    pub fn plural(mut self, count: i64) -> Self {
        self.plural = Some(count);
        self
    }

    pub fn default_message(mut self, message: impl Into<String>) -> Self {
        self.default_message = Some(DefaultMessage::Text(message.into()));
        self
    }

    pub fn default_to_key(mut self) -> Self {
        self.default_message = Some(DefaultMessage::Key);
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn missing_warn(mut self, enabled: bool) -> Self {
        self.missing_warn = Some(enabled);
        self
    }

    pub fn escape_parameter(mut self, enabled: bool) -> Self {
        self.escape_parameter = Some(enabled);
        self
    }

    /// Look up an interpolation token: list index first for numeric tokens,
    /// then named values, then the implicit `count` / `n` of a plural call.
    pub(crate) fn lookup(&self, token: &str) -> Option<Value> {
        if let Ok(index) = token.parse::<usize>()
            && let Some(value) = self.list.get(index)
        {
            return Some(value.clone());
        }
        if let Some(value) = self.named.get(token) {
            return Some(value.clone());
        }
        match (token, self.plural) {
            ("count" | "n", Some(count)) => Some(Value::from(count)),
            _ => None,
        }
    }
}

impl From<()> for TranslateArgs {
    fn from(_: ()) -> Self {
        Self::default()
    }
}

macro_rules! plural_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for TranslateArgs {
                fn from(count: $ty) -> Self {
                    Self::new().plural(i64::from(count))
                }
            }
        )*
    };
}

plural_from!(i32, u32);

impl From<i64> for TranslateArgs {
    fn from(count: i64) -> Self {
        Self::new().plural(count)
    }
}

/// Counts above `i64::MAX` saturate
impl From<usize> for TranslateArgs {
    fn from(count: usize) -> Self {
        Self::new().plural(i64::try_from(count).unwrap_or(i64::MAX))
    }
}

impl From<&str> for TranslateArgs {
    fn from(message: &str) -> Self {
        Self::new().default_message(message)
    }
}

impl From<String> for TranslateArgs {
    fn from(message: String) -> Self {
        Self::new().default_message(message)
    }
}

impl<V: Into<Value>> From<Vec<V>> for TranslateArgs {
    fn from(items: Vec<V>) -> Self {
        Self::list(items)
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for TranslateArgs {
    fn from(entries: [(K, V); N]) -> Self {
        Self::named(entries)
    }
}

impl<K: Into<String>, V: Into<Value>> From<HashMap<K, V>> for TranslateArgs {
    fn from(entries: HashMap<K, V>) -> Self {
        Self::named(entries)
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for TranslateArgs {
    fn from(entries: BTreeMap<K, V>) -> Self {
        Self::named(entries)
    }
}

impl From<Map<String, Value>> for TranslateArgs {
    fn from(named: Map<String, Value>) -> Self {
        Self { named, ..Self::default() }
    }
}

/// Dynamic shapes, as produced by `serde_json::json!`
impl From<Value> for TranslateArgs {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(named) => named.into(),
            Value::Array(list) => Self { list, ..Self::default() },
            Value::String(message) => message.into(),
            Value::Number(number) => match number.as_i64() {
                Some(count) => Self::new().plural(count),
                None => Self::default(),
            },
            Value::Bool(true) => Self::new().default_to_key(),
            Value::Bool(false) | Value::Null => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shapes_from_values() {
        assert_eq!(TranslateArgs::from(2).plural, Some(2));
        assert_eq!(
            TranslateArgs::from("fallback").default_message,
            Some(DefaultMessage::Text("fallback".into()))
        );
        assert_eq!(TranslateArgs::from(vec!["a", "b"]).list, vec![json!("a"), json!("b")]);
        assert_eq!(TranslateArgs::from([("name", "lingo")]).named["name"], json!("lingo"));
        assert_eq!(TranslateArgs::from(json!(true)).default_message, Some(DefaultMessage::Key));
        assert_eq!(TranslateArgs::from(json!({"name": "x"})).named["name"], json!("x"));
    }

    #[test]
    fn test_large_unsigned_count_saturates() {
        assert_eq!(TranslateArgs::from(usize::MAX).plural, Some(i64::MAX));
        assert_eq!(TranslateArgs::from(u32::MAX).plural, Some(i64::from(u32::MAX)));
        assert_eq!(TranslateArgs::from(-3i32).plural, Some(-3));
    }

    #[test]
    fn test_lookup_order() {
        let args = TranslateArgs::list(["zero"]).with("0", "named-zero").with("name", "x").plural(3);
        assert_eq!(args.lookup("0"), Some(json!("zero")));
        assert_eq!(args.lookup("name"), Some(json!("x")));
        assert_eq!(args.lookup("count"), Some(json!(3)));
        assert_eq!(args.lookup("n"), Some(json!(3)));
        assert_eq!(args.lookup("missing"), None);
    }

    #[test]
    fn test_explicit_count_wins_over_plural() {
        let args = TranslateArgs::named([("count", "many")]).plural(5);
        assert_eq!(args.lookup("count"), Some(json!("many")));
    }
}
