use super::ContextValue;
use crate::Result;
use compact_str::CompactString;
use ohno::bail;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata for a single artifact, as consumed by metrics.
///
/// A `null` value is indistinguishable from an absent key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    values: BTreeMap<CompactString, ContextValue>,
}

impl Context {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a JSON value, which must be an object.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            bail!("artifact metadata must be a JSON object, found {}", json_kind(&value));
        }

        Ok(serde_json::from_value(value)?)
    }

    /// Insert a value, returning the previous one if any.
    pub fn insert(&mut self, key: impl Into<CompactString>, value: impl Into<ContextValue>) -> Option<ContextValue> {
        self.values.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.values.get(key).filter(|value| !value.is_null())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Read a text value.
    pub fn text(&self, key: &str) -> Result<Option<&str>> {
        match self.get(key) {
            None => Ok(None),
            Some(ContextValue::String(s)) => Ok(Some(s.as_str())),
            Some(other) => bail!("context key '{key}' holds {}, expected a string", other.kind()),
        }
    }

    /// Read a numeric value. Integers and finite floats are accepted.
    #[expect(clippy::cast_precision_loss, reason = "metric thresholds do not need exact 64-bit integers")]
    pub fn number(&self, key: &str) -> Result<Option<f64>> {
        match self.get(key) {
            None => Ok(None),
            Some(ContextValue::Int(i)) => Ok(Some(*i as f64)),
            Some(ContextValue::Float(f)) if f.is_finite() => Ok(Some(*f)),
            Some(ContextValue::Float(f)) => bail!("context key '{key}' holds the non-finite number {f}"),
            Some(other) => bail!("context key '{key}' holds {}, expected a number", other.kind()),
        }
    }

    /// Read a boolean flag. Numbers are accepted, with any non-zero value being `true`.
    pub fn flag(&self, key: &str) -> Result<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some(ContextValue::Boolean(b)) => Ok(Some(*b)),
            Some(ContextValue::Int(i)) => Ok(Some(*i != 0)),
            Some(ContextValue::Float(f)) => Ok(Some(*f != 0.0)),
            Some(other) => bail!("context key '{key}' holds {}, expected a boolean", other.kind()),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Context
where
    K: Into<CompactString>,
    V: Into<ContextValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect(),
        }
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
