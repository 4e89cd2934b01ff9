use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single metadata value supplied for an artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    Null,
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(CompactString),
    List(Vec<Self>),
    Map(BTreeMap<CompactString, Self>),
}

impl ContextValue {
    /// Human-readable name of the value's type, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "a boolean",
            Self::Int(_) => "an integer",
            Self::Float(_) => "a float",
            Self::String(_) => "a string",
            Self::List(_) => "a list",
            Self::Map(_) => "a map",
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for ContextValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for ContextValue {
    #[expect(clippy::cast_precision_loss, reason = "values beyond i64::MAX only need approximate magnitude")]
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
    }
}

impl From<f64> for ContextValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        Self::String(value.into())
    }
}

impl From<CompactString> for ContextValue {
    fn from(value: CompactString) -> Self {
        Self::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_scalars() {
        let value: ContextValue = serde_json::from_str("42").unwrap();
        assert_eq!(value, ContextValue::Int(42));

        let value: ContextValue = serde_json::from_str("4.5").unwrap();
        assert_eq!(value, ContextValue::Float(4.5));

        let value: ContextValue = serde_json::from_str("true").unwrap();
        assert_eq!(value, ContextValue::Boolean(true));

        let value: ContextValue = serde_json::from_str("\"mit\"").unwrap();
        assert_eq!(value, ContextValue::String("mit".into()));

        let value: ContextValue = serde_json::from_str("null").unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_deserialize_nested() {
        let value: ContextValue = serde_json::from_str(r#"{"files": [1, "two"], "card": {"license": "mit"}}"#).unwrap();
        let ContextValue::Map(map) = value else {
            panic!("expected a map");
        };
        assert_eq!(map["files"], ContextValue::List(vec![ContextValue::Int(1), ContextValue::String("two".into())]));
        assert!(matches!(map["card"], ContextValue::Map(_)));
    }

    #[test]
    fn test_from_large_u64_falls_back_to_float() {
        assert_eq!(ContextValue::from(7_u64), ContextValue::Int(7));
        assert!(matches!(ContextValue::from(u64::MAX), ContextValue::Float(_)));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ContextValue::Null.kind(), "null");
        assert_eq!(ContextValue::from("x").kind(), "a string");
        assert_eq!(ContextValue::List(Vec::new()).kind(), "a list");
    }
}
