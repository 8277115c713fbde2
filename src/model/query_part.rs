//! Canonical query-part types.

use std::fmt;

use serde_json::{Map, Value};

/// An `alias=expression` pair, split on the first `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasedExpr {
    pub alias: String,
    pub expression: String,
}

impl AliasedExpr {
    pub fn new(alias: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            expression: expression.into(),
        }
    }

    /// Parse a key item. Returns `None` when there is no `=` or the alias
    /// would be empty.
    pub fn parse_key(raw: &str) -> Option<Self> {
        match raw.split_once('=') {
            Some((alias, expression)) if !alias.is_empty() => Some(Self::new(alias, expression)),
            _ => None,
        }
    }

    /// Parse a value item. Without a usable split the whole string serves as
    /// both alias and expression.
    pub fn parse_value(raw: &str) -> Self {
        Self::parse_key(raw).unwrap_or_else(|| Self::new(raw, raw))
    }
}

impl fmt::Display for AliasedExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.alias, self.expression)
    }
}

/// A query part in canonical form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPart {
    pub keys: Vec<AliasedExpr>,
    pub values: Vec<AliasedExpr>,
    /// Trimmed filter text, possibly empty.
    pub filter_text: String,
    /// Opaque passthrough.
    pub meta: Option<Value>,
}

impl QueryPart {
    pub fn has_filter(&self) -> bool {
        !self.filter_text.is_empty()
    }
}

/// A query part as found in the configuration, before normalization.
#[derive(Debug, Clone, Copy)]
pub enum RawQueryPart<'a> {
    /// `[ignored, keys, values, filter, meta?]`
    Positional(&'a [Value]),
    /// `{ keys, values, filterText | filter, meta? }`
    Named(&'a Map<String, Value>),
}

impl<'a> RawQueryPart<'a> {
    /// Classify a raw value, or `None` if it has neither shape.
    pub fn classify(value: &'a Value) -> Option<Self> {
        match value {
            Value::Array(items) => Some(RawQueryPart::Positional(items)),
            Value::Object(fields) => Some(RawQueryPart::Named(fields)),
            _ => None,
        }
    }
}

/// Short name for the JSON kind of a value, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "object",
    }
}
