//! Normalizing raw query parts into canonical [`QueryPart`]s.
//!
//! A query part arrives either as a positional sequence
//! `[ignored, keys, values, filter, meta?]` or as an object with `keys`,
//! `values`, `filterText`/`filter` and `meta` fields (field names matched
//! case-insensitively). Both resolve to the same [`QueryPart`] here; nothing
//! downstream looks at the raw shape again.

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::{value_kind, AliasedExpr, QueryPart, RawQueryPart};

/// Minimum length of a complete positional query part.
pub const POSITIONAL_LEN: usize = 4;

const KEYS_SLOT: usize = 1;
const VALUES_SLOT: usize = 2;
const FILTER_SLOT: usize = 3;
const META_SLOT: usize = 4;

/// Errors raised while normalizing query parts.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum NormalizeError {
    #[error("Query '{query}' must be a sequence or an object, found {found}")]
    InputShape { query: String, found: &'static str },

    #[error("Query '{query}': field '{field}' must be {expected}, found {found}")]
    FieldShape {
        query: String,
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Query '{query}' has {len} positional elements, at least 4 required")]
    ShortPositional { query: String, len: usize },
}

/// How to treat positional sequences shorter than [`POSITIONAL_LEN`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionalPolicy {
    /// Missing trailing slots read as empty.
    #[default]
    Lenient,
    /// Short sequences are an error.
    Strict,
}

/// Normalize every query in mapping order.
pub fn normalize_queries(
    queries: &IndexMap<String, Value>,
    policy: PositionalPolicy,
) -> Result<IndexMap<String, QueryPart>, NormalizeError> {
    queries
        .iter()
        .map(|(name, raw)| Ok((name.clone(), normalize_query(name, raw, policy)?)))
        .collect()
}

/// Normalize a single raw query part.
pub fn normalize_query(
    name: &str,
    raw: &Value,
    policy: PositionalPolicy,
) -> Result<QueryPart, NormalizeError> {
    match RawQueryPart::classify(raw) {
        Some(RawQueryPart::Positional(items)) => normalize_positional(name, items, policy),
        Some(RawQueryPart::Named(fields)) => normalize_named(name, fields),
        None => Err(NormalizeError::InputShape {
            query: name.to_string(),
            found: value_kind(raw),
        }),
    }
}

fn normalize_positional(
    name: &str,
    items: &[Value],
    policy: PositionalPolicy,
) -> Result<QueryPart, NormalizeError> {
    if items.len() < POSITIONAL_LEN {
        if policy == PositionalPolicy::Strict {
            return Err(NormalizeError::ShortPositional {
                query: name.to_string(),
                len: items.len(),
            });
        }
        debug!(
            "query '{}': {} positional elements, defaulting missing slots",
            name,
            items.len()
        );
    }

    Ok(QueryPart {
        keys: parse_keys(name, items.get(KEYS_SLOT))?,
        values: parse_values(name, items.get(VALUES_SLOT))?,
        filter_text: parse_filter(name, items.get(FILTER_SLOT))?,
        meta: items.get(META_SLOT).cloned(),
    })
}

fn normalize_named(name: &str, fields: &Map<String, Value>) -> Result<QueryPart, NormalizeError> {
    let filter = field(fields, "filterText")
        .filter(|v| !v.is_null())
        .or_else(|| field(fields, "filter"));

    Ok(QueryPart {
        keys: parse_keys(name, field(fields, "keys"))?,
        values: parse_values(name, field(fields, "values"))?,
        filter_text: parse_filter(name, filter)?,
        meta: field(fields, "meta").cloned(),
    })
}

/// Case-insensitive field lookup. An exact match wins over a folded one.
fn field<'a>(fields: &'a Map<String, Value>, wanted: &str) -> Option<&'a Value> {
    fields.get(wanted).or_else(|| {
        fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(wanted))
            .map(|(_, v)| v)
    })
}

fn parse_keys(name: &str, raw: Option<&Value>) -> Result<Vec<AliasedExpr>, NormalizeError> {
    let items = string_items(name, "keys", raw)?;
    Ok(items
        .into_iter()
        .filter_map(|item| {
            let key = AliasedExpr::parse_key(item);
            if key.is_none() {
                debug!("query '{}': dropping key '{}' without alias", name, item);
            }
            key
        })
        .collect())
}

fn parse_values(name: &str, raw: Option<&Value>) -> Result<Vec<AliasedExpr>, NormalizeError> {
    let items = string_items(name, "values", raw)?;
    Ok(items
        .into_iter()
        .filter_map(|item| {
            if item.is_empty() {
                debug!("query '{}': dropping empty value", name);
                return None;
            }
            let value = AliasedExpr::parse_value(item);
            if value.alias == value.expression && value.alias == item {
                debug!("query '{}': value '{}' used as its own alias", name, item);
            }
            Some(value)
        })
        .collect())
}

/// String items of a keys/values slot. Absent or null slots are empty;
/// non-string items are skipped.
fn string_items<'a>(
    name: &str,
    field: &'static str,
    raw: Option<&'a Value>,
) -> Result<Vec<&'a str>, NormalizeError> {
    match raw {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items
            .iter()
            .filter_map(|item| {
                let s = item.as_str();
                if s.is_none() {
                    debug!(
                        "query '{}': skipping non-string {} item in {}",
                        name,
                        value_kind(item),
                        field
                    );
                }
                s
            })
            .collect()),
        Some(other) => Err(NormalizeError::FieldShape {
            query: name.to_string(),
            field,
            expected: "a sequence of strings",
            found: value_kind(other),
        }),
    }
}

/// Filter text, trimmed. Scalars other than strings use their JSON text.
fn parse_filter(name: &str, raw: Option<&Value>) -> Result<String, NormalizeError> {
    match raw {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(scalar @ (Value::Bool(_) | Value::Number(_))) => Ok(scalar.to_string()),
        Some(other) => Err(NormalizeError::FieldShape {
            query: name.to_string(),
            field: "filter",
            expected: "a string",
            found: value_kind(other),
        }),
    }
}
