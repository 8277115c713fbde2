//! Layout field projection.
//!
//! The layout lists the key aliases of the first query (minus metadata and
//! sort helper aliases), followed by one data field per column expression.

use indexmap::IndexMap;
use log::debug;

use crate::model::QueryPart;

/// Aliases never shown as layout fields (compared case-insensitively).
pub const EXCLUDED_ALIASES: &[&str] = &["uniqueKey", "govCorp"];

/// Default suffix marking sort helper aliases.
pub const DEFAULT_SORT_FIELD_SUFFIX: &str = "_SortField";

/// Role of a layout field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Derived from a key alias of the first query.
    Key,
    /// Derived from a column expression; aggregated into the data area.
    Data,
}

/// An entry in the reporting grid's field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutField {
    pub name: String,
    pub kind: FieldKind,
}

impl LayoutField {
    pub fn key(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Key,
        }
    }

    pub fn data(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Data,
        }
    }

    pub fn is_data(&self) -> bool {
        self.kind == FieldKind::Data
    }
}

/// Derives the layout field list.
#[derive(Debug, Clone)]
pub struct FieldProjector {
    sort_field_suffix: String,
}

impl Default for FieldProjector {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldProjector {
    pub fn new() -> Self {
        Self {
            sort_field_suffix: DEFAULT_SORT_FIELD_SUFFIX.to_string(),
        }
    }

    pub fn with_sort_field_suffix(mut self, suffix: &str) -> Self {
        self.sort_field_suffix = suffix.to_string();
        self
    }

    /// Whether a key alias becomes a layout field.
    pub fn is_layout_alias(&self, alias: &str) -> bool {
        let excluded = EXCLUDED_ALIASES
            .iter()
            .any(|name| name.eq_ignore_ascii_case(alias));
        let sort_helper =
            !self.sort_field_suffix.is_empty() && alias.ends_with(&self.sort_field_suffix);
        !(excluded || sort_helper)
    }

    /// Key fields of the first query, then data fields for every column
    /// expression, each in declaration order.
    pub fn project(
        &self,
        queries: &IndexMap<String, QueryPart>,
        column_expressions: &IndexMap<String, String>,
    ) -> Vec<LayoutField> {
        let mut fields = Vec::new();

        if let Some((name, first)) = queries.first() {
            for key in &first.keys {
                if self.is_layout_alias(&key.alias) {
                    fields.push(LayoutField::key(key.alias.as_str()));
                } else {
                    debug!("layout: excluding key '{}' of query '{}'", key.alias, name);
                }
            }
        }

        fields.extend(column_expressions.keys().map(|name| LayoutField::data(name.as_str())));
        fields
    }
}
