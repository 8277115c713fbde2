//! Report-query configuration types.
//!
//! These mirror the already-parsed configuration document. Every section is
//! optional; a missing or `null` section reads as empty.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level report-query configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportQuery {
    /// Free-form document version. Not emitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Server-side definitions: column expressions and queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    /// Client-side definitions: text substitution menus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientConfig>,
}

impl ReportQuery {
    /// Column expressions in declaration order, if there is a server section.
    pub fn column_expressions(&self) -> Option<&IndexMap<String, String>> {
        self.server.as_ref().map(|s| &s.column_expressions)
    }

    /// Text substitutions in declaration order (empty if no client section).
    pub fn text_substitutions(&self) -> &[TextSubstitution] {
        self.client
            .as_ref()
            .map(|c| c.text_substitutions.as_slice())
            .unwrap_or(&[])
    }
}

/// Server section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    /// Name to expression text. Order determines layout field order.
    #[serde(deserialize_with = "null_as_default")]
    pub column_expressions: IndexMap<String, String>,

    /// Query name to raw query part, in either positional or object form.
    #[serde(deserialize_with = "null_as_default")]
    pub queries: IndexMap<String, serde_json::Value>,
}

/// Client section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub text_substitutions: Vec<TextSubstitution>,
}

/// A named menu offered to the report user for a token.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextSubstitution {
    pub token: String,
    pub description: String,
    pub multi: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub substitution_elements: Vec<SubstitutionElement>,
}

/// One display-name/substitution-text entry of a menu.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubstitutionElement {
    pub display_name: String,
    pub substitution_text: String,
}

impl SubstitutionElement {
    pub fn new(display_name: impl Into<String>, substitution_text: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            substitution_text: substitution_text.into(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
