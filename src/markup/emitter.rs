//! Section builders for the query-group definition document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::layout::{FieldKind, LayoutField};
use crate::model::{QueryPart, SubstitutionElement, TextSubstitution};
use crate::rewrite::rewrite_key_expression;

use super::element::Element;

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

pub const ROOT_ELEMENT: &str = "QueryGroupDefinition";
pub const SERVER_SIDE_AGGREGATION: &str = "true";
pub const EFFICIENT_QUERIES: &str = "false";
pub const GRID_TYPE: &str = "PivotGrid";

/// Keys whose alias starts with this are metadata and never emitted.
pub const UNIQUE_KEY_PREFIX: &str = "uniqueKey";

/// Whether an empty substitution list still produces a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionsPolicy {
    #[default]
    OmitWhenEmpty,
    /// Always render `<TextSubstitutions />`, for consumers that expect it.
    Always,
}

/// The root element with its fixed attributes and no children.
pub fn root_element() -> Element {
    Element::new(ROOT_ELEMENT)
        .attr("ServerSideAggregation", SERVER_SIDE_AGGREGATION)
        .attr("EfficientQueries", EFFICIENT_QUERIES)
        .attr("GridType", GRID_TYPE)
}

pub fn column_expressions(expressions: &IndexMap<String, String>) -> Element {
    Element::new("ColumnExpressions").children(
        expressions
            .iter()
            .map(|(name, text)| Element::new("Expression").attr("Name", name).text(text)),
    )
}

pub fn layout(fields: &[LayoutField]) -> Element {
    Element::new("Layout").children(fields.iter().map(|field| {
        let element = Element::new("Field").attr("Name", field.name.as_str());
        match field.kind {
            FieldKind::Key => element,
            FieldKind::Data => element.attr("IsAggregate", "true").attr("Area", "Data"),
        }
    }))
}

pub fn query_definitions(queries: &IndexMap<String, QueryPart>) -> Element {
    Element::new("QueryDefinitions").children(
        queries
            .iter()
            .map(|(name, part)| query_part_definition(name, part)),
    )
}

/// One `QueryGroupPartDefinition`: keys (rewritten), values (verbatim), and
/// the filter when present.
pub fn query_part_definition(name: &str, part: &QueryPart) -> Element {
    let keys = Element::new("Keys").children(
        part.keys
            .iter()
            .filter(|key| !key.alias.starts_with(UNIQUE_KEY_PREFIX))
            .map(|key| {
                Element::new("AliasedKey")
                    .attr("Alias", key.alias.as_str())
                    .attr("Expression", rewrite_key_expression(&key.expression))
            }),
    );

    let values = Element::new("Values").children(part.values.iter().map(|value| {
        Element::new("AliasedValue")
            .attr("Alias", value.alias.as_str())
            .attr("Expression", value.expression.as_str())
    }));

    let definition = Element::new("QueryGroupPartDefinition")
        .attr("Name", name)
        .child(keys)
        .child(values);

    if part.has_filter() {
        definition.child(Element::new("Filters").text(part.filter_text.as_str()))
    } else {
        definition
    }
}

/// The substitutions section, or `None` when it should be left out.
pub fn text_substitutions(
    substitutions: &[TextSubstitution],
    policy: SubstitutionsPolicy,
) -> Option<Element> {
    if substitutions.is_empty() && policy == SubstitutionsPolicy::OmitWhenEmpty {
        return None;
    }
    Some(Element::new("TextSubstitutions").children(substitutions.iter().map(text_substitution)))
}

fn text_substitution(substitution: &TextSubstitution) -> Element {
    Element::new("TextSubstitution")
        .attr("Token", substitution.token.as_str())
        .attr("Description", substitution.description.as_str())
        .attr("Multi", substitution.multi.to_string())
        .children(
            substitution
                .substitution_elements
                .iter()
                .map(substitution_element),
        )
}

fn substitution_element(element: &SubstitutionElement) -> Element {
    Element::new("SubstitutionElement")
        .attr("DisplayName", element.display_name.as_str())
        .attr("SubstitutionText", element.substitution_text.as_str())
}
