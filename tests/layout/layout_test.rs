use indexmap::IndexMap;
use querydef::layout::{FieldProjector, LayoutField};
use querydef::model::QueryPart;
use querydef::normalize::{normalize_query, PositionalPolicy};
use serde_json::json;

fn queries(entries: &[(&str, serde_json::Value)]) -> IndexMap<String, QueryPart> {
    entries
        .iter()
        .map(|(name, raw)| {
            let part = normalize_query(name, raw, PositionalPolicy::Lenient).unwrap();
            (name.to_string(), part)
        })
        .collect()
}

fn expressions(names: &[&str]) -> IndexMap<String, String> {
    names
        .iter()
        .map(|n| (n.to_string(), format!("[{}]", n)))
        .collect()
}

#[test]
fn test_main_query_layout() {
    let queries = queries(&[(
        "MainQuery",
        json!([null, ["Date=REPORT_DATE", "uniqueKey=ID", "govCorp=X"], ["Value=SUM(Amount)"], ""]),
    )]);

    let fields = FieldProjector::new().project(&queries, &expressions(&["TotalValue"]));
    assert_eq!(
        fields,
        vec![LayoutField::key("Date"), LayoutField::data("TotalValue")]
    );
}

#[test]
fn test_exclusions_keep_relative_order() {
    let queries = queries(&[(
        "Q",
        json!({"keys": [
            "Desk=D",
            "GOVCORP=G",
            "Tenor_SortField=T",
            "Book=B",
            "UniqueKey=U",
            "Tenor=T"
        ]}),
    )]);

    let fields = FieldProjector::new().project(&queries, &expressions(&["Z", "A"]));
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Desk", "Book", "Tenor", "Z", "A"]);
}

#[test]
fn test_dropped_keys_never_reach_layout() {
    let queries = queries(&[("Q", json!([null, ["NoSeparator", "=Empty", "Ok=1"], [], ""]))]);

    let fields = FieldProjector::new().project(&queries, &IndexMap::new());
    assert_eq!(fields, vec![LayoutField::key("Ok")]);
}

#[test]
fn test_later_queries_ignored() {
    let queries = queries(&[
        ("First", json!([null, [], [], ""])),
        ("Second", json!([null, ["Desk=D"], [], ""])),
    ]);

    let fields = FieldProjector::new().project(&queries, &expressions(&["V"]));
    assert_eq!(fields, vec![LayoutField::data("V")]);
}

#[test]
fn test_empty_inputs() {
    let fields = FieldProjector::default().project(&IndexMap::new(), &IndexMap::new());
    assert!(fields.is_empty());
}
