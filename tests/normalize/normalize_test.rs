#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use querydef::model::AliasedExpr;
    use querydef::normalize::{normalize_queries, normalize_query, NormalizeError, PositionalPolicy};
    use serde_json::{json, Value};

    #[test]
    fn test_both_shapes_produce_same_part() {
        let positional = json!([
            "ignored",
            ["Date=REPORT_DATE", "Book=BOOK"],
            ["PV=SUM(PV)", "Count"],
            " Desk='FX' ",
            {"owner": "risk"}
        ]);
        let named = json!({
            "Keys": ["Date=REPORT_DATE", "Book=BOOK"],
            "VALUES": ["PV=SUM(PV)", "Count"],
            "FilterText": " Desk='FX' ",
            "Meta": {"owner": "risk"}
        });

        let a = normalize_query("q", &positional, PositionalPolicy::Lenient).unwrap();
        let b = normalize_query("q", &named, PositionalPolicy::Lenient).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.filter_text, "Desk='FX'");
        assert_eq!(a.values[1], AliasedExpr::new("Count", "Count"));
    }

    #[test]
    fn test_single_separator_round_trips() {
        let raw = ["Date=REPORT_DATE", "PV=SUM(PV)", "Flag="];
        let part = normalize_query(
            "q",
            &json!([null, raw, raw, ""]),
            PositionalPolicy::Lenient,
        )
        .unwrap();

        let keys: Vec<String> = part.keys.iter().map(|k| k.to_string()).collect();
        let values: Vec<String> = part.values.iter().map(|v| v.to_string()).collect();
        assert_eq!(keys, raw);
        assert_eq!(values, raw);
    }

    #[test]
    fn test_only_first_separator_splits() {
        let part = normalize_query(
            "q",
            &json!({"keys": ["Cond=A==B"], "values": ["X=Y=Z"]}),
            PositionalPolicy::Lenient,
        )
        .unwrap();

        assert_eq!(part.keys, vec![AliasedExpr::new("Cond", "A==B")]);
        assert_eq!(part.values, vec![AliasedExpr::new("X", "Y=Z")]);
    }

    #[test]
    fn test_first_error_stops_normalization() {
        let mut queries: IndexMap<String, Value> = IndexMap::new();
        queries.insert("A".to_string(), json!([]));
        queries.insert("B".to_string(), json!(true));
        queries.insert("C".to_string(), json!(null));

        let err = normalize_queries(&queries, PositionalPolicy::Lenient).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::InputShape {
                query: "B".to_string(),
                found: "boolean"
            }
        );
        assert_eq!(
            err.to_string(),
            "Query 'B' must be a sequence or an object, found boolean"
        );
    }

    #[test]
    fn test_filter_must_be_scalar() {
        let err = normalize_query(
            "q",
            &json!([null, [], [], ["x"]]),
            PositionalPolicy::Lenient,
        )
        .unwrap_err();
        assert!(matches!(err, NormalizeError::FieldShape { field: "filter", found: "sequence", .. }));
    }

    #[test]
    fn test_strict_accepts_complete_sequences() {
        let part = normalize_query("q", &json!([null, [], [], ""]), PositionalPolicy::Strict).unwrap();
        assert!(part.keys.is_empty());
        assert!(part.meta.is_none());
    }
}
