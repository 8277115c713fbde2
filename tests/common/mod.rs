#![allow(dead_code)]

use std::fs;

use querydef::markup::XML_DECLARATION;
use querydef::model::ReportQuery;

const ENTITIES: &[&str] = &["&amp;", "&quot;", "&lt;", "&gt;", "&apos;"];

pub fn load_fixture(name: &str) -> ReportQuery {
    let path = format!("tests/fixtures/{}", name);
    let s = fs::read_to_string(path).expect("fixture read");
    serde_json::from_str::<ReportQuery>(&s).expect("fixture parse")
}

/// Checks the document has the declaration, one root, balanced tags, and
/// only escaped attribute values and text.
pub fn assert_well_formed(doc: &str) {
    let body = doc
        .strip_prefix(XML_DECLARATION)
        .and_then(|rest| rest.strip_prefix('\n'))
        .expect("document starts with the declaration line");

    let mut stack: Vec<String> = Vec::new();
    let mut roots = 0;
    let mut rest = body;

    while let Some(start) = rest.find('<') {
        assert_escaped(&rest[..start]);
        let end = start + rest[start..].find('>').expect("unterminated tag");
        let tag = &rest[start + 1..end];

        if let Some(name) = tag.strip_prefix('/') {
            assert_eq!(stack.pop().as_deref(), Some(name), "mismatched close tag");
        } else {
            let self_closing = tag.ends_with('/');
            let inner = tag.trim_end_matches('/').trim_end();
            let name = inner.split_whitespace().next().expect("tag name");
            assert_attributes(&inner[name.len()..]);
            if stack.is_empty() {
                roots += 1;
            }
            if !self_closing {
                stack.push(name.to_string());
            }
        }
        rest = &rest[end + 1..];
    }

    assert_escaped(rest);
    assert!(stack.is_empty(), "unclosed elements: {:?}", stack);
    assert_eq!(roots, 1, "expected a single root element");
}

fn assert_attributes(attrs: &str) {
    let parts: Vec<&str> = attrs.split('"').collect();
    assert!(parts.len() % 2 == 1, "unbalanced attribute quotes in {:?}", attrs);
    for (i, part) in parts.iter().enumerate() {
        if i % 2 == 1 {
            assert_escaped(part);
        } else if i + 1 < parts.len() {
            let name = part.trim().strip_suffix('=').expect("attribute name=");
            assert!(!name.is_empty());
        } else {
            assert!(part.trim().is_empty(), "trailing attribute text {:?}", part);
        }
    }
}

fn assert_escaped(text: &str) {
    assert!(!text.contains(['<', '>', '"', '\'']), "unescaped text {:?}", text);
    for (i, _) in text.match_indices('&') {
        assert!(
            ENTITIES.iter().any(|e| text[i..].starts_with(e)),
            "bare ampersand in {:?}",
            text
        );
    }
}
