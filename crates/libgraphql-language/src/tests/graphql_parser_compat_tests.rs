//! Cross-checks against the `graphql-parser` crate: printed output must
//! parse to the same document as the input, and malformed input must be
//! rejected by both parsers.

use crate::ParseOptions;
use crate::print;
use crate::tests::utils::KITCHEN_SINK;
use crate::tests::utils::SCHEMA_KITCHEN_SINK;
use crate::tests::utils::parse_ok;
use crate::tests::utils::parse_schema_ok;

fn reference_query(source: &str) -> String {
    match graphql_parser::parse_query::<String>(source) {
        Ok(document) => document.to_string(),
        Err(error) => panic!("graphql-parser rejected {source:?}: {error}"),
    }
}

fn reference_schema(source: &str) -> String {
    match graphql_parser::parse_schema::<String>(source) {
        Ok(document) => document.to_string(),
        Err(error) => panic!("graphql-parser rejected {source:?}: {error}"),
    }
}

#[track_caller]
fn assert_query_print_agrees(source: &str) {
    let printed = print(&parse_ok(source));
    assert_eq!(reference_query(&printed), reference_query(source), "printed:\n{printed}");
}

#[track_caller]
fn assert_schema_print_agrees(source: &str) {
    let printed = print(&parse_schema_ok(source));
    assert_eq!(reference_schema(&printed), reference_schema(source), "printed:\n{printed}");
}

#[test]
fn printed_kitchen_sink_matches_reference() {
    assert_query_print_agrees(KITCHEN_SINK);
}

#[test]
fn printed_schema_kitchen_sink_matches_reference() {
    assert_schema_print_agrees(SCHEMA_KITCHEN_SINK);
}

#[test]
fn printed_snippets_match_reference() {
    for source in [
        "{ a }",
        "query Q($v: [Int!]! = [1, 2]) @dir { a(v: $v) }",
        "mutation M { like(id: \"4\") { likes } }",
        "{ a: b(c: {d: [1.5, -2, \"e\\n\\\"f\\\"\", ENUM, true, null]}) }",
        "{ ... on T @skip(if: true) { a } ... on U { b } ...F }",
        "fragment F on T @x { a { b { c } } }",
        "{ s(v: \"\\u00e9\\u2028\") }",
    ] {
        assert_query_print_agrees(source);
    }
}

#[test]
fn printed_schema_snippets_match_reference() {
    for source in [
        "scalar Date",
        "type T { a: [[Int!]]! b(x: Int = 1, y: [String] = [\"z\"]): T }",
        "interface I { a: Int }",
        "union U = A | B | C",
        "enum E { A B C }",
        "input In { a: Int = 1 b: In! }",
    ] {
        assert_schema_print_agrees(source);
    }
}

#[test]
fn malformed_queries_are_rejected_by_both() {
    for source in ["{", "{ field: {} }", "{ a(x: ) }", "query", "{ a(x: 1 }"] {
        assert!(
            graphql_parser::parse_query::<String>(source).is_err(),
            "graphql-parser accepted {source:?}",
        );
        assert!(
            crate::parse(source, ParseOptions::default()).is_err(),
            "accepted {source:?}",
        );
    }
}

#[test]
fn malformed_schemas_are_rejected_by_both() {
    for source in ["type", "type T {", "interface I { a }", "input I { a }"] {
        assert!(
            graphql_parser::parse_schema::<String>(source).is_err(),
            "graphql-parser accepted {source:?}",
        );
        assert!(
            crate::parse_schema(source, ParseOptions::default()).is_err(),
            "accepted {source:?}",
        );
    }
}
