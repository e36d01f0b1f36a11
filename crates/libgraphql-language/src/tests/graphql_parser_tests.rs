//! Tests for parsing executable documents.

use crate::GraphQLParser;
use crate::GraphQLSource;
use crate::ParseOptions;
use crate::ast::Definition;
use crate::ast::Field;
use crate::ast::Node;
use crate::ast::OperationType;
use crate::ast::Selection;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::parse;
use crate::tests::utils::KITCHEN_SINK;
use crate::tests::utils::assert_message_starts_with;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;
use crate::tests::utils::span;
use crate::visitor::VisitFlow;
use crate::visitor::Walker;
use crate::visitor::walk;
use std::ops::ControlFlow;
use std::sync::Arc;

fn first_field(source: &str) -> Arc<Field> {
    let document = parse_ok(source);
    let Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation");
    };
    let Selection::Field(field) = &operation.selection_set.selections[0] else {
        panic!("expected a field");
    };
    field.clone()
}

fn first_argument_value(source: &str) -> Value {
    first_field(source).arguments[0].value.clone()
}

/// Collects every node's location.
#[derive(Default)]
struct LocationCollector {
    locations: Vec<(Node, bool, bool)>,
}

impl Walker for LocationCollector {
    fn enter(&mut self, node: &Node) -> VisitFlow {
        let location = node.location();
        self.locations.push((
            node.clone(),
            location.is_some(),
            location.is_some_and(|location| location.source.is_some()),
        ));
        ControlFlow::Continue(())
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn provides_useful_errors() {
    assert_message_starts_with(
        &parse_err("{ ...MissingOn }\nfragment MissingOn Type\n"),
        "Syntax Error GraphQL (2:20) Expected \"on\", found Name \"Type\"",
    );
    assert_message_starts_with(
        &parse_err("{ field: {} }"),
        "Syntax Error GraphQL (1:10) Expected Name, found {",
    );
    assert_message_starts_with(
        &parse_err("notanoperation Foo { field }"),
        "Syntax Error GraphQL (1:1) Unexpected Name \"notanoperation\"",
    );
    assert_message_starts_with(&parse_err("..."), "Syntax Error GraphQL (1:1) Unexpected ...");
}

#[test]
fn provides_useful_error_when_using_a_named_source() {
    assert_message_starts_with(
        &parse_err(GraphQLSource::with_name("query", "MyQuery.graphql")),
        "Syntax Error MyQuery.graphql (1:6) Expected Name, found EOF",
    );
}

#[test]
fn rejects_empty_documents_and_selection_sets() {
    assert_message_starts_with(&parse_err(""), "Syntax Error GraphQL (1:1) Unexpected EOF");
    assert_message_starts_with(
        &parse_err("  # only a comment\n"),
        "Syntax Error GraphQL (2:1) Unexpected EOF",
    );
    assert_message_starts_with(
        &parse_err("{}"),
        "Syntax Error GraphQL (1:2) Expected Name, found }",
    );
}

#[test]
fn named_operations_require_a_name() {
    assert_message_starts_with(
        &parse_err("query { a }"),
        "Syntax Error GraphQL (1:7) Expected Name, found {",
    );
    assert_message_starts_with(
        &parse_err("subscription S { a }"),
        "Syntax Error GraphQL (1:1) Unexpected Name \"subscription\"",
    );
}

#[test]
fn parses_variable_inline_values() {
    parse_ok("{ field(complex: { a: { b: [ $var ] } }) }");
}

#[test]
fn default_values_must_be_constant() {
    assert_message_starts_with(
        &parse_err("query Foo($x: Complex = { a: { b: [ $var ] } }) { field }"),
        "Syntax Error GraphQL (1:37) Unexpected $",
    );
}

#[test]
fn duplicate_keys_in_input_object_are_a_syntax_error() {
    let error = parse_err("{ field(arg: { a: 1, a: 2 }) }");
    assert_message_starts_with(
        &error,
        "Syntax Error GraphQL (1:22) Duplicate input object field a.",
    );
    assert_eq!(error.position(), 21);
}

#[test]
fn duplicate_keys_in_nested_objects_are_independent() {
    parse_ok("{ field(arg: { a: { a: 1 }, b: { a: 2 } }) }");
    assert_message_starts_with(
        &parse_err("{ field(arg: { a: { b: 1, b: 2 } }) }"),
        "Syntax Error GraphQL (1:27) Duplicate input object field b.",
    );
}

#[test]
fn does_not_accept_fragments_named_on() {
    assert_message_starts_with(
        &parse_err("fragment on on on { on }"),
        "Syntax Error GraphQL (1:10) Unexpected Name \"on\"",
    );
}

#[test]
fn does_not_accept_fragment_spread_of_on() {
    assert_message_starts_with(
        &parse_err("{ ...on }"),
        "Syntax Error GraphQL (1:9) Expected Name, found }",
    );
}

#[test]
fn rejects_doubled_non_null() {
    assert_message_starts_with(
        &parse_err("query Q($a: Int!!) { a }"),
        "Syntax Error GraphQL (1:17) Expected $, found !",
    );
}

#[test]
fn rejects_schema_definitions() {
    assert_message_starts_with(
        &parse_err("type Foo { a: Int }"),
        "Syntax Error GraphQL (1:1) Unexpected Name \"type\"",
    );
}

// =============================================================================
// Tree shape
// =============================================================================

#[test]
fn parses_kitchen_sink() {
    let document = parse_ok(KITCHEN_SINK);
    assert_eq!(document.definitions.len(), 4);
    let kinds: Vec<_> = document
        .definitions
        .iter()
        .map(|definition| match definition {
            Definition::Operation(operation) => operation.operation.as_str(),
            Definition::Fragment(_) => "fragment",
        })
        .collect();
    assert_eq!(kinds, ["query", "mutation", "fragment", "query"]);
}

#[test]
fn creates_ast_with_locations() {
    let source = "{\n  node(id: 4) {\n    id,\n    name\n  }\n}\n";
    let document = parse_ok(source);
    assert_eq!(span(&document), Some((0, 41)));

    let Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation");
    };
    assert_eq!(span(operation), Some((0, 40)));
    assert_eq!(operation.operation, OperationType::Query);
    assert!(operation.name.is_none());
    assert!(operation.variable_definitions.is_empty());
    assert!(operation.directives.is_empty());
    assert_eq!(span(&operation.selection_set), Some((0, 40)));

    let Selection::Field(node) = &operation.selection_set.selections[0] else {
        panic!("expected a field");
    };
    assert_eq!(span(node), Some((4, 38)));
    assert!(node.alias.is_none());
    assert_eq!(node.name.value, "node");
    assert_eq!(span(&node.name), Some((4, 8)));

    let argument = &node.arguments[0];
    assert_eq!(span(argument), Some((9, 14)));
    assert_eq!(argument.name.value, "id");
    assert_eq!(span(&argument.name), Some((9, 11)));
    let Value::Int(id) = &argument.value else {
        panic!("expected an int");
    };
    assert_eq!(id.value, "4");
    assert_eq!(span(id), Some((13, 14)));

    let Some(selection_set) = &node.selection_set else {
        panic!("expected a selection set");
    };
    assert_eq!(span(selection_set), Some((16, 38)));
    let spans: Vec<_> = selection_set
        .selections
        .iter()
        .map(|selection| (selection.kind(), span(selection)))
        .collect();
    assert_eq!(
        spans,
        [
            (crate::ast::NodeKind::Field, Some((22, 24))),
            (crate::ast::NodeKind::Field, Some((30, 34))),
        ],
    );
}

#[test]
fn locations_carry_the_source() {
    let source = GraphQLSource::with_name("{ a }", "a.graphql");
    let document = parse(&source, ParseOptions::default()).unwrap();
    let location = document.location.as_ref().unwrap();
    assert_eq!(location.source.as_ref(), Some(&source));
    assert!(location.source.as_ref().unwrap().ptr_eq(&source));
    assert_eq!(location.source_text(), Some("{ a }"));
}

#[test]
fn parses_aliases() {
    let field = first_field("{ smallPic: profilePic(size: 64) }");
    assert_eq!(field.alias.as_ref().unwrap().value, "smallPic");
    assert_eq!(field.name.value, "profilePic");
    assert_eq!(field.response_key(), "smallPic");
    assert_eq!(first_field("{ pic }").response_key(), "pic");
}

#[test]
fn parses_fragments_and_inline_fragments() {
    let document = parse_ok("{ ...Frag @skip(if: true) ... on User { id } }");
    let Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation");
    };
    let [Selection::FragmentSpread(spread), Selection::InlineFragment(inline)] =
        operation.selection_set.selections.as_slice()
    else {
        panic!("unexpected selections");
    };
    assert_eq!(spread.name.value, "Frag");
    assert_eq!(spread.directives[0].name.value, "skip");
    assert_eq!(inline.type_condition.name.value, "User");
    assert_eq!(span(spread), Some((2, 25)));
    assert_eq!(span(inline), Some((26, 44)));
}

#[test]
fn parses_mutations_with_variables() {
    let document = parse_ok("mutation M($a: [Int!]!, $b: String = \"x\") @live { a }");
    let Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation");
    };
    assert_eq!(operation.operation, OperationType::Mutation);
    assert_eq!(operation.name.as_ref().unwrap().value, "M");
    assert_eq!(operation.directives[0].name.value, "live");

    let a = &operation.variable_definitions[0];
    assert_eq!(a.variable.name.value, "a");
    assert!(a.var_type.is_non_null());
    assert_eq!(a.var_type.innermost_name(), "Int");
    let TypeAnnotation::NonNull(outer) = &a.var_type else {
        panic!("expected a non-null type");
    };
    assert_eq!(span(outer), Some((15, 22)));
    assert!(a.default_value.is_none());

    let b = &operation.variable_definitions[1];
    assert!(matches!(b.var_type, TypeAnnotation::Named(_)));
    assert!(matches!(&b.default_value, Some(Value::String(value)) if value.value == "x"));
}

#[test]
fn parses_every_value_kind() {
    assert!(matches!(first_argument_value("{ f(a: 1) }"), Value::Int(_)));
    assert!(matches!(first_argument_value("{ f(a: -1.5e3) }"), Value::Float(_)));
    assert!(matches!(first_argument_value("{ f(a: \"s\") }"), Value::String(_)));
    assert!(matches!(first_argument_value("{ f(a: $v) }"), Value::Variable(_)));
    assert!(matches!(first_argument_value("{ f(a: [1, 2]) }"), Value::List(_)));
    assert!(matches!(first_argument_value("{ f(a: {b: 1}) }"), Value::Object(_)));
    assert!(matches!(first_argument_value("{ f(a: []) }"), Value::List(list) if list.values.is_empty()));
    assert!(matches!(first_argument_value("{ f(a: {}) }"), Value::Object(object) if object.fields.is_empty()));
}

#[test]
fn true_and_false_are_booleans_other_names_are_enums() {
    assert!(matches!(first_argument_value("{ f(a: true) }"), Value::Boolean(value) if value.value));
    assert!(matches!(first_argument_value("{ f(a: false) }"), Value::Boolean(value) if !value.value));
    assert!(matches!(first_argument_value("{ f(a: null) }"), Value::Enum(value) if value.value == "null"));
    assert!(matches!(first_argument_value("{ f(a: True) }"), Value::Enum(value) if value.value == "True"));
}

#[test]
fn object_fields_are_looked_up_by_name() {
    let Value::Object(object) = first_argument_value("{ f(a: {x: 1, y: $v}) }") else {
        panic!("expected an object");
    };
    assert!(object.field("y").is_some());
    assert!(object.field("z").is_none());
    assert!(!Value::Object(object).is_const());
    assert!(first_argument_value("{ f(a: [1, {b: [2]}]) }").is_const());
}

#[test]
fn string_values_are_decoded() {
    let Value::String(value) = first_argument_value(r#"{ f(a: "tab\there é") }"#) else {
        panic!("expected a string");
    };
    assert_eq!(value.value, "tab\there \u{e9}");
}

#[test]
fn keywords_are_valid_field_names() {
    let document = parse_ok("{ query mutation fragment on true }");
    let Definition::Operation(operation) = &document.definitions[0] else {
        panic!("expected an operation");
    };
    assert_eq!(operation.selection_set.selections.len(), 5);
}

// =============================================================================
// Options
// =============================================================================

#[test]
fn no_location_omits_every_location() {
    let document = parse(KITCHEN_SINK, ParseOptions::new().with_no_location(true)).unwrap();
    let mut collector = LocationCollector::default();
    let _ = walk(&document, &mut collector);
    assert!(!collector.locations.is_empty());
    for (node, has_location, _) in &collector.locations {
        assert!(!has_location, "{} has a location", node.kind());
    }
}

#[test]
fn no_source_keeps_offsets_without_the_source() {
    let document = parse(KITCHEN_SINK, ParseOptions::new().with_no_source(true)).unwrap();
    let mut collector = LocationCollector::default();
    let _ = walk(&document, &mut collector);
    for (node, has_location, has_source) in &collector.locations {
        assert!(has_location, "{} has no location", node.kind());
        assert!(!has_source, "{} retained its source", node.kind());
    }
    assert_eq!(
        span(&document).map(|(_, end)| end),
        Some(KITCHEN_SINK.len() as u32),
    );
}

#[test]
fn default_options_attach_source_everywhere() {
    let document = parse_ok(KITCHEN_SINK);
    let mut collector = LocationCollector::default();
    let _ = walk(&document, &mut collector);
    assert!(collector.locations.iter().all(|(_, location, source)| *location && *source));
}

#[test]
fn parsing_is_deterministic() {
    assert_eq!(parse_ok(KITCHEN_SINK), parse_ok(KITCHEN_SINK));
    let options = ParseOptions::new().with_no_location(true);
    assert_eq!(
        parse(KITCHEN_SINK, options).unwrap(),
        parse(format!("\n\n{KITCHEN_SINK}"), options).unwrap(),
    );
}

#[test]
fn parser_can_be_driven_directly() {
    let source = GraphQLSource::new("{ a }");
    let parser = GraphQLParser::new(&source, ParseOptions::default()).unwrap();
    let document = parser.parse_document().unwrap();
    assert_eq!(document.definitions.len(), 1);
    assert!(GraphQLParser::new(&GraphQLSource::new("\"open"), ParseOptions::default()).is_err());
}
