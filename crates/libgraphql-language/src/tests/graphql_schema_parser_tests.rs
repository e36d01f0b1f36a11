//! Tests for parsing schema documents.

use crate::GraphQLSchemaParser;
use crate::GraphQLSource;
use crate::ParseOptions;
use crate::ast::NodeKind;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaDocument;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::parse_schema;
use crate::tests::utils::SCHEMA_KITCHEN_SINK;
use crate::tests::utils::assert_message_starts_with;
use crate::tests::utils::parse_schema_err;
use crate::tests::utils::parse_schema_ok;
use crate::tests::utils::span;
use std::sync::Arc;

fn only_definition(document: &Arc<SchemaDocument>) -> &SchemaDefinition {
    assert_eq!(document.definitions.len(), 1);
    &document.definitions[0]
}

// =============================================================================
// Object types
// =============================================================================

#[test]
fn simple_type() {
    let document = parse_schema_ok("\ntype Hello {\n  world: String\n}");
    assert_eq!(span(&document), Some((1, 31)));
    let SchemaDefinition::Type(hello) = only_definition(&document) else {
        panic!("expected a type definition");
    };
    assert_eq!(span(hello), Some((1, 31)));
    assert_eq!(hello.name.value, "Hello");
    assert_eq!(span(&hello.name), Some((6, 11)));
    assert!(hello.interfaces.is_empty());

    let world = &hello.fields[0];
    assert_eq!(span(world), Some((16, 29)));
    assert_eq!(span(&world.name), Some((16, 21)));
    assert!(world.arguments.is_empty());
    let TypeAnnotation::Named(string) = &world.field_type else {
        panic!("expected a named type");
    };
    assert_eq!(string.name.value, "String");
    assert_eq!(span(string), Some((23, 29)));
}

#[test]
fn simple_non_null_type() {
    let document = parse_schema_ok("\ntype Hello {\n  world: String!\n}");
    let SchemaDefinition::Type(hello) = only_definition(&document) else {
        panic!("expected a type definition");
    };
    assert_eq!(span(hello), Some((1, 32)));
    let world = &hello.fields[0];
    assert_eq!(span(world), Some((16, 30)));
    let TypeAnnotation::NonNull(non_null) = &world.field_type else {
        panic!("expected a non-null type");
    };
    assert_eq!(span(non_null), Some((23, 30)));
    assert_eq!(span(&non_null.inner_type), Some((23, 29)));
}

#[test]
fn type_implementing_one_interface() {
    let document = parse_schema_ok("type Hello implements World { }");
    let SchemaDefinition::Type(hello) = only_definition(&document) else {
        panic!("expected a type definition");
    };
    assert_eq!(span(hello), Some((0, 31)));
    assert_eq!(span(&hello.name), Some((5, 10)));
    assert_eq!(hello.interfaces.len(), 1);
    assert_eq!(hello.interfaces[0].name.value, "World");
    assert_eq!(span(&hello.interfaces[0]), Some((22, 27)));
    assert!(hello.fields.is_empty());
}

#[test]
fn type_implementing_several_interfaces() {
    let document = parse_schema_ok("type Hello implements Wo, rld { }");
    let SchemaDefinition::Type(hello) = only_definition(&document) else {
        panic!("expected a type definition");
    };
    assert_eq!(span(hello), Some((0, 33)));
    let interfaces: Vec<_> = hello
        .interfaces
        .iter()
        .map(|interface| (interface.name.value.as_str(), span(interface)))
        .collect();
    assert_eq!(interfaces, [("Wo", Some((22, 24))), ("rld", Some((26, 29)))]);
}

#[test]
fn field_with_argument() {
    let document = parse_schema_ok("\ntype Hello {\n  world(flag: Boolean): String\n}");
    let SchemaDefinition::Type(hello) = only_definition(&document) else {
        panic!("expected a type definition");
    };
    assert_eq!(span(hello), Some((1, 46)));
    let world = &hello.fields[0];
    assert_eq!(span(world), Some((16, 44)));
    assert_eq!(span(&world.field_type), Some((38, 44)));

    let flag = &world.arguments[0];
    assert_eq!(flag.name.value, "flag");
    assert_eq!(span(&flag.name), Some((22, 26)));
    assert_eq!(span(&flag.arg_type), Some((28, 35)));
    assert_eq!(span(flag), Some((22, 35)));
    assert!(flag.default_value.is_none());
}

#[test]
fn argument_with_default_value() {
    let document = parse_schema_ok("\ntype Hello {\n  world(flag: Boolean = true): String\n}");
    let SchemaDefinition::Type(hello) = only_definition(&document) else {
        panic!("expected a type definition");
    };
    let flag = &hello.fields[0].arguments[0];
    assert_eq!(span(flag), Some((22, 42)));
    assert!(matches!(&flag.default_value, Some(Value::Boolean(value)) if value.value));
}

#[test]
fn list_argument_with_list_default_value() {
    let document =
        parse_schema_ok("\ntype Hello {\n  world(things: [String] = [\"a\"]): String\n}");
    let SchemaDefinition::Type(hello) = only_definition(&document) else {
        panic!("expected a type definition");
    };
    let things = &hello.fields[0].arguments[0];
    assert_eq!(span(&things.arg_type), Some((30, 38)));
    let Some(default_value) = &things.default_value else {
        panic!("expected a default value");
    };
    assert_eq!(span(default_value), Some((41, 46)));
    assert_eq!(span(things), Some((22, 46)));
}

#[test]
fn several_arguments() {
    let document = parse_schema_ok("type Q { f(a: Int, b: [ID!]!): String }");
    let SchemaDefinition::Type(q) = only_definition(&document) else {
        panic!("expected a type definition");
    };
    let names: Vec<_> = q.fields[0]
        .arguments
        .iter()
        .map(|argument| argument.name.value.as_str())
        .collect();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(q.fields[0].arguments[1].arg_type.innermost_name(), "ID");
}

#[test]
fn interface() {
    let document = parse_schema_ok("\ninterface Hello {\n  world: String\n}");
    let SchemaDefinition::Interface(hello) = only_definition(&document) else {
        panic!("expected an interface definition");
    };
    assert_eq!(span(hello), Some((1, 36)));
    assert_eq!(span(&hello.name), Some((11, 16)));
    assert_eq!(span(&hello.fields[0]), Some((21, 34)));
    assert_eq!(span(&hello.fields[0].field_type), Some((28, 34)));
}

// =============================================================================
// Unions, scalars, enums and input objects
// =============================================================================

#[test]
fn single_member_union() {
    let document = parse_schema_ok("union Hello = World");
    let SchemaDefinition::Union(hello) = only_definition(&document) else {
        panic!("expected a union definition");
    };
    assert_eq!(span(hello), Some((0, 19)));
    assert_eq!(span(&hello.name), Some((6, 11)));
    assert_eq!(span(&hello.types[0]), Some((14, 19)));
}

#[test]
fn union_with_several_members() {
    let document = parse_schema_ok("union Hello = Wo | Rld");
    let SchemaDefinition::Union(hello) = only_definition(&document) else {
        panic!("expected a union definition");
    };
    assert_eq!(span(hello), Some((0, 22)));
    let members: Vec<_> = hello
        .types
        .iter()
        .map(|member| (member.name.value.as_str(), span(member)))
        .collect();
    assert_eq!(members, [("Wo", Some((14, 16))), ("Rld", Some((19, 22)))]);
}

#[test]
fn scalar() {
    let document = parse_schema_ok("scalar Hello");
    let SchemaDefinition::Scalar(hello) = only_definition(&document) else {
        panic!("expected a scalar definition");
    };
    assert_eq!(span(hello), Some((0, 12)));
    assert_eq!(span(&hello.name), Some((7, 12)));
}

#[test]
fn single_value_enum() {
    let document = parse_schema_ok("enum Hello { WORLD }");
    let SchemaDefinition::Enum(hello) = only_definition(&document) else {
        panic!("expected an enum definition");
    };
    assert_eq!(span(hello), Some((0, 20)));
    assert_eq!(span(&hello.name), Some((5, 10)));
    assert_eq!(hello.values[0].name.value, "WORLD");
    assert_eq!(span(&hello.values[0]), Some((13, 18)));
}

#[test]
fn double_value_enum() {
    let document = parse_schema_ok("enum Hello { WO, RLD }");
    let SchemaDefinition::Enum(hello) = only_definition(&document) else {
        panic!("expected an enum definition");
    };
    assert_eq!(span(hello), Some((0, 22)));
    let values: Vec<_> = hello
        .values
        .iter()
        .map(|value| (value.name.value.as_str(), span(value)))
        .collect();
    assert_eq!(values, [("WO", Some((13, 15))), ("RLD", Some((17, 20)))]);
}

#[test]
fn input_object() {
    let document = parse_schema_ok("\ninput Hello {\n  world: String\n}");
    let SchemaDefinition::InputObject(hello) = only_definition(&document) else {
        panic!("expected an input object definition");
    };
    assert_eq!(span(hello), Some((1, 32)));
    assert_eq!(span(&hello.name), Some((7, 12)));
    assert_eq!(span(&hello.fields[0]), Some((17, 30)));
    assert!(hello.fields[0].default_value.is_none());
}

#[test]
fn input_object_field_with_default_value() {
    let document = parse_schema_ok("input Hello { count: Int = 42 }");
    let SchemaDefinition::InputObject(hello) = only_definition(&document) else {
        panic!("expected an input object definition");
    };
    assert!(matches!(&hello.fields[0].default_value, Some(Value::Int(value)) if value.value == "42"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn input_fields_cannot_take_arguments() {
    assert_message_starts_with(
        &parse_schema_err("\ninput Hello {\n  world(foo: Int): String\n}"),
        "Syntax Error GraphQL (3:8) Expected :, found (",
    );
}

#[test]
fn rejects_executable_definitions() {
    assert_message_starts_with(
        &parse_schema_err("{ field }"),
        "Syntax Error GraphQL (1:1) Unexpected {",
    );
    assert_message_starts_with(
        &parse_schema_err("query Q { a }"),
        "Syntax Error GraphQL (1:1) Unexpected Name \"query\"",
    );
    assert_message_starts_with(
        &parse_schema_err("mutation M { a }"),
        "Syntax Error GraphQL (1:1) Unexpected Name \"mutation\"",
    );
    assert_message_starts_with(
        &parse_schema_err("fragment F on T { a }"),
        "Syntax Error GraphQL (1:1) Unexpected Name \"fragment\"",
    );
}

#[test]
fn rejects_empty_schema() {
    assert_message_starts_with(&parse_schema_err(""), "Syntax Error GraphQL (1:1) Unexpected EOF");
}

#[test]
fn rejects_incomplete_definitions() {
    assert_message_starts_with(
        &parse_schema_err("union Hello = |"),
        "Syntax Error GraphQL (1:15) Expected Name, found |",
    );
    assert_message_starts_with(
        &parse_schema_err("union Hello World"),
        "Syntax Error GraphQL (1:13) Expected =, found Name \"World\"",
    );
    assert_message_starts_with(
        &parse_schema_err("enum Hello {}"),
        "Syntax Error GraphQL (1:13) Expected Name, found }",
    );
    assert_message_starts_with(
        &parse_schema_err("type Hello implements { a: Int }"),
        "Syntax Error GraphQL (1:23) Expected Name, found {",
    );
    assert_message_starts_with(
        &parse_schema_err("type Hello"),
        "Syntax Error GraphQL (1:11) Expected {, found EOF",
    );
}

#[test]
fn default_values_must_be_constant() {
    assert_message_starts_with(
        &parse_schema_err("type T { f(a: Int = $v): Int }"),
        "Syntax Error GraphQL (1:21) Unexpected $",
    );
}

// =============================================================================
// Kitchen sink and options
// =============================================================================

#[test]
fn parses_kitchen_sink() {
    let document = parse_schema_ok(SCHEMA_KITCHEN_SINK);
    let definitions: Vec<_> = document
        .definitions
        .iter()
        .map(|definition| (definition.kind(), definition.name().value.as_str()))
        .collect();
    assert_eq!(
        definitions,
        [
            (NodeKind::TypeDefinition, "Foo"),
            (NodeKind::InterfaceDefinition, "Bar"),
            (NodeKind::UnionDefinition, "Feed"),
            (NodeKind::ScalarDefinition, "CustomScalar"),
            (NodeKind::EnumDefinition, "Site"),
            (NodeKind::InputObjectDefinition, "InputType"),
        ],
    );

    let SchemaDefinition::Type(foo) = &document.definitions[0] else {
        panic!("expected a type definition");
    };
    assert_eq!(foo.fields.len(), 6);
    let five = &foo.fields[4];
    assert!(matches!(
        &five.arguments[0].default_value,
        Some(Value::List(list)) if list.values.len() == 2
    ));
}

#[test]
fn no_location_applies_to_schema_documents() {
    let document =
        parse_schema(SCHEMA_KITCHEN_SINK, ParseOptions::new().with_no_location(true)).unwrap();
    assert!(document.location.is_none());
    assert!(document.definitions.iter().all(|definition| definition.location().is_none()));
}

#[test]
fn schema_parser_can_be_driven_directly() {
    let source = GraphQLSource::with_name("scalar Date", "schema.graphql");
    let parser = GraphQLSchemaParser::new(&source, ParseOptions::default()).unwrap();
    let document = parser.parse_schema_document().unwrap();
    assert_eq!(document.definitions[0].name().value, "Date");
}
