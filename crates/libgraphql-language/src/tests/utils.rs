//! Fixtures and helpers shared by the test modules.

use crate::GraphQLSource;
use crate::GraphQLSyntaxError;
use crate::ParseOptions;
use crate::ast::AstNode;
use crate::ast::Document;
use crate::ast::SchemaDocument;
use crate::read_token;
use crate::token::GraphQLToken;
use std::sync::Arc;

/// An executable document touching every executable node kind the
/// grammar can produce.
pub const KITCHEN_SINK: &str = r#"# Operations, fragments and values.

query queryName($foo: ComplexType, $site: Site = MOBILE) {
  whoever123is: node(id: [123, 456]) {
    id ,
    ... on User @defer {
      field2 {
        id ,
        alias: field1(first:10, after:$foo,) @include(if: $foo) {
          id,
          ...frag
        }
      }
    }
  }
}

mutation likeStory {
  like(story: 123) @defer {
    story {
      id
    }
  }
}

fragment frag on Friend {
  foo(size: $size, bar: $b, obj: {key: "value"})
}

{
  unnamed(truthy: true, falsey: false),
  query
}
"#;

/// The canonical printing of [`KITCHEN_SINK`].
pub const KITCHEN_SINK_PRINTED: &str = r#"query queryName($foo: ComplexType, $site: Site = MOBILE) {
  whoever123is: node(id: [123, 456]) {
    id
    ... on User @defer {
      field2 {
        id
        alias: field1(first: 10, after: $foo) @include(if: $foo) {
          id
          ...frag
        }
      }
    }
  }
}

mutation likeStory {
  like(story: 123) @defer {
    story {
      id
    }
  }
}

fragment frag on Friend {
  foo(size: $size, bar: $b, obj: {key: "value"})
}

{
  unnamed(truthy: true, falsey: false)
  query
}
"#;

/// A schema document with one definition of every kind.
pub const SCHEMA_KITCHEN_SINK: &str = r#"
type Foo implements Bar {
  one: Type
  two(argument: InputType!): Type
  three(argument: InputType, other: String): Int
  four(argument: String = "string"): String
  five(argument: [String] = ["string", "string"]): String
  six(argument: InputType = {key: "value"}): Type
}

interface Bar {
  one: Type
  four(argument: String = "string"): String
}

union Feed = Story | Article | Advert

scalar CustomScalar

enum Site {
  DESKTOP,
  MOBILE
}

input InputType {
  key: String!
  answer: Int = 42
}
"#;

/// The canonical printing of [`SCHEMA_KITCHEN_SINK`].
pub const SCHEMA_KITCHEN_SINK_PRINTED: &str = r#"type Foo implements Bar {
  one: Type
  two(argument: InputType!): Type
  three(argument: InputType, other: String): Int
  four(argument: String = "string"): String
  five(argument: [String] = ["string", "string"]): String
  six(argument: InputType = {key: "value"}): Type
}

interface Bar {
  one: Type
  four(argument: String = "string"): String
}

union Feed = Story | Article | Advert

scalar CustomScalar

enum Site {
  DESKTOP
  MOBILE
}

input InputType {
  key: String!
  answer: Int = 42
}
"#;

pub fn parse_ok(source: &str) -> Arc<Document> {
    match crate::parse(source, ParseOptions::default()) {
        Ok(document) => document,
        Err(error) => panic!("unexpected parse error:\n{error}"),
    }
}

pub fn parse_schema_ok(source: &str) -> Arc<SchemaDocument> {
    match crate::parse_schema(source, ParseOptions::default()) {
        Ok(document) => document,
        Err(error) => panic!("unexpected parse error:\n{error}"),
    }
}

pub fn parse_err(source: impl Into<GraphQLSource>) -> GraphQLSyntaxError {
    match crate::parse(source, ParseOptions::default()) {
        Ok(document) => panic!("expected a syntax error, parsed {document:?}"),
        Err(error) => error,
    }
}

pub fn parse_schema_err(source: &str) -> GraphQLSyntaxError {
    match crate::parse_schema(source, ParseOptions::default()) {
        Ok(document) => panic!("expected a syntax error, parsed {document:?}"),
        Err(error) => error,
    }
}

/// Asserts that `message` starts with `expected`, showing both otherwise.
#[track_caller]
pub fn assert_message_starts_with(error: &GraphQLSyntaxError, expected: &str) {
    let message = error.message();
    assert!(
        message.starts_with(expected),
        "expected message starting with {expected:?}, got {message:?}",
    );
}

/// The `(start, end)` offsets of a node's location.
pub fn span<N: AstNode>(node: &N) -> Option<(u32, u32)> {
    node.location().map(|location| (location.start, location.end))
}

/// Lexes the first token of `body`.
pub fn lex_one(body: &str) -> Result<GraphQLToken<'static>, GraphQLSyntaxError> {
    let source = GraphQLSource::new(body);
    read_token(&source, 0).map(GraphQLToken::into_owned)
}
