//! Lexer, recursive-descent parsers, immutable syntax tree, visitors and
//! canonical printer for GraphQL executable documents and schema documents.
//!
//! Executable documents (operations and fragments) are parsed with
//! [`parse`]; schema documents (`type`, `interface`, `union`, `scalar`,
//! `enum` and `input` definitions) with [`parse_schema`]. Both return an
//! [`Arc`](std::sync::Arc)-shared tree from [`ast`] that can be traversed
//! with the traits in [`visitor`] and turned back into text with [`print`].

pub mod ast;
mod graphql_parser;
mod graphql_schema_parser;
mod graphql_source;
mod graphql_syntax_error;
mod graphql_syntax_error_kind;
mod lexer;
mod location;
mod parse_options;
mod parse_result;
mod parser_core;
mod printer;
mod source_location;
pub mod token;
pub mod visitor;

pub use graphql_parser::GraphQLParser;
pub use graphql_parser::parse;
pub use graphql_schema_parser::GraphQLSchemaParser;
pub use graphql_schema_parser::parse_schema;
pub use graphql_source::GraphQLSource;
pub use graphql_syntax_error::GraphQLSyntaxError;
pub use graphql_syntax_error_kind::GraphQLSyntaxErrorKind;
pub use lexer::GraphQLLexer;
pub use lexer::read_token;
pub use location::Location;
pub use parse_options::ParseOptions;
pub use parse_result::ParseResult;
pub use printer::Printer;
pub use printer::print;
pub use source_location::SourceLocation;
pub use source_location::highlight_source_at_location;

#[cfg(test)]
mod tests;
