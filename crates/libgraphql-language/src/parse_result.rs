use crate::GraphQLSyntaxError;

/// Result of lexing or parsing. Parsing stops at the first error.
pub type ParseResult<T> = Result<T, GraphQLSyntaxError>;
