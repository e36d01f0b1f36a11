use crate::GraphQLSource;
use crate::GraphQLSyntaxErrorKind;
use crate::SourceLocation;
use crate::highlight_source_at_location;

/// A lex or parse failure at a byte position of a source.
///
/// Displaying the error yields the full diagnostic message:
///
/// ```text
/// Syntax Error GraphQL (1:6) Expected Name, found EOF
///
/// 1: query
///         ^
/// ```
#[derive(Clone, Debug, thiserror::Error)]
#[error("{}", self.message())]
pub struct GraphQLSyntaxError {
    kind: GraphQLSyntaxErrorKind,
    graphql_source: GraphQLSource,
    position: u32,
    description: String,
    location: SourceLocation,
}

impl GraphQLSyntaxError {
    pub fn new(
        kind: GraphQLSyntaxErrorKind,
        source: &GraphQLSource,
        position: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            graphql_source: source.clone(),
            position,
            description: description.into(),
            location: SourceLocation::from_offset(source.body(), position),
        }
    }

    /// Creates an error raised while forming a token.
    pub fn lexer_error(
        source: &GraphQLSource,
        position: u32,
        description: impl Into<String>,
    ) -> Self {
        Self::new(
            GraphQLSyntaxErrorKind::LexerError,
            source,
            position,
            description,
        )
    }

    pub fn kind(&self) -> &GraphQLSyntaxErrorKind {
        &self.kind
    }

    /// Returns `true` for errors raised by the lexer rather than the parser.
    pub fn is_lexer_error(&self) -> bool {
        matches!(self.kind, GraphQLSyntaxErrorKind::LexerError)
    }

    /// The source the error was raised against.
    pub fn graphql_source(&self) -> &GraphQLSource {
        &self.graphql_source
    }

    /// Byte offset into the source body.
    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    /// The full message: a header naming the source and position followed
    /// by a blank line and the highlighted source context.
    pub fn message(&self) -> String {
        format!(
            "Syntax Error {} ({}:{}) {}\n\n{}",
            self.graphql_source.name(),
            self.location.line,
            self.location.column,
            self.description,
            highlight_source_at_location(&self.graphql_source, self.location),
        )
    }

    /// Formats this error as a single summary line:
    /// `name:line:column: error: description`.
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}:{}: error: {}",
            self.graphql_source.name(),
            self.location.line,
            self.location.column,
            self.description,
        )
    }
}
