use crate::GraphQLSource;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;
use crate::Location;
use crate::ParseOptions;
use crate::ParseResult;
use crate::lexer::read_token;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

/// Cursor state shared by the query and schema parsers: the current
/// lookahead token and the end offset of the token consumed before it.
pub(crate) struct ParserState<'src> {
    pub(crate) source: &'src GraphQLSource,
    pub(crate) options: ParseOptions,
    pub(crate) prev_end: u32,
    pub(crate) token: GraphQLToken<'src>,
}

impl<'src> ParserState<'src> {
    /// Positions the cursor on the first token of `source`.
    pub(crate) fn new(source: &'src GraphQLSource, options: ParseOptions) -> ParseResult<Self> {
        let token = read_token(source, 0)?;
        Ok(Self {
            source,
            options,
            prev_end: 0,
            token,
        })
    }
}

/// Token-level primitives every production is written in terms of.
pub(crate) trait ParserCore<'src> {
    fn state(&self) -> &ParserState<'src>;

    fn state_mut(&mut self) -> &mut ParserState<'src>;

    /// The current lookahead token.
    fn token(&self) -> &GraphQLToken<'src> {
        &self.state().token
    }

    fn peek(&self, kind: GraphQLTokenKind) -> bool {
        self.token().kind == kind
    }

    /// Returns `true` if the lookahead is the name `word`.
    fn peek_keyword(&self, word: &str) -> bool {
        self.token().is_keyword(word)
    }

    /// Consumes the lookahead and returns it.
    fn advance(&mut self) -> ParseResult<GraphQLToken<'src>> {
        let state = self.state_mut();
        let next = read_token(state.source, state.token.end)?;
        state.prev_end = state.token.end;
        Ok(std::mem::replace(&mut state.token, next))
    }

    /// Consumes the lookahead if it has the given kind.
    fn skip(&mut self, kind: GraphQLTokenKind) -> ParseResult<bool> {
        if !self.peek(kind) {
            return Ok(false);
        }
        self.advance()?;
        Ok(true)
    }

    /// Consumes a token of the given kind or fails with
    /// `Expected <kind>, found <token>`.
    fn expect(&mut self, kind: GraphQLTokenKind) -> ParseResult<GraphQLToken<'src>> {
        if self.peek(kind) {
            return self.advance();
        }
        Err(self.syntax_error(
            GraphQLSyntaxErrorKind::UnexpectedToken,
            format!("Expected {kind}, found {}", self.token()),
        ))
    }

    /// Consumes the name `word` or fails with
    /// `Expected "<word>", found <token>`.
    fn expect_keyword(&mut self, word: &str) -> ParseResult<GraphQLToken<'src>> {
        if self.peek_keyword(word) {
            return self.advance();
        }
        Err(self.syntax_error(
            GraphQLSyntaxErrorKind::UnexpectedToken,
            format!("Expected \"{word}\", found {}", self.token()),
        ))
    }

    /// An `Unexpected <token>` error at the lookahead.
    fn unexpected(&self) -> GraphQLSyntaxError {
        self.syntax_error(
            GraphQLSyntaxErrorKind::UnexpectedToken,
            format!("Unexpected {}", self.token()),
        )
    }

    /// An error positioned at the start of the lookahead.
    fn syntax_error(
        &self,
        kind: GraphQLSyntaxErrorKind,
        description: impl Into<String>,
    ) -> GraphQLSyntaxError {
        let state = self.state();
        GraphQLSyntaxError::new(kind, state.source, state.token.start, description)
    }

    /// The location from `start` to the end of the last consumed token, as
    /// allowed by the parse options.
    fn location(&self, start: u32) -> Option<Location> {
        let state = self.state();
        if state.options.no_location {
            return None;
        }
        let source = (!state.options.no_source).then(|| state.source.clone());
        Some(Location::new(start, state.prev_end, source))
    }

    /// Parses `open item+ close`.
    fn many<T>(
        &mut self,
        open: GraphQLTokenKind,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>,
        close: GraphQLTokenKind,
    ) -> ParseResult<Vec<T>>
    where
        Self: Sized,
    {
        self.expect(open)?;
        let mut items = vec![parse_item(self)?];
        while !self.skip(close)? {
            items.push(parse_item(self)?);
        }
        Ok(items)
    }

    /// Parses `open item* close`.
    fn any<T>(
        &mut self,
        open: GraphQLTokenKind,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>,
        close: GraphQLTokenKind,
    ) -> ParseResult<Vec<T>>
    where
        Self: Sized,
    {
        self.expect(open)?;
        let mut items = Vec::new();
        while !self.skip(close)? {
            items.push(parse_item(self)?);
        }
        Ok(items)
    }
}
