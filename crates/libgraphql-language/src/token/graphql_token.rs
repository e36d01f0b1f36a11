use crate::token::GraphQLTokenKind;
use std::borrow::Cow;
use std::fmt;

/// A token with its byte range in the source.
///
/// `value` is present for `Name`, `Int`, `Float` and `String` tokens. Names
/// and numbers are the exact source text; strings are the decoded contents
/// and only allocate when the literal contains escape sequences.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind,
    pub start: u32,
    pub end: u32,
    pub value: Option<Cow<'src, str>>,
}

impl<'src> GraphQLToken<'src> {
    /// Creates a token that carries no value.
    pub fn punctuator(kind: GraphQLTokenKind, start: u32, end: u32) -> Self {
        Self {
            kind,
            start,
            end,
            value: None,
        }
    }

    pub fn with_value(
        kind: GraphQLTokenKind,
        start: u32,
        end: u32,
        value: impl Into<Cow<'src, str>>,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            value: Some(value.into()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns `true` if this is a `Name` token spelled exactly `word`.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == GraphQLTokenKind::Name && self.value() == Some(word)
    }

    /// Converts into a token that owns its value.
    pub fn into_owned(self) -> GraphQLToken<'static> {
        GraphQLToken {
            kind: self.kind,
            start: self.start,
            end: self.end,
            value: self.value.map(|value| Cow::Owned(value.into_owned())),
        }
    }
}

/// Formats the token the way error messages refer to it: the kind's
/// description, followed by the quoted value when there is one
/// (`Name "foo"`, `EOF`, `{`).
impl fmt::Display for GraphQLToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} \"{value}\"", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
