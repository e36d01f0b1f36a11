use std::fmt;

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum GraphQLTokenKind {
    Eof,
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `...`
    Spread,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `{`
    BraceOpen,
    /// `|`
    Pipe,
    /// `}`
    BraceClose,
    Name,
    Int,
    Float,
    String,
}

impl GraphQLTokenKind {
    /// The text used for this kind in error messages.
    pub fn description(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Bang => "!",
            Self::Dollar => "$",
            Self::ParenOpen => "(",
            Self::ParenClose => ")",
            Self::Spread => "...",
            Self::Colon => ":",
            Self::Equals => "=",
            Self::At => "@",
            Self::BracketOpen => "[",
            Self::BracketClose => "]",
            Self::BraceOpen => "{",
            Self::Pipe => "|",
            Self::BraceClose => "}",
            Self::Name => "Name",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
        }
    }

    /// Returns `true` for the kinds whose tokens carry a value.
    pub fn has_value(self) -> bool {
        matches!(self, Self::Name | Self::Int | Self::Float | Self::String)
    }

    /// Maps a single-byte punctuator to its kind.
    pub(crate) fn from_punctuator(byte: u8) -> Option<Self> {
        Some(match byte {
            b'!' => Self::Bang,
            b'$' => Self::Dollar,
            b'(' => Self::ParenOpen,
            b')' => Self::ParenClose,
            b':' => Self::Colon,
            b'=' => Self::Equals,
            b'@' => Self::At,
            b'[' => Self::BracketOpen,
            b']' => Self::BracketClose,
            b'{' => Self::BraceOpen,
            b'|' => Self::Pipe,
            b'}' => Self::BraceClose,
            _ => return None,
        })
    }
}

impl fmt::Display for GraphQLTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
