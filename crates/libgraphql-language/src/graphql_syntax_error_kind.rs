/// Categorizes syntax errors for programmatic handling.
///
/// The human-readable text lives in the error's description; these variants
/// carry only what a tool needs to branch on.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, thiserror::Error)]
pub enum GraphQLSyntaxErrorKind {
    /// The lexer could not form a token: an unexpected character, a
    /// malformed number, an unterminated string or a bad escape sequence.
    #[error("lexer error")]
    LexerError,

    /// A well-formed token appeared where the grammar does not allow it.
    #[error("unexpected token")]
    UnexpectedToken,

    /// An object literal repeated one of its field names.
    #[error("duplicate input object field: `{name}`")]
    DuplicateInputObjectField { name: String },

    /// A name was used where it is reserved (`on` as a fragment name).
    #[error("reserved name: `{name}`")]
    ReservedName { name: String },
}
