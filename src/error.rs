use crate::{compiler::CompileError, lexer::LexError, parser::ParseError};

/// Any failure on the way from phrase text to a [`crate::Transform`].
///
/// Lex and parse errors are permanent: the same text always fails the same
/// way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

impl Error {
    /// Character offset in the source text the error points at
    pub fn position(&self) -> usize {
        match self {
            Error::Lex(LexError::InvalidCharacter { position, .. })
            | Error::Parse(ParseError::UnexpectedToken { position, .. })
            | Error::Compile(CompileError::MalformedPhrase { position, .. }) => *position,
        }
    }
}
