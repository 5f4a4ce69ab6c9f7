use std::fmt;

/// Numeric literal as written in phrase text.
///
/// Integral values (`99`, `99.0`) are kept as integers so that `limit:99`
/// produces `99` and not `99.0` in the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{}", n),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Path separator
    ///
    /// # Examples
    /// ```text
    /// where.directorId
    /// $>id.#directorId
    /// ```
    Dot,

    /// Input marker, or the first half of the map operator `$>`
    ///
    /// # Examples
    /// ```text
    /// where.in.$
    /// $>#id
    /// ```
    Dollar,

    /// Second half of the map operator `$>`
    Arrow,

    /// Property access prefix
    ///
    /// # Examples
    /// ```text
    /// $>#id
    /// ```
    Hash,

    /// Separates a key from its literal value
    ///
    /// # Examples
    /// ```text
    /// limit:99
    /// status:active
    /// ```
    Colon,

    /// Phrase separator
    ///
    /// # Examples
    /// ```text
    /// where.id.in.$;limit:99
    /// ```
    Semicolon,

    /// Letter-started run of ASCII letters and digits
    Identifier(String),

    /// Digits with at most one decimal point
    Number(Number),

    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Dot => write!(f, "."),
            TokenKind::Dollar => write!(f, "$"),
            TokenKind::Arrow => write!(f, ">"),
            TokenKind::Hash => write!(f, "#"),
            TokenKind::Colon => write!(f, ":"),
            TokenKind::Semicolon => write!(f, ";"),
            TokenKind::Identifier(name) => write!(f, "{}", name),
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Eof => write!(f, "EndOfInput"),
        }
    }
}

/// A token and the character offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Token { kind, position }
    }
}
