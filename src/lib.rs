pub mod ast;
pub mod compiler;
pub mod convert;
pub mod error;
pub mod lexer;
pub mod merge;
pub mod parser;
pub mod transform;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{Literal, Number, Phrase, Program, Segment, Token, TokenKind};
pub use compiler::{CompileError, Compiler};
pub use error::Error;
pub use lexer::{LexError, Lexer, tokenize};
pub use parser::{ParseError, Parser};
pub use transform::Transform;
pub use value::Value;

/// Tokenizes and parses phrase text.
pub fn parse(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    Ok(Parser::new(tokens).parse()?)
}

/// Compiles phrase text into a reusable [`Transform`].
///
/// # Examples
///
/// ```
/// use metaline::{compile, convert::json_to_value, convert::value_to_json};
/// use serde_json::json;
///
/// let transform = compile("where.directorId.in.$;limit:99").unwrap();
/// let output = transform.apply(&json_to_value(json!([1, 2])));
///
/// assert_eq!(
///     value_to_json(output),
///     json!({"where": {"directorId": {"in": [1, 2]}}, "limit": 99})
/// );
/// ```
pub fn compile(source: &str) -> Result<Transform, Error> {
    let program = parse(source)?;
    Ok(Compiler::new().compile(&program)?)
}
