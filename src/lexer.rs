use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::ast::{Number, Token, TokenKind};

/// Errors raised while splitting phrase text into tokens.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    /// Character that is not whitespace, punctuation, a letter or a digit
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_number(&mut self) -> Number {
        let mut text = String::new();
        let mut seen_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else if ch == '.' && !seen_dot {
                seen_dot = true;
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        number_literal(&text)
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let start = self.position;
        let kind = match self.current_char() {
            None => TokenKind::Eof,
            Some('.') => self.single(TokenKind::Dot),
            Some('$') => self.single(TokenKind::Dollar),
            Some('>') => self.single(TokenKind::Arrow),
            Some('#') => self.single(TokenKind::Hash),
            Some(':') => self.single(TokenKind::Colon),
            Some(';') => self.single(TokenKind::Semicolon),
            Some(ch) if ch.is_ascii_alphabetic() => TokenKind::Identifier(self.read_identifier()),
            Some(ch) if ch.is_ascii_digit() => TokenKind::Number(self.read_number()),
            Some(ch) => {
                return Err(LexError::InvalidCharacter {
                    character: ch,
                    position: start,
                });
            }
        };

        Ok(Token::new(kind, start))
    }

    /// Consumes the whole input. The returned tokens always end with
    /// [`TokenKind::Eof`].
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        log::trace!("lexed {} token(s)", tokens.len());
        Ok(tokens)
    }
}

/// Classifies numeric text: integral values that fit an `i64` stay integers,
/// everything else becomes a float.
///
/// The decimal parse must be exact. Text it would have to round (more than
/// 28 fractional digits, or beyond 96 bits) is left to `f64`.
fn number_literal(text: &str) -> Number {
    if let Ok(decimal) = Decimal::from_str_exact(text.trim_end_matches('.'))
        && decimal.is_integer()
        && let Some(n) = decimal.to_i64()
    {
        return Number::Integer(n);
    }
    // digits with at most one '.' always parse
    Number::Float(text.parse().unwrap_or_default())
}

/// Splits `input` into tokens ending with [`TokenKind::Eof`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

#[test]
fn test_punctuation() {
    let mut lexer = Lexer::new(".$>#:;");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Dot);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Dollar);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Arrow);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Hash);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Colon);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Semicolon);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_integral_decimal_is_integer() {
    assert_eq!(number_literal("99.0"), Number::Integer(99));
    assert_eq!(number_literal("99."), Number::Integer(99));
    assert_eq!(number_literal("99.9"), Number::Float(99.9));
}

#[test]
fn test_too_precise_decimal_stays_float() {
    assert_eq!(
        number_literal("0.00000000000000000000000000001"),
        Number::Float(1e-29)
    );
    let text = "0.000000000000000000000000000001";
    assert_eq!(number_literal(text), Number::Float(text.parse().unwrap()));
    assert_eq!(
        number_literal("1.00000000000000000000000000001"),
        Number::Float(1.00000000000000000000000000001)
    );
}

#[test]
fn test_huge_integer_falls_back_to_float() {
    let text = "123456789012345678901234567890";
    assert_eq!(number_literal(text), Number::Float(text.parse().unwrap()));
}
