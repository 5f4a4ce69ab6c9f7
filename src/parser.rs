use crate::ast::{Literal, Phrase, Program, Segment, Token, TokenKind};

/// Grammar violations found while building the syntax tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Token that cannot appear where it was found
    #[error("Unexpected token `{token}` at position {position}")]
    UnexpectedToken { token: String, position: usize },
}

pub struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
}

impl Parser {
    /// Creates a parser over a token stream. A missing trailing
    /// [`TokenKind::Eof`] is supplied.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            let position = tokens.last().map_or(0, |t| t.position + 1);
            tokens.push(Token::new(TokenKind::Eof, position));
        }
        Parser { tokens, cursor: 0 }
    }

    fn current(&self) -> &Token {
        self.peek(0)
    }

    fn peek(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.cursor + offset).min(last)]
    }

    fn advance(&mut self) {
        if self.cursor < self.tokens.len() - 1 {
            self.cursor += 1;
        }
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current().kind) == std::mem::discriminant(kind)
    }

    fn at_phrase_end(&self) -> bool {
        self.check(&TokenKind::Semicolon) || self.check(&TokenKind::Eof)
    }

    fn unexpected(&self) -> ParseError {
        let token = self.current();
        ParseError::UnexpectedToken {
            token: token.kind.to_string(),
            position: token.position,
        }
    }

    /// Parse a complete phrase string
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut phrases = vec![];

        // A lone `;` is the empty program plus its optional trailing separator
        if self.check(&TokenKind::Semicolon) && self.peek(1).kind == TokenKind::Eof {
            return Ok(Program { phrases });
        }

        while !self.check(&TokenKind::Eof) {
            phrases.push(self.parse_phrase()?);

            if self.check(&TokenKind::Semicolon) {
                self.advance();
            }
        }

        Ok(Program { phrases })
    }

    fn parse_phrase(&mut self) -> Result<Phrase, ParseError> {
        if self.check(&TokenKind::Dot) {
            return Err(self.unexpected());
        }

        let mut segments = vec![];

        loop {
            let position = self.current().position;
            match &self.current().kind {
                TokenKind::Identifier(name) => {
                    let name = name.clone();
                    self.advance();

                    if self.check(&TokenKind::Colon) {
                        return self.parse_assignment(segments, name, position);
                    }

                    segments.push(Segment::PathSegment { name, position });

                    // Outside a map every path step must be followed by a separator
                    if !self.check(&TokenKind::Dot) {
                        return Err(self.unexpected());
                    }
                }
                TokenKind::Dot => {
                    self.advance();
                    if !matches!(
                        self.current().kind,
                        TokenKind::Identifier(_) | TokenKind::Hash | TokenKind::Dollar
                    ) {
                        return Err(self.unexpected());
                    }
                }
                TokenKind::Hash => {
                    segments.push(self.parse_property_access()?);
                    return self.finish_phrase(Phrase::Path { segments });
                }
                TokenKind::Dollar => {
                    if self.peek(1).kind == TokenKind::Arrow {
                        return self.parse_map(segments);
                    }

                    self.advance();
                    segments.push(Segment::InputReference { position });
                    return self.finish_phrase(Phrase::Path { segments });
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    /// `key:value`, with `key` already consumed.
    fn parse_assignment(
        &mut self,
        mut segments: Vec<Segment>,
        key: String,
        position: usize,
    ) -> Result<Phrase, ParseError> {
        self.advance(); // consume ':'

        let literal = match &self.current().kind {
            TokenKind::Number(n) => Literal::Number(*n),
            TokenKind::Identifier(s) => Literal::String(s.clone()),
            _ => return Err(self.unexpected()),
        };
        self.advance();

        segments.push(Segment::ValueAssignment {
            key,
            literal,
            position,
        });
        self.finish_phrase(Phrase::Value { segments })
    }

    fn parse_property_access(&mut self) -> Result<Segment, ParseError> {
        let position = self.current().position;
        self.advance(); // consume '#'

        let name = match &self.current().kind {
            TokenKind::Identifier(name) => name.clone(),
            _ => return Err(self.unexpected()),
        };
        self.advance();

        Ok(Segment::PropertyAccess { name, position })
    }

    /// `$>` followed by path steps and property accesses. Segments parsed
    /// before the operator become the prefix. Keys with no `#name` after
    /// them are kept; the compiler drops them.
    fn parse_map(&mut self, prefix: Vec<Segment>) -> Result<Phrase, ParseError> {
        let position = self.current().position;
        self.advance(); // consume '$'
        self.advance(); // consume '>'

        let mut segments = vec![Segment::MapOperator { position }];

        while !self.at_phrase_end() {
            let position = self.current().position;
            match &self.current().kind {
                TokenKind::Dot => {
                    self.advance();
                    if !matches!(
                        self.current().kind,
                        TokenKind::Identifier(_) | TokenKind::Hash
                    ) {
                        return Err(self.unexpected());
                    }
                }
                TokenKind::Identifier(name) => {
                    let name = name.clone();
                    self.advance();
                    if self.check(&TokenKind::Colon) {
                        return Err(self.unexpected());
                    }
                    segments.push(Segment::PathSegment { name, position });
                }
                TokenKind::Hash => segments.push(self.parse_property_access()?),
                _ => return Err(self.unexpected()),
            }
        }

        Ok(Phrase::Map { prefix, segments })
    }

    fn finish_phrase(&self, phrase: Phrase) -> Result<Phrase, ParseError> {
        if self.at_phrase_end() {
            Ok(phrase)
        } else {
            Err(self.unexpected())
        }
    }
}

/// Parses an already tokenized phrase string.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    Parser::new(tokens).parse()
}
