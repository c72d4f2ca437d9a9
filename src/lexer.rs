use tracing::trace;

use crate::ast::{Token, TokenKind};

/// Errors raised while splitting the input into tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A `"` was opened but never closed. `position` is the opening quote.
    #[error("unclosed string")]
    UnclosedString { position: usize },
}

impl LexError {
    pub fn position(&self) -> usize {
        match self {
            LexError::UnclosedString { position } => *position,
        }
    }
}

/// Pull-based tokenizer over a borrowed input string.
///
/// Positions are byte offsets into the input.
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

/// Characters ending a raw literal or a variable name.
fn ends_raw(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '{' | '}' | '[' | ']' | '=')
}

/// Characters ending a bare literal; the dot splits paths.
fn ends_literal(ch: char) -> bool {
    ends_raw(ch) || ch == '.'
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, position: 0 }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    // Only the ASCII space is skipped between tokens.
    fn skip_spaces(&mut self) {
        while self.current_char() == Some(' ') {
            self.advance();
        }
    }

    fn read_until(&mut self, stop: fn(char) -> bool) -> &'a str {
        let start = self.position;
        while let Some(ch) = self.current_char() {
            if stop(ch) {
                break;
            }
            self.advance();
        }
        &self.input[start..self.position]
    }

    fn read_string(&mut self) -> Result<Token, LexError> {
        let quote = self.position;
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            self.advance();
            match ch {
                '"' => return Ok(Token::new(TokenKind::Literal, result, quote + 1)),
                // `\` escapes a following quote and nothing else
                '\\' if self.current_char() == Some('"') => {
                    self.advance();
                    result.push('"');
                }
                _ => result.push(ch),
            }
        }

        Err(LexError::UnclosedString { position: quote })
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.position;
        self.advance();
        Token::new(kind, &self.input[start..self.position], start)
    }

    fn prefixed(&mut self, kind: TokenKind) -> Token {
        self.advance(); // Drop the `:` or `$`
        let start = self.position;
        let text = self.read_until(ends_raw);
        Token::new(kind, text, start)
    }

    /// Produce the next token. Once the input is exhausted every call
    /// returns an [`TokenKind::Eof`] token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_spaces();

        let token = match self.current_char() {
            None => Token::new(TokenKind::Eof, "", self.position),
            Some('{') => self.single(TokenKind::LBrace),
            Some('}') => self.single(TokenKind::RBrace),
            Some('[') => self.single(TokenKind::LBracket),
            Some(']') => self.single(TokenKind::RBracket),
            Some('.') => self.single(TokenKind::Dot),
            Some('=') => self.single(TokenKind::Assign),
            Some('"') => self.read_string()?,
            Some(':') => self.prefixed(TokenKind::RawLiteral),
            Some('$') => self.prefixed(TokenKind::Var),
            Some(_) => {
                // The first character always belongs to the literal
                let start = self.position;
                self.advance();
                self.read_until(ends_literal);
                Token::new(TokenKind::Literal, &self.input[start..self.position], start)
            }
        };

        trace!(kind = ?token.kind, text = %token.text, position = token.position, "token");
        Ok(token)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is(TokenKind::Eof) => None,
            other => Some(other),
        }
    }
}

#[test]
fn test_eof_is_sticky() {
    let mut lexer = Lexer::new("a");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Literal);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Eof, "", 1));
    }
}

#[test]
fn test_positions_are_byte_offsets() {
    let mut lexer = Lexer::new("é=:1");
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Literal, "é", 0));
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Assign, "=", 2));
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::RawLiteral, "1", 4));
}
