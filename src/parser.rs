use std::mem;

use tracing::debug;

use crate::{
    ast::{Arr, Generator, Obj, Token, TokenKind},
    lexer::Lexer,
    value::Value,
};

/// Failure to compile an expression list.
///
/// Carries the whole input so that the message can point at the failing
/// offset:
///
/// ```text
/// Parse error: Unexpected end of input
/// a=
///   ^
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Parse error: {message}\n{input}\n{}^", caret_padding(.input, .position))]
pub struct CompileError {
    /// The original input
    pub input: String,
    /// Byte offset where compilation failed
    pub position: usize,
    /// What went wrong
    pub message: String,
}

impl CompileError {
    pub fn new(input: &str, position: usize, message: impl Into<String>) -> Self {
        CompileError {
            input: input.to_string(),
            position,
            message: message.into(),
        }
    }
}

/// Spaces lining the caret up under `position`, counted in characters so
/// that multi-byte input still renders aligned.
fn caret_padding(input: &str, position: &usize) -> String {
    let column = input
        .get(..*position)
        .map_or(*position, |prefix| prefix.chars().count());
    " ".repeat(column)
}

/// Compile a space separated list of generator expressions.
///
/// Bracketed groups at the top level (`{...} [...]`) each produce one
/// generator. Otherwise every field expression is added to a single object.
///
/// ```
/// use jg::{compile_generators, Generator, Obj, Value};
///
/// let forest = compile_generators("a.b=c").unwrap();
/// let expected = Obj::new().with("a", Obj::new().with("b", Value::from("c")));
/// assert_eq!(forest, vec![Generator::Obj(expected)]);
/// ```
pub fn compile_generators(input: &str) -> Result<Vec<Generator>, CompileError> {
    debug!(len = input.len(), "compiling generators");
    let mut parser = Parser::new(Lexer::new(input))?;
    let forest = parser.parse_generators()?;
    debug!(generators = forest.len(), "compiled generators");
    Ok(forest)
}

/// Compile the right-hand side of a `name=value` substitution.
///
/// Accepts exactly one literal (a string) or raw literal (a typed scalar).
pub fn compile_substitution_value(input: &str) -> Result<Value, CompileError> {
    let mut parser = Parser::new(Lexer::new(input))?;
    let value = parser.parse_substitution_value()?;
    debug!(kind = value.type_name(), "compiled substitution value");
    Ok(value)
}

/// Maximum nesting of objects, arrays and path segments, the same bound
/// serde_json applies when reading documents.
pub const MAX_DEPTH: usize = 128;

/// Recursive descent parser with one token of lookahead.
///
/// `matched` is the last consumed token and is where errors are reported;
/// `next` is the lookahead.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    matched: Token,
    next: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, CompileError> {
        let input = lexer.input();
        let next = lexer
            .next_token()
            .map_err(|e| CompileError::new(input, e.position(), e.to_string()))?;
        Ok(Parser {
            lexer,
            matched: Token::new(TokenKind::Eof, "", 0),
            next,
            depth: 0,
        })
    }

    fn error(&self, message: impl Into<String>) -> CompileError {
        CompileError::new(self.lexer.input(), self.matched.position, message)
    }

    fn advance(&mut self) -> Result<(), CompileError> {
        let input = self.lexer.input();
        let next = self
            .lexer
            .next_token()
            .map_err(|e| CompileError::new(input, e.position(), e.to_string()))?;
        self.matched = mem::replace(&mut self.next, next);
        Ok(())
    }

    fn peek(&self, kind: TokenKind) -> bool {
        self.next.is(kind)
    }

    /// Consume the lookahead if it is of the given kind.
    fn found(&mut self, kind: TokenKind) -> Result<bool, CompileError> {
        if self.peek(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<(), CompileError> {
        if self.found(kind)? {
            return Ok(());
        }
        self.advance()?;
        Err(self.error(format!("was expecting {}", kind)))
    }

    /// Consume the offending token and fail on it.
    fn unexpected<T>(&mut self) -> Result<T, CompileError> {
        self.advance()?;
        Err(self.error("Unexpected input"))
    }

    fn end_of_input<T>(&mut self) -> Result<T, CompileError> {
        self.advance()?;
        Err(self.error("Unexpected end of input"))
    }

    /// Run one level of a nested production, failing past [`MAX_DEPTH`].
    fn nested<T>(
        &mut self,
        production: impl FnOnce(&mut Self) -> Result<T, CompileError>,
    ) -> Result<T, CompileError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("Nesting too deep"));
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    fn matched_text(&self) -> String {
        self.matched.text.clone()
    }

    fn raw_value(&self) -> Result<Value, CompileError> {
        Value::parse_raw(&self.matched.text).map_err(|e| self.error(e.to_string()))
    }

    pub fn parse_generators(&mut self) -> Result<Vec<Generator>, CompileError> {
        let forest = self.start()?;
        if !self.found(TokenKind::Eof)? {
            return self.unexpected();
        }
        Ok(forest)
    }

    pub fn parse_substitution_value(&mut self) -> Result<Value, CompileError> {
        let value = match self.next.kind {
            TokenKind::Literal => {
                self.advance()?;
                Value::String(self.matched_text())
            }
            TokenKind::RawLiteral => {
                self.advance()?;
                self.raw_value()?
            }
            TokenKind::Eof => return self.end_of_input(),
            _ => return self.unexpected(),
        };

        if !self.found(TokenKind::Eof)? {
            return self.unexpected();
        }
        Ok(value)
    }

    fn start(&mut self) -> Result<Vec<Generator>, CompileError> {
        if self.peek(TokenKind::LBrace) || self.peek(TokenKind::LBracket) {
            let mut forest = vec![];
            loop {
                if self.found(TokenKind::LBrace)? {
                    forest.push(self.obj()?.into());
                } else if self.found(TokenKind::LBracket)? {
                    forest.push(self.arr()?.into());
                } else {
                    return Ok(forest);
                }
            }
        }

        let mut root = Obj::new();
        self.fields(&mut root)?;
        Ok(vec![root.into()])
    }

    /// Parse `field*`, adding each one to `obj`.
    fn fields(&mut self, obj: &mut Obj) -> Result<(), CompileError> {
        while self.found(TokenKind::Literal)? {
            let field = self.matched_text();
            let value = self.field_tail()?;
            obj.add(field, value);
        }
        Ok(())
    }

    /// Object body, after the opening `{`
    fn obj(&mut self) -> Result<Obj, CompileError> {
        self.nested(|p| {
            let mut obj = Obj::new();
            p.fields(&mut obj)?;
            p.expect(TokenKind::RBrace)?;
            Ok(obj)
        })
    }

    /// Array body, after the opening `[`
    fn arr(&mut self) -> Result<Arr, CompileError> {
        self.nested(|p| {
            let mut arr = Arr::new();
            loop {
                match p.next.kind {
                    TokenKind::RawLiteral => {
                        p.advance()?;
                        arr.push(p.raw_value()?);
                    }
                    TokenKind::Literal => {
                        p.advance()?;
                        let text = p.matched_text();
                        if p.peek(TokenKind::Assign) || p.peek(TokenKind::Dot) {
                            // A field inside an array becomes a one-field object
                            let value = p.field_tail()?;
                            arr.push(Obj::new().with(text, value));
                        } else {
                            arr.push(Value::String(text));
                        }
                    }
                    TokenKind::Var => {
                        p.advance()?;
                        arr.push(Generator::Var(p.matched_text()));
                    }
                    TokenKind::LBrace => {
                        p.advance()?;
                        arr.push(p.obj()?);
                    }
                    TokenKind::LBracket => {
                        p.advance()?;
                        arr.push(p.arr()?);
                    }
                    TokenKind::RBracket => {
                        p.advance()?;
                        return Ok(arr);
                    }
                    TokenKind::Eof => {
                        p.advance()?;
                        return Err(p.error("Unclosed array"));
                    }
                    _ => return p.unexpected(),
                }
            }
        })
    }

    /// What follows a field name: `= value` or `. name <tail>`.
    fn field_tail(&mut self) -> Result<Generator, CompileError> {
        self.nested(Self::field_tail_inner)
    }

    fn field_tail_inner(&mut self) -> Result<Generator, CompileError> {
        match self.next.kind {
            TokenKind::Assign => {
                self.advance()?;
                self.value()
            }
            TokenKind::Dot => {
                self.advance()?;
                self.expect(TokenKind::Literal)?;
                let field = self.matched_text();
                let value = self.field_tail()?;
                Ok(Obj::new().with(field, value).into())
            }
            TokenKind::Eof => self.end_of_input(),
            _ => self.unexpected(),
        }
    }

    fn value(&mut self) -> Result<Generator, CompileError> {
        match self.next.kind {
            TokenKind::Literal => {
                self.advance()?;
                Ok(Value::String(self.matched_text()).into())
            }
            TokenKind::Var => {
                self.advance()?;
                Ok(Generator::Var(self.matched_text()))
            }
            TokenKind::RawLiteral => {
                self.advance()?;
                Ok(self.raw_value()?.into())
            }
            TokenKind::LBrace => {
                self.advance()?;
                Ok(self.obj()?.into())
            }
            TokenKind::LBracket => {
                self.advance()?;
                Ok(self.arr()?.into())
            }
            TokenKind::Eof => self.end_of_input(),
            _ => self.unexpected(),
        }
    }
}
