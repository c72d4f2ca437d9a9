use std::fmt;

/// Classification of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Object opening brace
    ///
    /// # Examples
    /// ```text
    /// parent={child=v}
    /// ```
    LBrace,

    /// Object closing brace
    RBrace,

    /// Array opening bracket
    ///
    /// # Examples
    /// ```text
    /// [foo bar]
    /// tags=[:1 :2]
    /// ```
    LBracket,

    /// Array closing bracket
    RBracket,

    /// Path separator between field segments
    ///
    /// # Examples
    /// ```text
    /// a.b.c=v
    /// ```
    Dot,

    /// Assignment between a field and its value
    Assign,

    /// Bare or double-quoted string
    ///
    /// Quoting disables path expansion and allows spaces.
    ///
    /// # Examples
    /// ```text
    /// name
    /// "first name"
    /// "a.b"
    /// ```
    Literal,

    /// Colon-prefixed literal, interpreted as a typed scalar
    ///
    /// # Examples
    /// ```text
    /// :42
    /// :-1.5e3
    /// :true
    /// :null
    /// ```
    RawLiteral,

    /// Dollar-prefixed substitution reference
    ///
    /// # Examples
    /// ```text
    /// $id
    /// ```
    Var,

    /// End of input
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Dot => "`.`",
            TokenKind::Assign => "`=`",
            TokenKind::Literal => "literal",
            TokenKind::RawLiteral => "raw literal",
            TokenKind::Var => "variable",
            TokenKind::Eof => "end of input",
        };
        f.write_str(s)
    }
}

/// A lexed token together with its text and byte offset in the input.
///
/// For quoted literals, raw literals and variables the text excludes the
/// leading delimiter and `position` points just past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
