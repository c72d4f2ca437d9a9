// tests/lexer_tests.rs

use jg::ast::{Token, TokenKind};
use jg::lexer::{LexError, Lexer};

fn tokens(input: &str) -> Vec<Token> {
    Lexer::new(input)
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

// ============================================================================
// Single Tokens
// ============================================================================

#[test]
fn test_single_tokens() {
    let test_cases = vec![
        ("a", Token::new(TokenKind::Literal, "a", 0)),
        ("$a", Token::new(TokenKind::Var, "a", 1)),
        ("a/b", Token::new(TokenKind::Literal, "a/b", 0)),
        (r#""a b""#, Token::new(TokenKind::Literal, "a b", 1)),
        (r#""a.b""#, Token::new(TokenKind::Literal, "a.b", 1)),
        (r#""a\"b""#, Token::new(TokenKind::Literal, "a\"b", 1)),
        (r#"":a""#, Token::new(TokenKind::Literal, ":a", 1)),
        (":a", Token::new(TokenKind::RawLiteral, "a", 1)),
        (":true", Token::new(TokenKind::RawLiteral, "true", 1)),
        (":false", Token::new(TokenKind::RawLiteral, "false", 1)),
        (":null", Token::new(TokenKind::RawLiteral, "null", 1)),
        (":1.2345", Token::new(TokenKind::RawLiteral, "1.2345", 1)),
        (":-1.2345e-4", Token::new(TokenKind::RawLiteral, "-1.2345e-4", 1)),
        ("=", Token::new(TokenKind::Assign, "=", 0)),
        ("{", Token::new(TokenKind::LBrace, "{", 0)),
        ("}", Token::new(TokenKind::RBrace, "}", 0)),
        ("[", Token::new(TokenKind::LBracket, "[", 0)),
        ("]", Token::new(TokenKind::RBracket, "]", 0)),
        (".", Token::new(TokenKind::Dot, ".", 0)),
        ("", Token::new(TokenKind::Eof, "", 0)),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert!(lexer.next_token().unwrap().is(TokenKind::Eof));
    }
}

// ============================================================================
// Token Sequences
// ============================================================================

#[test]
fn test_multi_tokens() {
    let test_cases = vec![
        (
            "lit1 lit2",
            vec![
                Token::new(TokenKind::Literal, "lit1", 0),
                Token::new(TokenKind::Literal, "lit2", 5),
            ],
        ),
        (
            "lit1.lit2=",
            vec![
                Token::new(TokenKind::Literal, "lit1", 0),
                Token::new(TokenKind::Dot, ".", 4),
                Token::new(TokenKind::Literal, "lit2", 5),
                Token::new(TokenKind::Assign, "=", 9),
            ],
        ),
        (
            r#""lit1.lit2".lit3="#,
            vec![
                Token::new(TokenKind::Literal, "lit1.lit2", 1),
                Token::new(TokenKind::Dot, ".", 11),
                Token::new(TokenKind::Literal, "lit3", 12),
                Token::new(TokenKind::Assign, "=", 16),
            ],
        ),
        (
            "lit1=lit2",
            vec![
                Token::new(TokenKind::Literal, "lit1", 0),
                Token::new(TokenKind::Assign, "=", 4),
                Token::new(TokenKind::Literal, "lit2", 5),
            ],
        ),
        (
            r#""a=b"=c"#,
            vec![
                Token::new(TokenKind::Literal, "a=b", 1),
                Token::new(TokenKind::Assign, "=", 5),
                Token::new(TokenKind::Literal, "c", 6),
            ],
        ),
    ];

    for (input, expected) in test_cases {
        assert_eq!(tokens(input), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_eof_position_is_input_length() {
    let mut lexer = Lexer::new("lit1 lit2");
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    assert_eq!(lexer.next_token().unwrap(), Token::new(TokenKind::Eof, "", 9));
}

#[test]
fn test_brackets_and_raw_literals() {
    let kinds: Vec<TokenKind> = tokens("a={b=[:1 $x]}").into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Literal,
            TokenKind::Assign,
            TokenKind::LBrace,
            TokenKind::Literal,
            TokenKind::Assign,
            TokenKind::LBracket,
            TokenKind::RawLiteral,
            TokenKind::Var,
            TokenKind::RBracket,
            TokenKind::RBrace,
        ]
    );
}

// ============================================================================
// Whitespace
// ============================================================================

#[test]
fn test_runs_of_spaces_are_skipped() {
    assert_eq!(
        tokens("   a   =   b   "),
        vec![
            Token::new(TokenKind::Literal, "a", 3),
            Token::new(TokenKind::Assign, "=", 7),
            Token::new(TokenKind::Literal, "b", 11),
        ]
    );
}

#[test]
fn test_tab_ends_literal_but_is_not_skipped() {
    // The tab stops `a` and then starts a literal of its own
    assert_eq!(
        tokens("a\tb"),
        vec![
            Token::new(TokenKind::Literal, "a", 0),
            Token::new(TokenKind::Literal, "\tb", 1),
        ]
    );
}

// ============================================================================
// Literal Boundaries
// ============================================================================

#[test]
fn test_dot_does_not_end_raw_literal_or_var() {
    assert_eq!(tokens(":1.5"), vec![Token::new(TokenKind::RawLiteral, "1.5", 1)]);
    assert_eq!(tokens("$a.b"), vec![Token::new(TokenKind::Var, "a.b", 1)]);
}

#[test]
fn test_raw_literal_stops_at_brackets() {
    assert_eq!(
        tokens("[:1]"),
        vec![
            Token::new(TokenKind::LBracket, "[", 0),
            Token::new(TokenKind::RawLiteral, "1", 2),
            Token::new(TokenKind::RBracket, "]", 3),
        ]
    );
}

#[test]
fn test_empty_raw_literal_and_var() {
    assert_eq!(tokens(":"), vec![Token::new(TokenKind::RawLiteral, "", 1)]);
    assert_eq!(tokens("$"), vec![Token::new(TokenKind::Var, "", 1)]);
}

// ============================================================================
// Quoted Strings
// ============================================================================

#[test]
fn test_backslash_only_escapes_quotes() {
    assert_eq!(
        tokens(r#""a\nb""#),
        vec![Token::new(TokenKind::Literal, r"a\nb", 1)]
    );
    // `\\"` is a kept backslash followed by an escaped quote
    assert_eq!(
        tokens(r#""a\\"b""#),
        vec![Token::new(TokenKind::Literal, r#"a\"b"#, 1)]
    );
}

#[test]
fn test_quoted_string_is_adjacent_to_next_token() {
    assert_eq!(
        tokens(r#""a b"=c"#),
        vec![
            Token::new(TokenKind::Literal, "a b", 1),
            Token::new(TokenKind::Assign, "=", 5),
            Token::new(TokenKind::Literal, "c", 6),
        ]
    );
}

#[test]
fn test_unclosed_string() {
    let mut lexer = Lexer::new(r#"a="abc"#);
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    let err = lexer.next_token().unwrap_err();
    assert_eq!(err, LexError::UnclosedString { position: 2 });
    assert_eq!(err.to_string(), "unclosed string");
}

#[test]
fn test_trailing_backslash_is_unclosed() {
    let mut lexer = Lexer::new(r#""abc\"#);
    assert!(matches!(
        lexer.next_token(),
        Err(LexError::UnclosedString { position: 0 })
    ));
}

#[test]
fn test_unicode_literals() {
    assert_eq!(
        tokens("名前=\"日本 語\""),
        vec![
            Token::new(TokenKind::Literal, "名前", 0),
            Token::new(TokenKind::Assign, "=", 6),
            Token::new(TokenKind::Literal, "日本 語", 8),
        ]
    );
}
