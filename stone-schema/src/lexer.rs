//! Lexer for TypeScript model declarations using logos.
//!
//! Keywords such as `interface` or `readonly` are lexed as identifiers; the
//! parser decides from context whether they are keywords or property names.

use std::ops::Range;

use logos::{FilterResult, Lexer, Logos};

fn unquote(slice: &str) -> String {
    slice[1..slice.len() - 1].to_string()
}

/// Consume a block comment up to its closing `*/`.
fn skip_block_comment(lex: &mut Lexer<Token>) -> FilterResult<(), ()> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            FilterResult::Error(())
        }
    }
}

/// Token types for TypeScript declarations.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("<")]
    LAngle,

    #[token(">")]
    RAngle,

    #[token(":")]
    Colon,

    #[token(";")]
    Semi,

    #[token(",")]
    Comma,

    #[token("?")]
    Question,

    #[token("|")]
    Pipe,

    #[token("&")]
    Amp,

    #[token("=")]
    Eq,

    #[token("=>")]
    FatArrow,

    #[token(".")]
    Dot,

    #[token("*")]
    Star,

    #[regex(r#""([^"\\]|\\.)*""#, |lex| unquote(lex.slice()))]
    #[regex(r#"'([^'\\]|\\.)*'"#, |lex| unquote(lex.slice()))]
    StringLiteral(String),

    #[regex(r"-?[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    NumberLiteral(String),

    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_string())]
    Ident(String),

    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[token("/*", skip_block_comment)]
    BlockComment,
}

impl Token {
    /// Short human description used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            Token::LBrace => "`{`".to_string(),
            Token::RBrace => "`}`".to_string(),
            Token::LParen => "`(`".to_string(),
            Token::RParen => "`)`".to_string(),
            Token::LBracket => "`[`".to_string(),
            Token::RBracket => "`]`".to_string(),
            Token::LAngle => "`<`".to_string(),
            Token::RAngle => "`>`".to_string(),
            Token::Colon => "`:`".to_string(),
            Token::Semi => "`;`".to_string(),
            Token::Comma => "`,`".to_string(),
            Token::Question => "`?`".to_string(),
            Token::Pipe => "`|`".to_string(),
            Token::Amp => "`&`".to_string(),
            Token::Eq => "`=`".to_string(),
            Token::FatArrow => "`=>`".to_string(),
            Token::Dot => "`.`".to_string(),
            Token::Star => "`*`".to_string(),
            Token::StringLiteral(s) => format!("string literal {s:?}"),
            Token::NumberLiteral(n) => format!("number `{n}`"),
            Token::Ident(name) => format!("`{name}`"),
            Token::LineComment | Token::BlockComment => "comment".to_string(),
        }
    }

    /// Whether this token is the identifier `word`.
    pub fn is_word(&self, word: &str) -> bool {
        matches!(self, Token::Ident(name) if name == word)
    }
}

/// A token with its span information.
#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Range<usize>,
}

/// An error that occurred during lexing.
#[derive(Debug, Clone, PartialEq)]
pub struct LexerError {
    pub span: Range<usize>,
    pub message: String,
}

/// Lex a source string into a vector of spanned tokens.
pub fn lex(source: &str) -> Result<Vec<SpannedToken>, LexerError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        match token {
            Ok(token) => tokens.push(SpannedToken { token, span }),
            Err(_) => {
                let slice = &source[span.clone()];
                let message = if slice.starts_with("/*") {
                    "unterminated block comment".to_string()
                } else {
                    format!("unexpected character {slice:?}")
                };
                return Err(LexerError { message, span });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        lex(source)
            .unwrap()
            .into_iter()
            .map(|st| st.token)
            .collect()
    }

    #[test]
    fn test_interface_tokens() {
        assert_eq!(
            tokens("export interface Customer { name?: string; }"),
            vec![
                Token::Ident("export".to_string()),
                Token::Ident("interface".to_string()),
                Token::Ident("Customer".to_string()),
                Token::LBrace,
                Token::Ident("name".to_string()),
                Token::Question,
                Token::Colon,
                Token::Ident("string".to_string()),
                Token::Semi,
                Token::RBrace,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let toks = tokens("// leading\n/** doc\n * more */ id: number");
        assert_eq!(
            toks,
            vec![
                Token::Ident("id".to_string()),
                Token::Colon,
                Token::Ident("number".to_string()),
            ]
        );
    }

    #[test]
    fn test_block_comments_between_members() {
        let toks = tokens("{ /* note */ name: string; /***/ /** The id. */ id: number }");
        assert_eq!(
            toks,
            vec![
                Token::LBrace,
                Token::Ident("name".to_string()),
                Token::Colon,
                Token::Ident("string".to_string()),
                Token::Semi,
                Token::Ident("id".to_string()),
                Token::Colon,
                Token::Ident("number".to_string()),
                Token::RBrace,
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = lex("id: number /* open").unwrap_err();
        assert_eq!(err.span, 11..18);
        assert_eq!(err.message, "unterminated block comment");
    }

    #[test]
    fn test_literals() {
        let toks = tokens(r#"'active' | "archived" | 42"#);
        assert_eq!(
            toks,
            vec![
                Token::StringLiteral("active".to_string()),
                Token::Pipe,
                Token::StringLiteral("archived".to_string()),
                Token::Pipe,
                Token::NumberLiteral("42".to_string()),
            ]
        );
    }

    #[test]
    fn test_spans() {
        let toks = lex("id: number").unwrap();
        assert_eq!(toks[0].span, 0..2);
        assert_eq!(toks[2].span, 4..10);
    }

    #[test]
    fn test_unexpected_character() {
        let err = lex("name: string #").unwrap_err();
        assert_eq!(err.span, 13..14);
        assert!(err.message.contains('#'));
    }
}
