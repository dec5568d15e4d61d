//! Token types and representations for Cypher lexical analysis.

use crate::ast::Span;
use logos::Logos;
use smol_str::SmolStr;
use std::fmt;

/// The kind of a lexical token.
///
/// Keywords and word operators (`IN`, `AND`, `OR`) are not separate kinds:
/// they lex as [`TokenKind::Identifier`] and the parser compares them
/// case-insensitively, so `match`, `Match` and `MATCH` are the same directive
/// while an identifier such as `matches` stays an identifier.
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("*")]
    Star,

    // Operators
    #[token("=~")]
    RegexMatch,
    #[token("=")]
    Eq,
    #[token("<>")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("|")]
    Pipe,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("/")]
    Slash,

    /// Unsigned numeric literal; a leading `-` is attached by the parser.
    #[regex(r"(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?", |lex| SmolStr::new(lex.slice()))]
    Number(SmolStr),

    #[regex(r"[A-Za-z][0-9A-Za-z]*", |lex| SmolStr::new(lex.slice()))]
    Identifier(SmolStr),

    /// Back-tick quoted text, delimiters stripped, whitespace kept verbatim.
    #[regex(r"`[0-9A-Za-z\s\x{0400}-\x{04FF}]*`", |lex| {
        let text = lex.slice();
        SmolStr::new(&text[1..text.len() - 1])
    })]
    Quoted(SmolStr),
}

impl TokenKind {
    /// Returns true if this token is an identifier equal to `keyword`,
    /// ignoring ASCII case.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, TokenKind::Identifier(name) if name.eq_ignore_ascii_case(keyword))
    }

    /// Returns the identifier text, if this is an identifier.
    pub fn as_identifier(&self) -> Option<&SmolStr> {
        match self {
            TokenKind::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => write!(f, "`(`"),
            TokenKind::RParen => write!(f, "`)`"),
            TokenKind::LBracket => write!(f, "`[`"),
            TokenKind::RBracket => write!(f, "`]`"),
            TokenKind::LBrace => write!(f, "`{{`"),
            TokenKind::RBrace => write!(f, "`}}`"),
            TokenKind::Comma => write!(f, "`,`"),
            TokenKind::Dot => write!(f, "`.`"),
            TokenKind::Colon => write!(f, "`:`"),
            TokenKind::Star => write!(f, "`*`"),
            TokenKind::RegexMatch => write!(f, "`=~`"),
            TokenKind::Eq => write!(f, "`=`"),
            TokenKind::NotEq => write!(f, "`<>`"),
            TokenKind::Lt => write!(f, "`<`"),
            TokenKind::Gt => write!(f, "`>`"),
            TokenKind::Pipe => write!(f, "`|`"),
            TokenKind::Plus => write!(f, "`+`"),
            TokenKind::Minus => write!(f, "`-`"),
            TokenKind::Slash => write!(f, "`/`"),
            TokenKind::Number(text) => write!(f, "number `{text}`"),
            TokenKind::Identifier(name) => write!(f, "`{name}`"),
            TokenKind::Quoted(text) => write!(f, "quoted string `{text}`"),
        }
    }
}

/// A token with its kind and byte span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The byte span of this token in the source.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if `next` starts exactly where this token ends.
    pub fn is_adjacent_to(&self, next: &Token) -> bool {
        self.span.end == next.span.start
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}..{}", self.kind, self.span.start, self.span.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        TokenKind::lexer(source)
            .map(|token| token.expect("valid token"))
            .collect()
    }

    #[test]
    fn keywords_are_identifiers() {
        let kind = TokenKind::Identifier("optional".into());
        assert!(kind.is_keyword("OPTIONAL"));
        assert!(!kind.is_keyword("MATCH"));
        assert!(!TokenKind::Comma.is_keyword("MATCH"));
    }

    #[test]
    fn numbers_follow_json_shape() {
        assert_eq!(kinds("0"), vec![TokenKind::Number("0".into())]);
        assert_eq!(kinds("12.5e-3"), vec![TokenKind::Number("12.5e-3".into())]);
        assert_eq!(kinds("7E4"), vec![TokenKind::Number("7E4".into())]);
        // A leading zero ends the literal.
        assert_eq!(
            kinds("01"),
            vec![TokenKind::Number("0".into()), TokenKind::Number("1".into())]
        );
    }

    #[test]
    fn multi_character_operators() {
        assert_eq!(
            kinds("=~ <> = < >"),
            vec![
                TokenKind::RegexMatch,
                TokenKind::NotEq,
                TokenKind::Eq,
                TokenKind::Lt,
                TokenKind::Gt
            ]
        );
    }

    #[test]
    fn arrows_are_split_into_operators() {
        assert_eq!(kinds("<-"), vec![TokenKind::Lt, TokenKind::Minus]);
        assert_eq!(kinds("->"), vec![TokenKind::Minus, TokenKind::Gt]);
    }

    #[test]
    fn quoted_keeps_inner_whitespace_and_cyrillic() {
        assert_eq!(
            kinds("` Иван  Petrov`"),
            vec![TokenKind::Quoted(" Иван  Petrov".into())]
        );
        assert_eq!(kinds("``"), vec![TokenKind::Quoted("".into())]);
    }

    #[test]
    fn quoted_rejects_punctuation() {
        assert!(TokenKind::lexer("`a-b`").any(|token| token.is_err()));
    }

    #[test]
    fn display_names_tokens() {
        assert_eq!(TokenKind::LParen.to_string(), "`(`");
        assert_eq!(TokenKind::Identifier("n".into()).to_string(), "`n`");
        let token = Token::new(TokenKind::Comma, 3..4);
        assert_eq!(token.to_string(), "`,` at 3..4");
    }

    #[test]
    fn adjacency() {
        let lt = Token::new(TokenKind::Lt, 0..1);
        let minus = Token::new(TokenKind::Minus, 1..2);
        let spaced = Token::new(TokenKind::Minus, 2..3);
        assert!(lt.is_adjacent_to(&minus));
        assert!(!lt.is_adjacent_to(&spaced));
    }
}
