//! Lexical primitives: punctuation, identifiers, quoted strings, numbers,
//! operators and keywords.

use crate::ast::{Operator, StringLiteral};
use crate::lexer::token::{Token, TokenKind};
use smol_str::{SmolStr, format_smolstr};

use super::Parser;

impl<'src> Parser<'src> {
    /// Consumes the current token if `accept` maps it to a value; otherwise
    /// records `expected` and leaves the cursor alone.
    pub(super) fn token_map<T>(
        &mut self,
        expected: &str,
        accept: impl FnOnce(&Token) -> Option<T>,
    ) -> Option<T> {
        if let Some(Ok(token)) = self.stream.current() {
            if let Some(value) = accept(&token) {
                self.stream.advance_past(&token);
                return Some(value);
            }
        }
        self.stream.expect(expected);
        None
    }

    pub(super) fn punct(&mut self, kind: TokenKind) -> Option<Token> {
        let expected = kind.to_string();
        self.token_map(&expected, |token| (token.kind == kind).then(|| token.clone()))
    }

    /// A two-character arrow (`<-` or `->`) whose halves must be adjacent.
    pub(super) fn arrow(&mut self, expected: &str, first: TokenKind, second: TokenKind) -> bool {
        if let Some(Ok(head)) = self.stream.current() {
            if head.kind == first {
                if let Some(Ok(tail)) = self.stream.token_at(head.span.end) {
                    if tail.kind == second && head.is_adjacent_to(&tail) {
                        self.stream.advance_past(&tail);
                        return true;
                    }
                }
            }
        }
        self.stream.expect(expected);
        false
    }

    pub(super) fn identifier(&mut self) -> Option<SmolStr> {
        self.token_map("identifier", |token| token.kind.as_identifier().cloned())
    }

    /// A back-tick quoted string.
    pub(super) fn quoted_string(&mut self) -> Option<StringLiteral> {
        self.token_map("quoted string", |token| match &token.kind {
            TokenKind::Quoted(text) => Some(StringLiteral::new(text.clone())),
            _ => None,
        })
    }

    /// A back-tick quoted string, or a bare identifier as fallback.
    pub(super) fn quoted(&mut self) -> Option<StringLiteral> {
        if let Some(literal) = self.quoted_string() {
            return Some(literal);
        }
        self.identifier().map(StringLiteral::new)
    }

    /// A number, with an optional `-` directly attached to the digits.
    pub(super) fn number(&mut self) -> Option<SmolStr> {
        let negative = self.attempt(|p| {
            let minus = p.punct(TokenKind::Minus)?;
            match p.stream.token_at(minus.span.end) {
                Some(Ok(digits)) if minus.is_adjacent_to(&digits) => match &digits.kind {
                    TokenKind::Number(text) => {
                        p.stream.advance_past(&digits);
                        Some(format_smolstr!("-{text}"))
                    }
                    _ => None,
                },
                _ => None,
            }
        });
        if negative.is_some() {
            return negative;
        }
        self.token_map("number", |token| match &token.kind {
            TokenKind::Number(text) => Some(text.clone()),
            _ => None,
        })
    }

    /// A chain operator. Word operators match case-insensitively.
    pub(super) fn operator(&mut self) -> Option<Operator> {
        self.token_map("operator", |token| match &token.kind {
            TokenKind::RegexMatch => Some(Operator::RegexMatch),
            TokenKind::Eq => Some(Operator::Eq),
            TokenKind::NotEq => Some(Operator::NotEq),
            TokenKind::Gt => Some(Operator::Gt),
            TokenKind::Lt => Some(Operator::Lt),
            TokenKind::Pipe => Some(Operator::Pipe),
            TokenKind::Plus => Some(Operator::Add),
            TokenKind::Minus => Some(Operator::Sub),
            TokenKind::Star => Some(Operator::Mul),
            TokenKind::Slash => Some(Operator::Div),
            TokenKind::Colon => Some(Operator::Colon),
            TokenKind::Identifier(word) => Operator::from_word(word),
            _ => None,
        })
    }

    /// A keyword, matched as a whole identifier ignoring ASCII case.
    pub(super) fn keyword(&mut self, keyword: &str) -> Option<Token> {
        let expected = format!("`{keyword}`");
        self.token_map(&expected, |token| {
            token.kind.is_keyword(keyword).then(|| token.clone())
        })
    }

    /// Succeeds only if nothing but whitespace remains.
    pub(super) fn end_of_input(&mut self) -> bool {
        if self.stream.current().is_none() {
            return true;
        }
        self.stream.expect("end of input");
        false
    }
}
