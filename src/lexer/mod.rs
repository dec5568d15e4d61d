//! Lexical analysis for Cypher.
//!
//! Tokens are recognized by a `logos` automaton. The parser does not
//! pre-tokenize the whole query: it lexes lazily from its own byte cursor, so
//! that verbatim spans (`START` bodies, `CASE ... END`) may contain text the
//! token grammar would reject.

pub mod token;

use crate::ast::Span;
use crate::diag::SyntaxError;
use logos::Logos;
use token::{Token, TokenKind};

/// Result of lexing a whole source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerResult {
    /// The tokens produced, in source order.
    pub tokens: Vec<Token>,
    /// Errors for input the token grammar does not recognize.
    pub errors: Vec<SyntaxError>,
}

/// A lexer over a source text, starting at an arbitrary byte offset.
///
/// Spans of produced tokens are absolute offsets into the full source.
pub struct Lexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, TokenKind>,
    offset: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer for the whole source text.
    pub fn new(source: &'src str) -> Self {
        Self::at(source, 0)
    }

    /// Creates a lexer that starts scanning at `offset`.
    ///
    /// `offset` must lie on a char boundary; offsets past the end yield an
    /// empty token stream.
    pub fn at(source: &'src str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        Self {
            source,
            inner: TokenKind::lexer(&source[offset..]),
            offset,
        }
    }

    /// Lexes the remaining input, collecting tokens and errors.
    pub fn tokenize(self) -> LexerResult {
        let source = self.source;
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        for item in self {
            match item {
                Ok(token) => tokens.push(token),
                Err(span) => {
                    let text = source.get(span.clone()).unwrap_or_default();
                    errors.push(SyntaxError::unrecognized(span, text));
                }
            }
        }
        LexerResult { tokens, errors }
    }
}

impl Iterator for Lexer<'_> {
    /// A token, or the span of input no token matches.
    type Item = Result<Token, Span>;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.inner.next()?;
        let span = self.inner.span();
        let span = span.start + self.offset..span.end + self.offset;
        Some(match kind {
            Ok(kind) => Ok(Token::new(kind, span)),
            Err(()) => Err(span),
        })
    }
}

/// Tokenizes an entire source text.
pub fn tokenize(source: &str) -> LexerResult {
    Lexer::new(source).tokenize()
}
