//! Shared parser infrastructure: a lazily lexed token stream with
//! backtracking and furthest-failure tracking.

use crate::ast::Span;
use crate::diag::{Found, SyntaxError};
use crate::lexer::Lexer;
use crate::lexer::token::Token;
use smol_str::SmolStr;

/// Token stream navigator over a byte cursor.
///
/// Tokens are lexed on demand from the cursor, so restoring a saved
/// position is all a failed alternative needs to undo. Every failed
/// expectation is recorded; the error reported for the parse is the set of
/// expectations at the furthest offset any alternative reached.
pub struct TokenStream<'src> {
    source: &'src str,
    pos: usize,
    furthest: usize,
    expected: Vec<SmolStr>,
    fatal: Option<SyntaxError>,
}

impl<'src> TokenStream<'src> {
    /// Creates a stream positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            furthest: 0,
            expected: Vec::new(),
            fatal: None,
        }
    }

    /// The full text being parsed.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the token at the cursor, the span of unrecognized input, or
    /// `None` at end of input. Leading whitespace is skipped.
    pub fn current(&self) -> Option<Result<Token, Span>> {
        self.token_at(self.pos)
    }

    /// Returns the token starting at or after `offset`.
    pub fn token_at(&self, offset: usize) -> Option<Result<Token, Span>> {
        Lexer::at(self.source, offset).next()
    }

    /// Moves the cursor past `token`.
    pub fn advance_past(&mut self, token: &Token) {
        self.pos = token.span.end;
    }

    /// Returns the cursor position (used for backtracking).
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Restores a saved cursor position.
    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.source.len());
    }

    /// Offset of the next non-whitespace character.
    pub fn next_offset(&self) -> usize {
        let rest = &self.source[self.pos..];
        self.pos + (rest.len() - rest.trim_start().len())
    }

    /// Records that `what` would have been accepted at the cursor.
    pub fn expect(&mut self, what: impl Into<SmolStr>) {
        self.expect_at(self.next_offset(), what);
    }

    /// Records that `what` would have been accepted at `offset`.
    pub fn expect_at(&mut self, offset: usize, what: impl Into<SmolStr>) {
        if offset > self.furthest {
            self.furthest = offset;
            self.expected.clear();
        }
        if offset == self.furthest {
            let what = what.into();
            if !self.expected.contains(&what) {
                self.expected.push(what);
            }
        }
    }

    /// Aborts the parse with `error`; no further alternative is tried.
    pub fn fail(&mut self, error: SyntaxError) {
        if self.fatal.is_none() {
            self.fatal = Some(error);
        }
    }

    /// True once a fatal error has aborted the parse.
    pub fn is_failed(&self) -> bool {
        self.fatal.is_some()
    }

    /// Builds the error describing the furthest failure.
    pub fn into_error(self) -> SyntaxError {
        if let Some(error) = self.fatal {
            return error;
        }
        let (found, span) = match self.token_at(self.furthest) {
            None => (Found::EndOfInput, self.furthest..self.furthest),
            Some(Ok(token)) => (
                Found::Token(self.source[token.span.clone()].into()),
                token.span,
            ),
            Some(Err(span)) => {
                let text = self.source.get(span.clone()).unwrap_or_default();
                (Found::Unrecognized(text.into()), span)
            }
        };
        SyntaxError::expected(self.expected, found, span)
    }
}

/// Returns true if `word` occurs at `offset` in `text` as a whole word,
/// ignoring ASCII case. The caller guarantees a word boundary before
/// `offset`.
pub(crate) fn word_at(text: &str, offset: usize, word: &str) -> bool {
    let end = offset + word.len();
    if end > text.len() || !text.is_char_boundary(end) {
        return false;
    }
    text[offset..end].eq_ignore_ascii_case(word)
        && !text[end..].chars().next().is_some_and(char::is_alphanumeric)
}

/// Offsets in `text` where a word may start: the beginning of the text and
/// every character preceded by a non-alphanumeric one.
pub(crate) fn word_starts(text: &str) -> impl Iterator<Item = usize> + '_ {
    let mut previous_alnum = false;
    text.char_indices().filter_map(move |(offset, ch)| {
        let starts = !previous_alnum;
        previous_alnum = ch.is_alphanumeric();
        starts.then_some(offset)
    })
}

/// Finds the first whole-word occurrence of `word`, ignoring ASCII case.
pub(crate) fn find_word(text: &str, word: &str) -> Option<usize> {
    word_starts(text).find(|&offset| word_at(text, offset, word))
}
