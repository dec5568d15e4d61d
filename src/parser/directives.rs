//! Clause directives: `START`, `MATCH`, `OPTIONAL MATCH`, `WHERE`, `RETURN`,
//! `AS`, `DISTINCT`.

use crate::ast::MatchKind;
use crate::lexer::token::Token;
use smol_str::SmolStr;

use super::Parser;
use super::base::{word_at, word_starts};

/// Offset of the first clause directive that may follow a `START` body:
/// `OPTIONAL MATCH`, `MATCH`, `WHERE` or `RETURN`.
fn find_clause_boundary(text: &str) -> Option<usize> {
    word_starts(text).find(|&offset| {
        ["MATCH", "WHERE", "RETURN"]
            .iter()
            .any(|keyword| word_at(text, offset, keyword))
            || (word_at(text, offset, "OPTIONAL") && {
                let rest = &text[offset + "OPTIONAL".len()..];
                let after = rest.trim_start();
                after.len() < rest.len() && word_at(after, 0, "MATCH")
            })
    })
}

impl<'src> Parser<'src> {
    pub(super) fn start_directive(&mut self) -> Option<Token> {
        self.keyword("START")
    }

    /// `MATCH` or `OPTIONAL MATCH`, tried in that order.
    pub(super) fn match_directive(&mut self) -> Option<MatchKind> {
        if self.keyword("MATCH").is_some() {
            return Some(MatchKind::Match);
        }
        self.attempt(|p| {
            p.keyword("OPTIONAL")?;
            p.keyword("MATCH")?;
            Some(MatchKind::OptionalMatch)
        })
    }

    /// True if a `MATCH`, `OPTIONAL MATCH` or `RETURN` directive starts at the
    /// cursor. Consumes nothing.
    pub(super) fn at_clause_directive(&mut self) -> bool {
        let saved = self.stream.position();
        let found = self.match_directive().is_some() || self.return_directive().is_some();
        self.stream.set_position(saved);
        found
    }

    pub(super) fn where_directive(&mut self) -> Option<Token> {
        self.keyword("WHERE")
    }

    pub(super) fn return_directive(&mut self) -> Option<Token> {
        self.keyword("RETURN")
    }

    pub(super) fn as_directive(&mut self) -> Option<Token> {
        self.keyword("AS")
    }

    pub(super) fn distinct_directive(&mut self) -> Option<Token> {
        self.keyword("DISTINCT")
    }

    /// The opaque body of a `START` clause: everything up to the next clause
    /// directive, trimmed.
    pub(super) fn start_body(&mut self) -> Option<SmolStr> {
        let from = self.stream.position();
        let rest = &self.stream.source()[from..];
        let Some(boundary) = find_clause_boundary(rest) else {
            self.stream
                .expect_at(self.stream.source().len(), "`MATCH`, `WHERE` or `RETURN`");
            return None;
        };
        let body = SmolStr::new(rest[..boundary].trim());
        tracing::trace!(body = %body, "captured START body");
        self.stream.set_position(from + boundary);
        Some(body)
    }
}
