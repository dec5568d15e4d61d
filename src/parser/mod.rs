//! Recursive-descent parser for the Cypher subset.
//!
//! The grammar is an ordered-choice (PEG) grammar: alternatives are tried in
//! a fixed order, the first that matches wins, and a failed alternative
//! consumes no input. Productions return `Option`; `None` means "did not
//! match here" and the expectation was recorded on the token stream.

mod base;
mod directives;
mod expression;
mod lexical;
mod pattern;
mod query;

pub(crate) use base::TokenStream;

use crate::ast::{Chain, Query};
use crate::config::ParserConfig;
use crate::diag::SyntaxError;
use crate::lexer::token::TokenKind;

/// Parser for a single query text.
pub struct Parser<'src> {
    stream: TokenStream<'src>,
    config: ParserConfig,
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser with the default configuration.
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, ParserConfig::default())
    }

    /// Creates a parser with a custom configuration.
    pub fn with_config(source: &'src str, config: ParserConfig) -> Self {
        Self {
            stream: TokenStream::new(source),
            config,
            depth: 0,
        }
    }

    /// Parses the whole source text into a query.
    pub fn parse(mut self) -> Result<Query, SyntaxError> {
        let query = self.parse_query();
        match query {
            Some(query) if !self.stream.is_failed() => {
                tracing::debug!(
                    start = query.start.is_some(),
                    match_clauses = query.matches.len(),
                    return_items = query.returns.len(),
                    "parsed query"
                );
                Ok(query)
            }
            _ => {
                let error = self.stream.into_error();
                tracing::debug!(offset = error.span().start, error = %error, "query rejected");
                Err(error)
            }
        }
    }

    /// Runs `production`, restoring the cursor if it does not match.
    fn attempt<T>(&mut self, production: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.stream.is_failed() {
            return None;
        }
        let saved = self.stream.position();
        let result = production(self);
        if result.is_none() {
            self.stream.set_position(saved);
        }
        result
    }

    /// Zero or more repetitions of `item`.
    fn many<T>(&mut self, mut item: impl FnMut(&mut Self) -> Option<T>) -> Vec<T> {
        let mut items = Vec::new();
        while let Some(next) = self.attempt(&mut item) {
            items.push(next);
        }
        items
    }

    /// Zero or more comma-separated `item`s.
    fn comma_separated<T>(&mut self, mut item: impl FnMut(&mut Self) -> Option<T>) -> Vec<T> {
        let mut items = Vec::new();
        let Some(first) = self.attempt(&mut item) else {
            return items;
        };
        items.push(first);
        while let Some(next) = self.attempt(|p| {
            p.punct(TokenKind::Comma)?;
            item(p)
        }) {
            items.push(next);
        }
        items
    }

    /// Comma-separated items that may each be blank. A list holding a single
    /// blank item is the empty list.
    fn comma_list<T>(
        &mut self,
        item: impl FnMut(&mut Self) -> Option<T>,
        is_blank: impl Fn(&T) -> bool,
    ) -> Vec<T> {
        let mut items = self.comma_separated(item);
        if matches!(items.as_slice(), [only] if is_blank(only)) {
            items.clear();
        }
        items
    }

    /// `operand (operator operand)*`, possibly empty.
    fn chain<T>(&mut self, mut operand: impl FnMut(&mut Self) -> Option<T>) -> Chain<T> {
        let Some(first) = self.attempt(&mut operand) else {
            return Chain::new();
        };
        let mut chain = Chain::single(first);
        while let Some((operator, next)) = self.attempt(|p| {
            let operator = p.operator()?;
            let next = operand(p)?;
            Some((operator, next))
        }) {
            chain.push(operator, next);
        }
        chain
    }

    /// Runs a production one nesting level deeper, failing the whole parse
    /// once the configured depth is exceeded.
    fn nested<T>(&mut self, production: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        if self.depth >= self.config.max_depth {
            let at = self.stream.next_offset();
            self.stream
                .fail(SyntaxError::nesting_too_deep(self.config.max_depth, at..at + 1));
            return None;
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }
}
