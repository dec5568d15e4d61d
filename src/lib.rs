//! Parser for a restricted Cypher dialect.
//!
//! The crate recognizes queries of the shape
//! `[START ...] (MATCH | OPTIONAL MATCH ... [WHERE ...])* RETURN ...` and builds
//! a typed AST, or fails with a [`SyntaxError`] describing what was expected
//! at the failure position. It does not execute or validate queries.
//!
//! # Example
//!
//! ```
//! use cypher_parser::ast::{Direction, MatchKind};
//! use cypher_parser::parse;
//!
//! let query = parse("MATCH (a:Person)-[r:KNOWS]->(b) WHERE a.name = `Alice` RETURN b AS friend")
//!     .expect("query parses");
//!
//! let clause = &query.matches[0];
//! assert_eq!(clause.kind, MatchKind::Match);
//! assert_eq!(clause.paths[0].steps[0].edge.direction(), Direction::Outgoing);
//! assert_eq!(query.returns[0].alias.as_ref().unwrap().as_str(), "friend");
//!
//! let error = parse("MATCH (a)").unwrap_err();
//! assert_eq!(error.name(), "Cypher syntax error");
//! ```

pub mod ast;
pub mod config;
pub mod diag;
pub mod lexer;
pub mod parser;

pub use ast::{Query, Span};
pub use config::ParserConfig;
pub use diag::{Found, SyntaxError};
pub use lexer::token::{Token, TokenKind};
pub use lexer::{Lexer, LexerResult, tokenize};
pub use parser::Parser;

/// Parses a query with the default configuration.
pub fn parse(source: &str) -> Result<Query, SyntaxError> {
    Parser::new(source).parse()
}

/// Parses a query with a custom configuration.
pub fn parse_with_config(source: &str, config: &ParserConfig) -> Result<Query, SyntaxError> {
    Parser::with_config(source, config.clone()).parse()
}
