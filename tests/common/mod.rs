//! Common test utilities shared by the integration suites.
//!
//! # Parsing Helpers
//! - [`parse_ok`] - Parse source and return the query, panicking on errors
//! - [`parse_err`] - Parse source and return the error, panicking on success
//! - [`assert_round_trips`] - Assert that rendering a query re-parses to the same tree

#![allow(dead_code)]

use cypher_parser::{Query, SyntaxError, parse};

/// Parse source and return the query, panicking with the rendered
/// diagnostic if parsing fails.
pub fn parse_ok(source: &str) -> Query {
    match parse(source) {
        Ok(query) => query,
        Err(error) => panic!("`{source}` should parse:\n{:?}", error.to_report(source)),
    }
}

/// Parse source and return the syntax error.
pub fn parse_err(source: &str) -> SyntaxError {
    match parse(source) {
        Ok(query) => panic!("`{source}` should be rejected, got {query:?}"),
        Err(error) => error,
    }
}

/// Assert that `source` parses, and that its canonical rendering parses to
/// an identical tree.
pub fn assert_round_trips(source: &str) -> Query {
    let query = parse_ok(source);
    let rendered = query.to_string();
    let reparsed = parse_ok(&rendered);
    assert_eq!(query, reparsed, "`{source}` rendered as `{rendered}`");
    query
}

/// Collapse every run of whitespace to a single space.
pub fn normalize_whitespace(source: &str) -> String {
    source.split_whitespace().collect::<Vec<_>>().join(" ")
}
