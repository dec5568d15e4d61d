//! The syntax error raised by the parser and its miette rendering.

use crate::ast::Span;
use miette::{Diagnostic, LabeledSpan, Report};
use smol_str::SmolStr;
use std::fmt;

/// Raised when a query does not match the grammar.
///
/// There is exactly one error kind. It records the alternatives that would
/// have let the parse continue at the furthest position reached, and what
/// was found there instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxError {
    message: String,
    span: Span,
    expected: Vec<SmolStr>,
    found: Found,
}

/// What the parser saw where it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    /// A token, rendered as its source text.
    Token(SmolStr),
    /// Text no token matches.
    Unrecognized(SmolStr),
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(text) => write!(f, "`{text}`"),
            Found::Unrecognized(text) => write!(f, "unrecognized input `{text}`"),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

impl SyntaxError {
    /// The fixed name of this error kind.
    pub const NAME: &'static str = "Cypher syntax error";

    /// Creates an error from an expectation set.
    pub fn expected(expected: Vec<SmolStr>, found: Found, span: Span) -> Self {
        let message = match expected.as_slice() {
            [] => format!("unexpected {found}"),
            [single] => format!("expected {single}, found {found}"),
            many => format!("expected one of {}, found {found}", many.join(", ")),
        };
        Self {
            message,
            span,
            expected,
            found,
        }
    }

    /// Creates an error for input the lexer does not recognize.
    pub fn unrecognized(span: Span, text: &str) -> Self {
        let found = Found::Unrecognized(text.into());
        Self {
            message: format!("{found}"),
            span,
            expected: Vec::new(),
            found,
        }
    }

    /// Creates an error for expressions nested deeper than `limit`.
    pub fn nesting_too_deep(limit: usize, span: Span) -> Self {
        Self {
            message: format!("expression nesting exceeds the limit of {limit}"),
            span,
            expected: Vec::new(),
            found: Found::Token("(".into()),
        }
    }

    /// The fixed name of this error kind, see [`SyntaxError::NAME`].
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte span of the failure in the source text.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Alternatives accepted at the failure position.
    pub fn expected_alternatives(&self) -> &[SmolStr] {
        &self.expected
    }

    pub fn found(&self) -> &Found {
        &self.found
    }

    /// Converts this error into a miette report carrying the query text.
    ///
    /// The span is clamped to the source so that rendering never fails.
    pub fn to_report(&self, source: &str) -> Report {
        let len = source.len();
        let start = self.span.start.min(len);
        let end = self.span.end.min(len).max(start);
        let mut error = self.clone();
        error.span = start..end;
        Report::new(error).with_source_code(source.to_string())
    }
}

impl Diagnostic for SyntaxError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("cypher::syntax"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.expected.is_empty() {
            None
        } else {
            Some(Box::new(format!("accepted here: {}", self.expected.join(", "))))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = match &self.found {
            Found::EndOfInput => "query ends here".to_string(),
            found => format!("unexpected {found}"),
        };
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(label),
            self.span.clone(),
        ))))
    }
}
