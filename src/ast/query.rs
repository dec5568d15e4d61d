//! Query-level AST nodes.

use super::expression::{Expression, StringLiteral};
use super::pattern::Path;
use smol_str::SmolStr;

/// Surface form of a match directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Match,
    OptionalMatch,
}

impl MatchKind {
    /// Normalized directive text.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Match => "MATCH",
            MatchKind::OptionalMatch => "OPTIONAL MATCH",
        }
    }

    pub fn is_optional(self) -> bool {
        self == MatchKind::OptionalMatch
    }
}

/// `START <body>`; the body is kept verbatim and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StartClause {
    pub body: SmolStr,
}

/// `MATCH paths [WHERE expression]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchClause {
    pub kind: MatchKind,
    pub paths: Vec<Path>,
    pub where_clause: Option<Expression>,
}

/// One item of the `RETURN` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnItem {
    pub expression: Expression,
    pub alias: Option<StringLiteral>,
}

impl ReturnItem {
    pub fn new(expression: Expression) -> Self {
        Self {
            expression,
            alias: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<SmolStr>) -> Self {
        self.alias = Some(StringLiteral::new(alias));
        self
    }

    /// True for an item with neither an expression nor an alias, as left by
    /// a trailing comma.
    pub fn is_blank(&self) -> bool {
        self.expression.is_empty() && self.alias.is_none()
    }
}

/// The root of a parsed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub start: Option<StartClause>,
    pub matches: Vec<MatchClause>,
    pub returns: Vec<ReturnItem>,
}

impl Query {
    /// Returns true if any match clause is an `OPTIONAL MATCH`.
    pub fn has_optional_match(&self) -> bool {
        self.matches.iter().any(|clause| clause.kind.is_optional())
    }

    /// Node and relationship variables bound by the patterns, in source
    /// order. Repeated names are reported each time they occur.
    pub fn bound_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for path in self.matches.iter().flat_map(|clause| &clause.paths) {
            names.extend(path.start.iter().map(|node| node.name.as_str()));
            for step in &path.steps {
                names.push(step.edge.relationship.name.as_str());
                names.push(step.node.name.as_str());
            }
        }
        names
    }
}
