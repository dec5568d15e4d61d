//! AST node structures.
//!
//! Nodes carry no source positions: two queries that differ only in
//! whitespace produce equal trees.

mod display;
pub mod expression;
pub mod pattern;
pub mod query;

use std::ops::Range;

/// A byte range in source text, used by tokens and diagnostics.
pub type Span = Range<usize>;

pub use expression::{
    CaseExpression, Chain, ChainItem, Expression, Function, Literal, Number, Operand, Operator,
    OperatorClass, Property, StringLiteral,
};
pub use pattern::{
    DirectedEdge, Direction, LabelChain, LeftArrow, NodeDefinition, Path, PathStep,
    RelationshipDefinition, RightArrow,
};
pub use query::{MatchClause, MatchKind, Query, ReturnItem, StartClause};
