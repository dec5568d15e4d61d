//! Graph pattern AST nodes: node and relationship definitions, edges, paths.

use super::expression::{Chain, StringLiteral};
use smol_str::SmolStr;

/// A label or relationship-type chain such as `Person|Employee`.
///
/// Any chain operator is accepted between names; only `|` and `:` carry a
/// meaning for consumers.
pub type LabelChain = Chain<StringLiteral>;

/// A node definition: `(name)` or `(name:Label...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDefinition {
    pub name: SmolStr,
    /// `None` when no `:` was written; `Some` (possibly empty) otherwise.
    pub labels: Option<LabelChain>,
}

impl NodeDefinition {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            labels: None,
        }
    }

    pub fn with_labels(mut self, labels: LabelChain) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Iterates label names in source order, skipping separators.
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels
            .iter()
            .flat_map(|chain| chain.operands().iter().map(StringLiteral::as_str))
    }
}

/// A relationship definition: `[name]` or `[name:TYPE...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipDefinition {
    pub name: SmolStr,
    /// `None` when no `:` was written; `Some` (possibly empty) otherwise.
    pub types: Option<LabelChain>,
}

impl RelationshipDefinition {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            types: None,
        }
    }

    pub fn with_types(mut self, types: LabelChain) -> Self {
        self.types = Some(types);
        self
    }

    /// Iterates relationship type names in source order, skipping separators.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types
            .iter()
            .flat_map(|chain| chain.operands().iter().map(StringLiteral::as_str))
    }
}

/// The marker left of a relationship: `<-` or `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeftArrow {
    Incoming,
    Plain,
}

/// The marker right of a relationship: `->` or `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RightArrow {
    Outgoing,
    Plain,
}

/// Direction of an edge, derived from its two independent arrow markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `-[r]->`
    Outgoing,
    /// `<-[r]-`
    Incoming,
    /// `-[r]-`
    Undirected,
    /// `<-[r]->`
    Bidirectional,
}

/// A relationship definition together with its arrow markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedEdge {
    pub left: LeftArrow,
    pub relationship: RelationshipDefinition,
    pub right: RightArrow,
}

impl DirectedEdge {
    pub fn new(left: LeftArrow, relationship: RelationshipDefinition, right: RightArrow) -> Self {
        Self {
            left,
            relationship,
            right,
        }
    }

    pub fn outgoing(relationship: RelationshipDefinition) -> Self {
        Self::new(LeftArrow::Plain, relationship, RightArrow::Outgoing)
    }

    pub fn incoming(relationship: RelationshipDefinition) -> Self {
        Self::new(LeftArrow::Incoming, relationship, RightArrow::Plain)
    }

    pub fn undirected(relationship: RelationshipDefinition) -> Self {
        Self::new(LeftArrow::Plain, relationship, RightArrow::Plain)
    }

    pub fn direction(&self) -> Direction {
        match (self.left, self.right) {
            (LeftArrow::Plain, RightArrow::Outgoing) => Direction::Outgoing,
            (LeftArrow::Incoming, RightArrow::Plain) => Direction::Incoming,
            (LeftArrow::Plain, RightArrow::Plain) => Direction::Undirected,
            (LeftArrow::Incoming, RightArrow::Outgoing) => Direction::Bidirectional,
        }
    }
}

/// One `edge node` hop of a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub edge: DirectedEdge,
    pub node: NodeDefinition,
}

/// A chain of nodes joined by edges; starts and ends on a node.
///
/// A path list entry may be empty (`MATCH (a), RETURN a`); an empty path has
/// no start and no steps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    pub start: Option<NodeDefinition>,
    pub steps: Vec<PathStep>,
}

impl Path {
    pub fn new(start: NodeDefinition) -> Self {
        Self {
            start: Some(start),
            steps: Vec::new(),
        }
    }

    /// A path with no nodes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Appends a hop. Has no effect on an empty path.
    pub fn then(mut self, edge: DirectedEdge, node: NodeDefinition) -> Self {
        if self.start.is_some() {
            self.steps.push(PathStep { edge, node });
        }
        self
    }

    /// True for a path list entry with no nodes.
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// Iterates the nodes of the path in order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeDefinition> {
        self.start
            .iter()
            .chain(self.steps.iter().map(|step| &step.node))
    }

    /// Iterates the edges of the path in order.
    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge> {
        self.steps.iter().map(|step| &step.edge)
    }

    /// Returns the final node, if the path has one.
    pub fn end(&self) -> Option<&NodeDefinition> {
        self.steps
            .last()
            .map(|step| &step.node)
            .or(self.start.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operator;

    #[test]
    fn directions() {
        let rel = RelationshipDefinition::new("r");
        assert_eq!(DirectedEdge::outgoing(rel.clone()).direction(), Direction::Outgoing);
        assert_eq!(DirectedEdge::incoming(rel.clone()).direction(), Direction::Incoming);
        assert_eq!(
            DirectedEdge::undirected(rel.clone()).direction(),
            Direction::Undirected
        );
        let both = DirectedEdge::new(LeftArrow::Incoming, rel, RightArrow::Outgoing);
        assert_eq!(both.direction(), Direction::Bidirectional);
    }

    #[test]
    fn label_names_skip_separators() {
        let labels = Chain::single(StringLiteral::new("Foo"))
            .then(Operator::Pipe, StringLiteral::new("Bar"));
        let node = NodeDefinition::new("a").with_labels(labels);
        assert_eq!(node.label_names().collect::<Vec<_>>(), vec!["Foo", "Bar"]);
        assert_eq!(NodeDefinition::new("b").label_names().count(), 0);
    }

    #[test]
    fn path_walks_nodes_and_edges() {
        let path = Path::new(NodeDefinition::new("a"))
            .then(
                DirectedEdge::outgoing(RelationshipDefinition::new("r")),
                NodeDefinition::new("b"),
            )
            .then(
                DirectedEdge::incoming(RelationshipDefinition::new("s")),
                NodeDefinition::new("c"),
            );
        let names: Vec<_> = path.nodes().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(path.edges().count(), 2);
        assert_eq!(path.end().map(|n| n.name.as_str()), Some("c"));
        assert_eq!(
            Path::new(NodeDefinition::new("x")).end().map(|n| n.name.as_str()),
            Some("x")
        );
    }

    #[test]
    fn empty_path_has_no_nodes() {
        let path = Path::empty().then(
            DirectedEdge::outgoing(RelationshipDefinition::new("r")),
            NodeDefinition::new("b"),
        );
        assert!(path.is_empty());
        assert_eq!(path.nodes().count(), 0);
        assert!(path.end().is_none());
    }
}
