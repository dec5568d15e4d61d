//! Graph pattern parsing: node and relationship definitions, directed
//! edges, paths and path lists.

use crate::ast::{
    DirectedEdge, LabelChain, LeftArrow, NodeDefinition, Path, PathStep, RelationshipDefinition,
    RightArrow,
};
use crate::lexer::token::TokenKind;

use super::Parser;

impl<'src> Parser<'src> {
    /// `'(' identifier (':' labels)? ')'`
    pub(super) fn node_definition(&mut self) -> Option<NodeDefinition> {
        self.attempt(|p| {
            p.punct(TokenKind::LParen)?;
            let name = p.identifier()?;
            let labels = p.label_chain();
            p.punct(TokenKind::RParen)?;
            Some(NodeDefinition { name, labels })
        })
    }

    /// `'[' identifier (':' types)? ']'`
    pub(super) fn relationship_definition(&mut self) -> Option<RelationshipDefinition> {
        self.attempt(|p| {
            p.punct(TokenKind::LBracket)?;
            let name = p.identifier()?;
            let types = p.label_chain();
            p.punct(TokenKind::RBracket)?;
            Some(RelationshipDefinition { name, types })
        })
    }

    /// `':' chain<quoted>`; the chain may be empty.
    fn label_chain(&mut self) -> Option<LabelChain> {
        self.punct(TokenKind::Colon)?;
        Some(self.chain(Self::quoted))
    }

    /// `('<-' | '-') relationship ('->' | '-')`
    pub(super) fn directed_edge(&mut self) -> Option<DirectedEdge> {
        self.attempt(|p| {
            let left = if p.arrow("`<-`", TokenKind::Lt, TokenKind::Minus) {
                LeftArrow::Incoming
            } else {
                p.punct(TokenKind::Minus)?;
                LeftArrow::Plain
            };
            let relationship = p.relationship_definition()?;
            let right = if p.arrow("`->`", TokenKind::Minus, TokenKind::Gt) {
                RightArrow::Outgoing
            } else {
                p.punct(TokenKind::Minus)?;
                RightArrow::Plain
            };
            Some(DirectedEdge::new(left, relationship, right))
        })
    }

    /// `(node (edge node)*)?`; always matches, possibly as an empty path.
    pub(super) fn path(&mut self) -> Option<Path> {
        let Some(start) = self.node_definition() else {
            return Some(Path::empty());
        };
        let steps = self.many(|p| {
            let edge = p.directed_edge()?;
            let node = p.node_definition()?;
            Some(PathStep { edge, node })
        });
        Some(Path {
            start: Some(start),
            steps,
        })
    }

    /// Comma-separated paths. Entries may be empty; a lone empty entry is no
    /// path at all.
    pub(super) fn path_list(&mut self) -> Vec<Path> {
        self.comma_list(Self::path, Path::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Chain, Direction, Operator, StringLiteral};

    fn path(source: &str) -> Path {
        let mut parser = Parser::new(source);
        let path = parser.path().expect("path parses");
        assert!(parser.end_of_input(), "trailing input in `{source}`");
        path
    }

    #[test]
    fn node_without_labels() {
        assert_eq!(path("( a )").start, Some(NodeDefinition::new("a")));
    }

    #[test]
    fn node_with_empty_label_chain() {
        assert_eq!(
            path("(a:)").start,
            Some(NodeDefinition::new("a").with_labels(Chain::new()))
        );
    }

    #[test]
    fn labels_keep_case_and_separators() {
        let node = path("(a:Foo|`Bar Baz`)").start.unwrap();
        let expected = Chain::single(StringLiteral::new("Foo"))
            .then(Operator::Pipe, StringLiteral::new("Bar Baz"));
        assert_eq!(node.labels, Some(expected));
    }

    #[test]
    fn any_operator_separates_labels() {
        let node = path("(a:Foo AND Bar = Baz)").start.unwrap();
        let labels = node.labels.unwrap();
        assert_eq!(labels.operators(), &[Operator::And, Operator::Eq]);
    }

    #[test]
    fn edge_directions() {
        let cases = [
            ("(a)-[r]->(b)", Direction::Outgoing),
            ("(a)<-[r]-(b)", Direction::Incoming),
            ("(a)-[r]-(b)", Direction::Undirected),
            ("(a)<-[r]->(b)", Direction::Bidirectional),
            ("(a) <- [r] -> (b)", Direction::Bidirectional),
        ];
        for (source, direction) in cases {
            let path = path(source);
            assert_eq!(path.steps.len(), 1, "{source}");
            assert_eq!(path.steps[0].edge.direction(), direction, "{source}");
        }
    }

    #[test]
    fn split_arrow_is_rejected() {
        let mut parser = Parser::new("(a)-[r]- >(b)");
        let path = parser.path().unwrap();
        assert!(path.steps.is_empty());
        assert!(!parser.end_of_input());
    }

    #[test]
    fn relationship_types() {
        let path = path("(a)-[r:KNOWS|LIKES]->(b)");
        let rel = &path.steps[0].edge.relationship;
        assert_eq!(rel.name, "r");
        assert_eq!(rel.type_names().collect::<Vec<_>>(), vec!["KNOWS", "LIKES"]);
    }

    #[test]
    fn long_chain_ends_on_node() {
        let path = path("(a)-[r]->(b)<-[s]-(c)-[t]-(d)");
        assert_eq!(path.steps.len(), 3);
        assert_eq!(path.end().map(|node| node.name.as_str()), Some("d"));
    }

    #[test]
    fn dangling_edge_is_left_unconsumed() {
        let mut parser = Parser::new("(a)-[r]->");
        let path = parser.path().unwrap();
        assert!(path.steps.is_empty());
        assert_eq!(parser.stream.position(), 3);
    }

    #[test]
    fn path_list_is_comma_separated() {
        let mut parser = Parser::new("(a), (b)-[r]->(c)");
        let paths = parser.path_list();
        assert_eq!(paths.len(), 2);
        assert!(parser.end_of_input());
        let mut parser = Parser::new("");
        assert!(parser.path_list().is_empty());
    }

    #[test]
    fn path_list_keeps_empty_entries() {
        let mut parser = Parser::new("(a), RETURN");
        let paths = parser.path_list();
        assert_eq!(paths, vec![Path::new(NodeDefinition::new("a")), Path::empty()]);
        assert_eq!(parser.stream.position(), 4);

        let mut parser = Parser::new(", (b)");
        let paths = parser.path_list();
        assert!(paths[0].is_empty());
        assert_eq!(paths[1].nodes().count(), 1);
    }

    #[test]
    fn missing_identifier_fails() {
        let mut parser = Parser::new("(:Person)");
        assert!(parser.node_definition().is_none());
        assert_eq!(parser.stream.position(), 0);
    }
}
