//! Canonical query text for AST nodes.
//!
//! Rendering always re-parses to an equal tree. String literals are written
//! with back-ticks so that they never turn into identifiers on re-parse.

use super::*;
use std::fmt::{self, Display, Formatter, Write};

fn write_separated<T: Display>(f: &mut Formatter<'_>, items: &[T], separator: &str) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: Display> Display for Chain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                f.write_char(' ')?;
            }
            match item {
                ChainItem::Operand(operand) => write!(f, "{operand}")?,
                ChainItem::Operator(operator) => write!(f, "{operator}")?,
            }
        }
        Ok(())
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`", self.value)
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.name)
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        if self.distinct {
            f.write_str("DISTINCT ")?;
        }
        write!(f, "{})", self.arguments)
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Boolean(true) => f.write_str("true"),
            Literal::Boolean(false) => f.write_str("false"),
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Function(function) => write!(f, "{function}"),
            Operand::Case(case) => f.write_str(&case.text),
            Operand::Group(inner) => write!(f, "({inner})"),
            Operand::Property(property) => write!(f, "{property}"),
            Operand::Literal(literal) => write!(f, "{literal}"),
            Operand::Identifier(name) => f.write_str(name),
            Operand::String(literal) => write!(f, "{literal}"),
            Operand::Number(number) => f.write_str(&number.text),
            Operand::Wildcard => f.write_char('*'),
        }
    }
}

impl Display for NodeDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.name)?;
        if let Some(labels) = &self.labels {
            write!(f, ":{labels}")?;
        }
        f.write_char(')')
    }
}

impl Display for RelationshipDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.name)?;
        if let Some(types) = &self.types {
            write!(f, ":{types}")?;
        }
        f.write_char(']')
    }
}

impl Display for DirectedEdge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let left = match self.left {
            LeftArrow::Incoming => "<-",
            LeftArrow::Plain => "-",
        };
        let right = match self.right {
            RightArrow::Outgoing => "->",
            RightArrow::Plain => "-",
        };
        write!(f, "{left}{}{right}", self.relationship)
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(start) = &self.start {
            write!(f, "{start}")?;
        }
        for step in &self.steps {
            write!(f, "{}{}", step.edge, step.node)?;
        }
        Ok(())
    }
}

impl Display for MatchKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for StartClause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("START")?;
        if !self.body.is_empty() {
            write!(f, " {}", self.body)?;
        }
        Ok(())
    }
}

impl Display for MatchClause {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.paths.is_empty() {
            f.write_char(' ')?;
            write_separated(f, &self.paths, ", ")?;
        }
        if let Some(condition) = &self.where_clause {
            f.write_str(" WHERE")?;
            if !condition.is_empty() {
                write!(f, " {condition}")?;
            }
        }
        Ok(())
    }
}

impl Display for ReturnItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)?;
        if let Some(alias) = &self.alias {
            write!(f, " AS {alias}")?;
        }
        Ok(())
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(start) = &self.start {
            write!(f, "{start} ")?;
        }
        for clause in &self.matches {
            write!(f, "{clause} ")?;
        }
        f.write_str("RETURN")?;
        if !self.returns.is_empty() {
            f.write_char(' ')?;
            write_separated(f, &self.returns, ", ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_flat_chain() {
        let expr = Expression::single(Operand::number("1"))
            .then(Operator::Add, Operand::number("2"))
            .then(Operator::Mul, Operand::number("3"));
        assert_eq!(expr.to_string(), "1 + 2 * 3");
    }

    #[test]
    fn renders_patterns() {
        let labels = Chain::single(StringLiteral::new("Foo"))
            .then(Operator::Pipe, StringLiteral::new("Bar"));
        let path = Path::new(NodeDefinition::new("a").with_labels(labels)).then(
            DirectedEdge::incoming(
                RelationshipDefinition::new("r").with_types(Chain::single(StringLiteral::new("KNOWS"))),
            ),
            NodeDefinition::new("b").with_labels(Chain::new()),
        );
        assert_eq!(path.to_string(), "(a:`Foo` | `Bar`)<-[r:`KNOWS`]-(b:)");
    }

    #[test]
    fn renders_function_and_property() {
        let function = Function {
            name: "count".into(),
            distinct: true,
            arguments: Expression::single(Operand::Property(Property::new("n", "age"))),
        };
        assert_eq!(function.to_string(), "count(DISTINCT n.`age`)");
    }

    #[test]
    fn renders_query() {
        let query = Query {
            start: Some(StartClause {
                body: "n=node(*)".into(),
            }),
            matches: vec![MatchClause {
                kind: MatchKind::OptionalMatch,
                paths: vec![Path::new(NodeDefinition::new("n"))],
                where_clause: Some(Expression::new()),
            }],
            returns: vec![ReturnItem::new(Expression::single(Operand::Wildcard)).with_alias("all")],
        };
        assert_eq!(
            query.to_string(),
            "START n=node(*) OPTIONAL MATCH (n) WHERE RETURN * AS `all`"
        );
    }

    #[test]
    fn renders_blank_entries() {
        let query = Query {
            start: None,
            matches: vec![MatchClause {
                kind: MatchKind::Match,
                paths: vec![Path::new(NodeDefinition::new("a")), Path::empty()],
                where_clause: None,
            }],
            returns: vec![
                ReturnItem::new(Expression::single(Operand::identifier("a"))),
                ReturnItem::new(Expression::new()),
            ],
        };
        assert_eq!(query.to_string(), "MATCH (a),  RETURN a, ");
    }
}
