//! Query assembly: `START`, `MATCH`/`OPTIONAL MATCH` clauses and `RETURN`.

use crate::ast::{Expression, MatchClause, Query, ReturnItem, StartClause};

use super::Parser;

impl<'src> Parser<'src> {
    /// `(START body)? match_clause* RETURN items` followed by end of input.
    pub(super) fn parse_query(&mut self) -> Option<Query> {
        let start = self.attempt(Self::start_clause);
        let matches = self.many(Self::match_clause);
        self.return_directive()?;
        let returns = self.comma_list(Self::return_item, ReturnItem::is_blank);
        if !self.end_of_input() {
            return None;
        }
        Some(Query {
            start,
            matches,
            returns,
        })
    }

    fn start_clause(&mut self) -> Option<StartClause> {
        self.start_directive()?;
        let body = self.start_body()?;
        Some(StartClause { body })
    }

    /// `(MATCH | OPTIONAL MATCH) paths (WHERE algebraic)?`
    fn match_clause(&mut self) -> Option<MatchClause> {
        let kind = self.match_directive()?;
        let paths = self.path_list();
        let where_clause = self.attempt(|p| {
            p.where_directive()?;
            Some(p.where_body())
        });
        Some(MatchClause {
            kind,
            paths,
            where_clause,
        })
    }

    /// The condition after `WHERE`. It is empty when a clause directive
    /// follows directly, so `WHERE RETURN a` does not read `RETURN` as an
    /// identifier.
    fn where_body(&mut self) -> Expression {
        if self.at_clause_directive() {
            return Expression::new();
        }
        self.algebraic()
    }

    /// `algebraic (AS quoted)?`; both parts may be absent.
    fn return_item(&mut self) -> Option<ReturnItem> {
        let expression = self.algebraic();
        let alias = self.attempt(|p| {
            p.as_directive()?;
            p.quoted()
        });
        Some(ReturnItem { expression, alias })
    }
}
