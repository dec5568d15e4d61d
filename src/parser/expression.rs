//! Expression parsing.
//!
//! An algebraic expression is a flat operator chain. There is no precedence
//! climbing: `1 + 2 * 3` is five chain elements read left to right.

use crate::ast::{CaseExpression, Expression, Function, Literal, Number, Operand, Property};
use crate::lexer::token::TokenKind;
use smol_str::SmolStr;

use super::Parser;
use super::base::find_word;

impl<'src> Parser<'src> {
    /// An operator chain of operands; may be empty.
    pub(super) fn algebraic(&mut self) -> Expression {
        self.chain(Self::operand)
    }

    /// Operands in trial order: function call, `CASE`, parenthesized
    /// expression, property, literal keyword, identifier, quoted string,
    /// number, `*`.
    fn operand(&mut self) -> Option<Operand> {
        if let Some(function) = self.attempt(Self::function) {
            return Some(Operand::Function(function));
        }
        if let Some(case) = self.attempt(Self::case_expression) {
            return Some(Operand::Case(case));
        }
        if let Some(group) = self.attempt(Self::group) {
            return Some(Operand::Group(group));
        }
        if let Some(property) = self.attempt(Self::property) {
            return Some(Operand::Property(property));
        }
        if let Some(literal) = self.literal() {
            return Some(Operand::Literal(literal));
        }
        if let Some(name) = self.identifier() {
            return Some(Operand::Identifier(name));
        }
        if let Some(literal) = self.quoted_string() {
            return Some(Operand::String(literal));
        }
        if let Some(text) = self.number() {
            return Some(Operand::Number(Number { text }));
        }
        self.punct(TokenKind::Star).map(|_| Operand::Wildcard)
    }

    /// `identifier '(' DISTINCT? algebraic ')'`
    fn function(&mut self) -> Option<Function> {
        let name = self.identifier()?;
        self.punct(TokenKind::LParen)?;
        self.nested(|p| {
            let distinct = p.distinct_directive().is_some();
            let arguments = p.algebraic();
            p.punct(TokenKind::RParen)?;
            Some(Function {
                name,
                distinct,
                arguments,
            })
        })
    }

    /// `'(' algebraic ')'`
    fn group(&mut self) -> Option<Expression> {
        self.punct(TokenKind::LParen)?;
        self.nested(|p| {
            let inner = p.algebraic();
            p.punct(TokenKind::RParen)?;
            Some(inner)
        })
    }

    /// `identifier '.' quoted`
    fn property(&mut self) -> Option<Property> {
        let owner = self.identifier()?;
        self.punct(TokenKind::Dot)?;
        let name = self.quoted()?;
        Some(Property { owner, name })
    }

    /// `null`, `true` or `false`, written in lower case.
    fn literal(&mut self) -> Option<Literal> {
        self.token_map("literal", |token| {
            match token.kind.as_identifier().map(SmolStr::as_str) {
                Some("null") => Some(Literal::Null),
                Some("true") => Some(Literal::Boolean(true)),
                Some("false") => Some(Literal::Boolean(false)),
                _ => None,
            }
        })
    }

    /// `CASE ... END`, captured verbatim up to the first whole-word `END`.
    fn case_expression(&mut self) -> Option<CaseExpression> {
        let case = self.keyword("CASE")?;
        let source = self.stream.source();
        let Some(offset) = find_word(&source[case.span.end..], "END") else {
            self.stream.expect_at(source.len(), "`END`");
            return None;
        };
        let end = case.span.end + offset + "END".len();
        let text = SmolStr::new(source[case.span.start..end].trim());
        tracing::trace!(text = %text, "captured CASE expression");
        self.stream.set_position(end);
        Some(CaseExpression { text })
    }
}
