//! Expression AST nodes: operator chains and their operands.

use smol_str::SmolStr;

/// Operator classes, in the order the parser tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    /// `=~`, `IN`, `AND`, `OR`, `=`, `<>`, `>`, `<`, `|`
    Boolean,
    /// `+`, `-`, `*`, `/`
    Arithmetic,
    /// `:`
    Structural,
}

/// A chain operator.
///
/// Operators carry no precedence: a chain is read strictly left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    RegexMatch,
    In,
    And,
    Or,
    Eq,
    NotEq,
    Gt,
    Lt,
    Pipe,
    Add,
    Sub,
    Mul,
    Div,
    Colon,
}

impl Operator {
    /// Returns the class this operator belongs to.
    pub fn class(self) -> OperatorClass {
        match self {
            Operator::RegexMatch
            | Operator::In
            | Operator::And
            | Operator::Or
            | Operator::Eq
            | Operator::NotEq
            | Operator::Gt
            | Operator::Lt
            | Operator::Pipe => OperatorClass::Boolean,
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div => {
                OperatorClass::Arithmetic
            }
            Operator::Colon => OperatorClass::Structural,
        }
    }

    /// Returns the canonical source text of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::RegexMatch => "=~",
            Operator::In => "IN",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Eq => "=",
            Operator::NotEq => "<>",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Pipe => "|",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Colon => ":",
        }
    }

    /// Looks up a word operator (`IN`, `AND`, `OR`), ignoring ASCII case.
    pub fn from_word(word: &str) -> Option<Self> {
        [Operator::In, Operator::And, Operator::Or]
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(word))
    }
}

/// A flat, precedence-free chain `operand (operator operand)*`.
///
/// Chains may be empty. When non-empty, there is exactly one operator between
/// each pair of neighbouring operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<T> {
    operands: Vec<T>,
    operators: Vec<Operator>,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Chain<T> {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            operands: Vec::new(),
            operators: Vec::new(),
        }
    }

    /// Creates a chain holding a single operand.
    pub fn single(operand: T) -> Self {
        Self {
            operands: vec![operand],
            operators: Vec::new(),
        }
    }

    /// Appends `operator operand` to a non-empty chain, or starts an empty one.
    ///
    /// On an empty chain the operator is dropped, since a chain never starts
    /// with an operator.
    pub fn push(&mut self, operator: Operator, operand: T) {
        if !self.operands.is_empty() {
            self.operators.push(operator);
        }
        self.operands.push(operand);
    }

    /// Builder form of [`Chain::push`].
    pub fn then(mut self, operator: Operator, operand: T) -> Self {
        self.push(operator, operand);
        self
    }

    /// Operands in source order.
    pub fn operands(&self) -> &[T] {
        &self.operands
    }

    /// Operators in source order, one between each pair of operands.
    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    /// True if the chain holds no operand.
    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }

    /// Number of elements in the flat view: operands plus operators.
    pub fn len(&self) -> usize {
        self.operands.len() + self.operators.len()
    }

    /// Iterates the flat view in source order.
    pub fn iter(&self) -> impl Iterator<Item = ChainItem<'_, T>> {
        self.operands.iter().enumerate().flat_map(move |(index, operand)| {
            let operator = index
                .checked_sub(1)
                .and_then(|prev| self.operators.get(prev))
                .map(|op| ChainItem::Operator(*op));
            operator
                .into_iter()
                .chain(std::iter::once(ChainItem::Operand(operand)))
        })
    }
}

/// One element of a chain's flat view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainItem<'a, T> {
    Operand(&'a T),
    Operator(Operator),
}

/// An algebraic expression.
pub type Expression = Chain<Operand>;

/// A string value: bare identifier text or back-tick quoted content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringLiteral {
    pub value: SmolStr,
}

impl StringLiteral {
    pub fn new(value: impl Into<SmolStr>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// A property reference such as `n.name` or ``n.`full name` ``.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    /// The variable that owns the property.
    pub owner: SmolStr,
    pub name: StringLiteral,
}

impl Property {
    pub fn new(owner: impl Into<SmolStr>, name: impl Into<SmolStr>) -> Self {
        Self {
            owner: owner.into(),
            name: StringLiteral::new(name),
        }
    }
}

/// A function call such as `count(DISTINCT n)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: SmolStr,
    /// True if `DISTINCT` preceded the arguments.
    pub distinct: bool,
    pub arguments: Expression,
}

/// A `CASE ... END` expression, kept as the verbatim source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseExpression {
    pub text: SmolStr,
}

/// A numeric literal, kept as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    pub text: SmolStr,
}

impl Number {
    pub fn new(text: impl Into<SmolStr>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the numeric value.
    pub fn as_f64(&self) -> f64 {
        // The lexer only admits JSON-shaped numbers, all of which parse.
        self.text.parse().unwrap_or(f64::NAN)
    }
}

/// Literal keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal {
    Null,
    Boolean(bool),
}

/// An operand of an algebraic expression.
///
/// Variants are listed in the order the parser tries them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Function(Function),
    Case(CaseExpression),
    /// A parenthesized sub-expression.
    Group(Expression),
    Property(Property),
    Literal(Literal),
    Identifier(SmolStr),
    String(StringLiteral),
    Number(Number),
    /// `*`
    Wildcard,
}

impl Operand {
    pub fn identifier(name: impl Into<SmolStr>) -> Self {
        Operand::Identifier(name.into())
    }

    pub fn number(text: impl Into<SmolStr>) -> Self {
        Operand::Number(Number::new(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_classes() {
        assert_eq!(Operator::RegexMatch.class(), OperatorClass::Boolean);
        assert_eq!(Operator::Pipe.class(), OperatorClass::Boolean);
        assert_eq!(Operator::Mul.class(), OperatorClass::Arithmetic);
        assert_eq!(Operator::Colon.class(), OperatorClass::Structural);
    }

    #[test]
    fn word_operators_ignore_case() {
        assert_eq!(Operator::from_word("and"), Some(Operator::And));
        assert_eq!(Operator::from_word("Or"), Some(Operator::Or));
        assert_eq!(Operator::from_word("IN"), Some(Operator::In));
        assert_eq!(Operator::from_word("ANDY"), None);
    }

    #[test]
    fn chain_flat_view() {
        let chain = Chain::single(1).then(Operator::Add, 2).then(Operator::Mul, 3);
        assert_eq!(chain.len(), 5);
        let items: Vec<_> = chain.iter().collect();
        assert_eq!(
            items,
            vec![
                ChainItem::Operand(&1),
                ChainItem::Operator(Operator::Add),
                ChainItem::Operand(&2),
                ChainItem::Operator(Operator::Mul),
                ChainItem::Operand(&3),
            ]
        );
    }

    #[test]
    fn push_on_empty_chain_drops_operator() {
        let mut chain = Chain::new();
        chain.push(Operator::Eq, "a");
        assert_eq!(chain.operands(), &["a"]);
        assert!(chain.operators().is_empty());
        assert_eq!(Chain::<u8>::new().len(), 0);
    }

    #[test]
    fn number_value() {
        assert_eq!(Number::new("-1.5e2").as_f64(), -150.0);
        assert_eq!(Number::new("0").as_f64(), 0.0);
    }
}
