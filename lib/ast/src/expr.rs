use std::fmt::{self, Display, Formatter};

use scanner::{Literal, Token, TokenType};

use crate::{AstPrinter, Visitor};

/// An expression node. Children are owned by their parent, operator tokens are the scanned
/// tokens that produced the node, so their line can be used for runtime errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Binary { left: Box<Expr<'a>>, operator: Token<'a>, right: Box<Expr<'a>> },
    Grouping { expression: Box<Expr<'a>> },
    Literal { value: LiteralValue<'a> },
    Unary { operator: Token<'a>, right: Box<Expr<'a>> },
    /// `condition ? then_branch : else_branch`, right-associative.
    Ternary {
        question: Token<'a>,
        condition: Box<Expr<'a>>,
        then_branch: Box<Expr<'a>>,
        colon: Token<'a>,
        else_branch: Box<Expr<'a>>,
    },
}

impl<'a> Expr<'a> {
    pub fn binary(left: Expr<'a>, operator: Token<'a>, right: Expr<'a>) -> Self {
        Expr::Binary { left: Box::new(left), operator, right: Box::new(right) }
    }

    pub fn grouping(expression: Expr<'a>) -> Self {
        Expr::Grouping { expression: Box::new(expression) }
    }

    pub fn literal(value: impl Into<LiteralValue<'a>>) -> Self {
        Expr::Literal { value: value.into() }
    }

    pub fn unary(operator: Token<'a>, right: Expr<'a>) -> Self {
        Expr::Unary { operator, right: Box::new(right) }
    }

    pub fn ternary(
        question: Token<'a>,
        condition: Expr<'a>,
        then_branch: Expr<'a>,
        colon: Token<'a>,
        else_branch: Expr<'a>,
    ) -> Self {
        Expr::Ternary {
            question,
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            colon,
            else_branch: Box::new(else_branch),
        }
    }

    /// Hands this node to the `visitor` method for its kind.
    pub fn accept<V: Visitor<'a> + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Binary { left, operator, right } => visitor.visit_binary(left, operator, right),
            Expr::Grouping { expression } => visitor.visit_grouping(expression),
            Expr::Literal { value } => visitor.visit_literal(value),
            Expr::Unary { operator, right } => visitor.visit_unary(operator, right),
            Expr::Ternary { question, condition, then_branch, colon, else_branch } => {
                visitor.visit_ternary(question, condition, then_branch, colon, else_branch)
            }
        }
    }
}

impl Display for Expr<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", AstPrinter.print(self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::From)]
pub enum LiteralValue<'a> {
    #[display(fmt = "{}", _0)]
    Number(f64),
    #[display(fmt = "{}", _0)]
    Str(&'a str),
    #[display(fmt = "{}", _0)]
    Boolean(bool),
    #[display(fmt = "nil")]
    #[from(ignore)]
    Nil,
}

impl<'a> LiteralValue<'a> {
    /// The value of a literal token: a STRING or NUMBER payload, or one of the `true`, `false`
    /// and `nil` keywords. Any other token has no literal value.
    pub fn from_token(token: &Token<'a>) -> Option<Self> {
        match (token.kind, token.literal) {
            (TokenType::Number, Some(literal)) | (TokenType::String, Some(literal)) => {
                Some(literal.into())
            }
            (TokenType::True, _) => Some(LiteralValue::Boolean(true)),
            (TokenType::False, _) => Some(LiteralValue::Boolean(false)),
            (TokenType::Nil, _) => Some(LiteralValue::Nil),
            _ => None,
        }
    }
}

impl<'a> From<Literal<'a>> for LiteralValue<'a> {
    fn from(literal: Literal<'a>) -> Self {
        match literal {
            Literal::Str(s) => LiteralValue::Str(s),
            Literal::Number(n) => LiteralValue::Number(n),
        }
    }
}
