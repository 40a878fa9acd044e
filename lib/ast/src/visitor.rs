use scanner::Token;

use crate::{Expr, LiteralValue};

/// One operation over expression trees, with a method per node kind. See [`Expr::accept`].
pub trait Visitor<'a> {
    type Output;

    fn visit_binary(&mut self, left: &Expr<'a>, operator: &Token<'a>, right: &Expr<'a>)
        -> Self::Output;

    fn visit_grouping(&mut self, expression: &Expr<'a>) -> Self::Output;

    fn visit_literal(&mut self, value: &LiteralValue<'a>) -> Self::Output;

    fn visit_unary(&mut self, operator: &Token<'a>, right: &Expr<'a>) -> Self::Output;

    fn visit_ternary(
        &mut self,
        question: &Token<'a>,
        condition: &Expr<'a>,
        then_branch: &Expr<'a>,
        colon: &Token<'a>,
        else_branch: &Expr<'a>,
    ) -> Self::Output;
}
