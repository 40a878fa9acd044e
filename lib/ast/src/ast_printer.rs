use itertools::Itertools;
use scanner::Token;

use crate::{Expr, LiteralValue, Visitor};

/// Prints expressions as fully parenthesized S-expressions, e.g. `(* (- 123) (group 45.67))`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(mut self, expr: &Expr) -> String {
        expr.accept(&mut self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        format!("({} {})", name, exprs.iter().map(|expr| expr.accept(self)).join(" "))
    }
}

impl<'a> Visitor<'a> for AstPrinter {
    type Output = String;

    fn visit_binary(&mut self, left: &Expr<'a>, operator: &Token<'a>, right: &Expr<'a>) -> String {
        self.parenthesize(operator.lexeme, &[left, right])
    }

    fn visit_grouping(&mut self, expression: &Expr<'a>) -> String {
        self.parenthesize("group", &[expression])
    }

    fn visit_literal(&mut self, value: &LiteralValue<'a>) -> String {
        value.to_string()
    }

    fn visit_unary(&mut self, operator: &Token<'a>, right: &Expr<'a>) -> String {
        self.parenthesize(operator.lexeme, &[right])
    }

    fn visit_ternary(
        &mut self,
        question: &Token<'a>,
        condition: &Expr<'a>,
        then_branch: &Expr<'a>,
        colon: &Token<'a>,
        else_branch: &Expr<'a>,
    ) -> String {
        let name = format!("{}{}", question.lexeme, colon.lexeme);
        self.parenthesize(&name, &[condition, then_branch, else_branch])
    }
}
