//! Expression trees built by the parser from scanned tokens.
//!
//! The set of node kinds is closed. Operations over trees (evaluation, printing, resolution) are
//! written as a [`Visitor`], one method per node kind, and [`Expr::accept`] routes each node to the
//! matching method.

mod expr;
pub use expr::{Expr, LiteralValue};

mod visitor;
pub use visitor::Visitor;

mod ast_printer;
pub use ast_printer::AstPrinter;
