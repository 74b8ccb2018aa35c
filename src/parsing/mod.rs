mod ast;
mod ast_printer;
mod expr;
mod parser;

pub use ast::{
    ExpressionStmt, LetStmt, Node, Program, ReturnStmt, Stmt, StmtVisitor,
};
pub use ast_printer::ASTPrinter;
pub use expr::{Expr, ExprVisitor, Identifier, InfixExpr, IntegerLiteral, PrefixExpr};
pub use parser::{Parser, Precedence};

use crate::diagnostic::Diagnostic;
use crate::lexing::Lexer;
use crate::source::Source;

/// Lexes and parses `source` with a fresh lexer/parser pair.
pub fn parse(source: &Source) -> (Program, Vec<Diagnostic>) {
    Parser::new(Lexer::new(source)).parse_program()
}
