use super::expr::{Expr, Identifier};
use crate::lexing::Token;

/// Capabilities shared by every tree node.
pub trait Node {
    /// Literal text of the token that introduced the node.
    fn token_literal(&self) -> &str;

    /// Canonical re-serialization with every prefix and infix expression parenthesized.
    fn compose_string(&self) -> String;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|s| s.token_literal())
            .unwrap_or("")
    }

    fn compose_string(&self) -> String {
        self.statements.iter().map(|s| s.compose_string()).collect()
    }
}

/// `value` is never captured by the parser yet; the bound expression is skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expr>,
}

/// `return_value` is never captured by the parser yet; the returned expression is skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub return_value: Option<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Expr,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Stmt {
    pub fn let_stmt(let_keyword: Token, name: Token, value: Option<Expr>) -> Self {
        Stmt::Let(LetStmt {
            token: let_keyword,
            name: Identifier::new(name),
            value,
        })
    }

    pub fn return_stmt(return_keyword: Token, return_value: Option<Expr>) -> Self {
        Stmt::Return(ReturnStmt {
            token: return_keyword,
            return_value,
        })
    }

    pub fn expression(first: Token, expression: Expr) -> Self {
        Stmt::Expression(ExpressionStmt {
            token: first,
            expression,
        })
    }

    pub fn token(&self) -> &Token {
        match self {
            Stmt::Let(stmt) => &stmt.token,
            Stmt::Return(stmt) => &stmt.token,
            Stmt::Expression(stmt) => &stmt.token,
        }
    }

    pub fn accept<V: StmtVisitor>(&self, visitor: &mut V) -> V::StmtResult {
        match self {
            Stmt::Let(stmt) => visitor.visit_let_stmt(&stmt.name, &stmt.value),
            Stmt::Return(stmt) => visitor.visit_return_stmt(&stmt.return_value),
            Stmt::Expression(stmt) => visitor.visit_expression_stmt(&stmt.expression),
        }
    }
}

impl Node for Stmt {
    fn token_literal(&self) -> &str {
        &self.token().literal
    }

    fn compose_string(&self) -> String {
        match self {
            Stmt::Let(stmt) => format!(
                "{} {} = {};",
                stmt.token.literal,
                stmt.name.compose_string(),
                compose_optional(&stmt.value)
            ),
            Stmt::Return(stmt) => format!(
                "{} {};",
                stmt.token.literal,
                compose_optional(&stmt.return_value)
            ),
            Stmt::Expression(stmt) => stmt.expression.compose_string(),
        }
    }
}

fn compose_optional(expr: &Option<Expr>) -> String {
    expr.as_ref().map(|e| e.compose_string()).unwrap_or_default()
}

pub trait StmtVisitor {
    type StmtResult;

    fn visit_let_stmt(&mut self, name: &Identifier, value: &Option<Expr>) -> Self::StmtResult;

    fn visit_return_stmt(&mut self, value: &Option<Expr>) -> Self::StmtResult;

    fn visit_expression_stmt(&mut self, expr: &Expr) -> Self::StmtResult;
}
