use super::ast::Node;
use crate::lexing::Token;

#[derive(Clone, Debug, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let value = token.literal.clone();
        Identifier { token, value }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InfixExpr {
    pub token: Token,
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
}

impl Expr {
    pub fn identifier(token: Token) -> Self {
        Expr::Identifier(Identifier::new(token))
    }

    pub fn integer(token: Token, value: i64) -> Self {
        Expr::IntegerLiteral(IntegerLiteral { token, value })
    }

    pub fn prefix(operator: Token, right: Expr) -> Self {
        Expr::Prefix(PrefixExpr {
            operator: operator.literal.clone(),
            token: operator,
            right: Box::new(right),
        })
    }

    pub fn infix(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Infix(InfixExpr {
            left: Box::new(left),
            operator: operator.literal.clone(),
            token: operator,
            right: Box::new(right),
        })
    }

    pub fn token(&self) -> &Token {
        match self {
            Expr::Identifier(ident) => &ident.token,
            Expr::IntegerLiteral(literal) => &literal.token,
            Expr::Prefix(prefix) => &prefix.token,
            Expr::Infix(infix) => &infix.token,
        }
    }

    pub fn accept<V: ExprVisitor>(&self, visitor: &mut V) -> V::ExprResult {
        match self {
            Expr::Identifier(ident) => visitor.visit_identifier_expr(ident),
            Expr::IntegerLiteral(literal) => visitor.visit_integer_expr(literal),
            Expr::Prefix(prefix) => visitor.visit_prefix_expr(&prefix.operator, &prefix.right),
            Expr::Infix(infix) => {
                visitor.visit_infix_expr(&infix.left, &infix.operator, &infix.right)
            }
        }
    }
}

impl Node for Expr {
    fn token_literal(&self) -> &str {
        &self.token().literal
    }

    fn compose_string(&self) -> String {
        match self {
            Expr::Identifier(ident) => ident.value.clone(),
            Expr::IntegerLiteral(literal) => literal.token.literal.clone(),
            Expr::Prefix(prefix) => {
                format!("({}{})", prefix.operator, prefix.right.compose_string())
            }
            Expr::Infix(infix) => format!(
                "({} {} {})",
                infix.left.compose_string(),
                infix.operator,
                infix.right.compose_string()
            ),
        }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }

    fn compose_string(&self) -> String {
        self.value.clone()
    }
}

pub trait ExprVisitor {
    type ExprResult;

    fn visit_identifier_expr(&mut self, ident: &Identifier) -> Self::ExprResult;
    fn visit_integer_expr(&mut self, literal: &IntegerLiteral) -> Self::ExprResult;
    fn visit_prefix_expr(&mut self, operator: &str, right: &Expr) -> Self::ExprResult;
    fn visit_infix_expr(&mut self, left: &Expr, operator: &str, right: &Expr) -> Self::ExprResult;
}
