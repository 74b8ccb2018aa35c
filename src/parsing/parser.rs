use super::ast::*;
use super::expr::*;
use crate::diagnostic::*;
use crate::lexing::*;
use log::trace;
use std::mem;

type Result<T> = DiagnosticResult<T>;

pub struct Parser {
    lexer: Lexer,
    current: Token,
    peek: Token,
    errors: Vec<Diagnostic>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Parser {
            lexer,
            current,
            peek,
            errors: Vec::new(),
        }
    }

    /// Parses statements until end of input. Malformed statements are dropped and
    /// reported in the returned diagnostics, in source order.
    pub fn parse_program(mut self) -> (Program, Vec<Diagnostic>) {
        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            match self.statement() {
                Ok(stmt) => {
                    trace!(target: "parser", "Parsed statement {}", stmt.compose_string());
                    program.statements.push(stmt);
                }
                Err(diagnostic) => {
                    trace!(target: "parser", "Dropped statement at {}: {}", self.current, diagnostic);
                    self.errors.push(diagnostic);
                }
            }
            self.next_token();
        }

        (program, self.errors)
    }

    fn statement(&mut self) -> Result<Stmt> {
        match self.current.kind {
            TokenKind::Let => self.let_stmt(),
            TokenKind::Return => self.return_stmt(),
            _ => self.expression_stmt(),
        }
    }

    // The bound value is skipped rather than parsed.
    fn let_stmt(&mut self) -> Result<Stmt> {
        let let_keyword = self.current.clone();
        self.expect_peek(TokenKind::Identifier)?;
        let name = self.current.clone();
        self.expect_peek(TokenKind::Assign)?;

        self.skip_to_terminator();

        Ok(Stmt::let_stmt(let_keyword, name, None))
    }

    // The returned value is skipped rather than parsed.
    fn return_stmt(&mut self) -> Result<Stmt> {
        let return_keyword = self.current.clone();
        self.next_token();

        self.skip_to_terminator();

        Ok(Stmt::return_stmt(return_keyword, None))
    }

    fn expression_stmt(&mut self) -> Result<Stmt> {
        let first = self.current.clone();
        let expression = self.parse_precedence(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(Stmt::expression(first, expression))
    }

    fn skip_to_terminator(&mut self) {
        while !self.current_is(TokenKind::Semicolon) && !self.current_is(TokenKind::EOF) {
            self.next_token();
        }
    }

    fn parse_precedence(&mut self, prec: Precedence) -> Result<Expr> {
        let prefix = self
            .current
            .kind
            .prefix()
            .ok_or_else(|| Diagnostic::no_prefix_parse_fn(self.current.kind))?;

        let mut lhs = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && prec < self.peek_precedence() {
            let infix = match self.peek.kind.infix_entry() {
                Some((infix, _)) => infix,
                None => break,
            };
            self.next_token();
            lhs = infix(self, lhs)?;
        }

        Ok(lhs)
    }

    fn identifier(&mut self) -> Result<Expr> {
        Ok(Expr::identifier(self.current.clone()))
    }

    fn integer(&mut self) -> Result<Expr> {
        let token = self.current.clone();
        let value = token
            .literal
            .parse::<i64>()
            .map_err(|_| Diagnostic::invalid_integer(&token.literal))?;
        Ok(Expr::integer(token, value))
    }

    fn prefix(&mut self) -> Result<Expr> {
        let operator = self.current.clone();
        self.next_token();
        let right = self.parse_precedence(Precedence::Prefix)?;
        Ok(Expr::prefix(operator, right))
    }

    // Recursing at the operator's own precedence keeps equal-precedence chains left-associative.
    fn infix(&mut self, lhs: Expr) -> Result<Expr> {
        let operator = self.current.clone();
        let prec = self.current_precedence();
        self.next_token();
        let rhs = self.parse_precedence(prec)?;
        Ok(Expr::infix(lhs, operator, rhs))
    }

    fn expect_peek(&mut self, kind: TokenKind) -> Result<()> {
        if self.peek_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(Diagnostic::expected_token(kind, self.peek.kind))
        }
    }

    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = mem::replace(&mut self.peek, next);
    }

    fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    fn current_precedence(&self) -> Precedence {
        Precedence::for_kind(self.current.kind)
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::for_kind(self.peek.kind)
    }
}

// ParseTable

type PrefixFn = fn(&mut Parser) -> Result<Expr>;
type InfixFn = fn(&mut Parser, lhs: Expr) -> Result<Expr>;

impl TokenKind {
    fn prefix(&self) -> Option<PrefixFn> {
        match self {
            TokenKind::Identifier => Some(Parser::identifier),
            TokenKind::Int => Some(Parser::integer),
            TokenKind::Bang | TokenKind::Minus => Some(Parser::prefix),
            _ => None,
        }
    }

    fn infix_entry(&self) -> Option<(InfixFn, Precedence)> {
        match self {
            TokenKind::EqualEqual | TokenKind::BangEqual => {
                Some((Parser::infix, Precedence::Equals))
            }
            TokenKind::Less | TokenKind::Greater => Some((Parser::infix, Precedence::LessGreater)),
            TokenKind::Plus | TokenKind::Minus => Some((Parser::infix, Precedence::Sum)),
            TokenKind::Star | TokenKind::Slash => Some((Parser::infix, Precedence::Product)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    // Reserved for call expressions.
    Call,
}

impl Precedence {
    pub fn for_kind(kind: TokenKind) -> Precedence {
        kind.infix_entry()
            .map(|(_, prec)| prec)
            .unwrap_or(Precedence::Lowest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_ordering() {
        assert!(Precedence::Lowest < Precedence::Equals);
        assert!(Precedence::Equals < Precedence::LessGreater);
        assert!(Precedence::LessGreater < Precedence::Sum);
        assert!(Precedence::Sum < Precedence::Product);
        assert!(Precedence::Product < Precedence::Prefix);
        assert!(Precedence::Prefix < Precedence::Call);
    }

    #[test]
    fn precedence_for_kind() {
        assert_eq!(Precedence::for_kind(TokenKind::Star), Precedence::Product);
        assert_eq!(Precedence::for_kind(TokenKind::Less), Precedence::LessGreater);
        assert_eq!(Precedence::for_kind(TokenKind::BangEqual), Precedence::Equals);
        assert_eq!(Precedence::for_kind(TokenKind::Semicolon), Precedence::Lowest);
        assert_eq!(Precedence::for_kind(TokenKind::EOF), Precedence::Lowest);
    }

    #[test]
    fn prefix_table() {
        assert!(TokenKind::Identifier.prefix().is_some());
        assert!(TokenKind::Int.prefix().is_some());
        assert!(TokenKind::Bang.prefix().is_some());
        assert!(TokenKind::Minus.prefix().is_some());
        assert!(TokenKind::Plus.prefix().is_none());
        assert!(TokenKind::Illegal.prefix().is_none());
    }
}
