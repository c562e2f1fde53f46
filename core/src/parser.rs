//! Tokens to [`ast`](crate::ast) — a recursive-descent parser over the
//! grammar's precedence chain: `assignment → equality → comparison →
//! term → factor → unary → primary`.
//!
//! Parsing stops at the first error rather than attempting recovery and
//! reporting several; the language has no need for a "collect every
//! error in one pass" editor-facing mode.

use core::fmt;

use crate::ast::{BinaryOp, Expr, Stmt, UnaryOp};
use crate::diagnostics::{Diagnostic, ToDiagnostic};
use crate::lexer::{Token, TokenKind};
use crate::{format, Box, String, Vec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: u32,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

impl ToDiagnostic for ParseError {
    fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.message.clone(), self.line)
    }
}

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, current: 0 }
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn peek_kind(&self) -> &TokenKind {
        &self.peek().kind
    }

    fn line(&self) -> u32 {
        self.peek().line
    }

    fn is_eof(&self) -> bool {
        matches!(self.peek_kind(), TokenKind::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens[self.current].clone();
        if !self.is_eof() {
            self.current += 1;
        }
        tok
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn matches(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError {
                message: format!("expected {}", what),
                line: self.line(),
            })
        }
    }

    /// Consume a trailing `;` if one is present. Every statement form's
    /// terminator is optional per the grammar (`";"?`), so this never
    /// errors when the semicolon is missing — it's just a no-op.
    fn consume_optional_semicolon(&mut self) {
        self.matches(&TokenKind::Semicolon);
    }

    fn expect_ident(&mut self) -> Result<(Box<str>, u32), ParseError> {
        let line = self.line();
        match self.peek_kind().clone() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok((name, line))
            }
            _ => Err(ParseError {
                message: "expected identifier".into(),
                line,
            }),
        }
    }

    /// Parse a whole program: a sequence of statements up to `Eof`.
    pub fn parse_program(mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut stmts = Vec::new();
        while !self.is_eof() {
            stmts.push(self.statement()?);
        }
        Ok(stmts)
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        match self.peek_kind() {
            TokenKind::Let => self.let_statement(),
            TokenKind::Print => self.print_statement(),
            TokenKind::If => self.if_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::LBrace => self.block_statement(),
            _ => self.expr_statement(),
        }
    }

    fn let_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // `let`
        let (name, line) = self.expect_ident()?;
        self.expect(&TokenKind::Equal, "'=' after variable name")?;
        let value = self.expression()?;
        self.consume_optional_semicolon();
        Ok(Stmt::Let { name, line, value })
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // `print`
        let value = self.expression()?;
        self.consume_optional_semicolon();
        Ok(Stmt::Print(value))
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // `if`
        self.expect(&TokenKind::LParen, "'(' after 'if'")?;
        let cond = self.expression()?;
        self.expect(&TokenKind::RParen, "')' after if condition")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::If { cond, body })
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // `while`
        self.expect(&TokenKind::LParen, "'(' after 'while'")?;
        let cond = self.expression()?;
        self.expect(&TokenKind::RParen, "')' after while condition")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While { cond, body })
    }

    fn block_statement(&mut self) -> Result<Stmt, ParseError> {
        self.advance(); // `{`
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_eof() {
            stmts.push(self.statement()?);
        }
        self.expect(&TokenKind::RBrace, "'}' after block")?;
        Ok(Stmt::Block(stmts))
    }

    /// An expression, optionally terminated by `;`. Assignment
    /// (`IDENT "=" expression`) falls out of this naturally since it's
    /// just another expression form, compiling identically either way.
    fn expr_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.consume_optional_semicolon();
        Ok(Stmt::Expr(expr))
    }

    fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.equality()?;
        if self.matches(&TokenKind::Equal) {
            let line = self.line();
            let value = self.assignment()?;
            return match expr {
                Expr::Identifier { name, .. } => Ok(Expr::Assign {
                    name,
                    line,
                    value: Box::new(value),
                }),
                _ => Err(ParseError {
                    message: "invalid assignment target".into(),
                    line,
                }),
            };
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.comparison()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::EqualEqual => BinaryOp::Equal,
                TokenKind::BangEqual => BinaryOp::NotEqual,
                _ => break,
            };
            self.advance();
            let right = self.comparison()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Less => BinaryOp::Less,
                TokenKind::LessEqual => BinaryOp::LessEqual,
                TokenKind::Greater => BinaryOp::Greater,
                TokenKind::GreaterEqual => BinaryOp::GreaterEqual,
                _ => break,
            };
            self.advance();
            let right = self.term()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.factor()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;
        loop {
            let op = match self.peek_kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => break,
            };
            self.advance();
            let right = self.unary()?;
            expr = Expr::Binary {
                op,
                left: Box::new(expr),
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.peek_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Bang => Some(UnaryOp::Not),
            _ => None,
        };
        if let Some(op) = op {
            self.advance();
            let expr = self.unary()?;
            return Ok(Expr::Unary {
                op,
                expr: Box::new(expr),
            });
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let line = self.line();
        match self.peek_kind().clone() {
            TokenKind::Int(n) => {
                self.advance();
                Ok(Expr::Int(n))
            }
            TokenKind::Ident(name) => {
                self.advance();
                Ok(Expr::Identifier { name, line })
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.expression()?;
                self.expect(&TokenKind::RParen, "')' after expression")?;
                Ok(Expr::Grouping(Box::new(inner)))
            }
            other => Err(ParseError {
                message: format!("unexpected token {:?}", other),
                line,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parse(source: &str) -> Vec<Stmt> {
        let tokens = Lexer::new(source).scan().unwrap();
        Parser::new(tokens).parse_program().unwrap()
    }

    #[test]
    fn parses_arithmetic_precedence() {
        let stmts = parse("print 1 + 2 * 3;");
        assert_eq!(
            stmts,
            crate::vec![Stmt::Print(Expr::Binary {
                op: BinaryOp::Add,
                left: Box::new(Expr::Int(1)),
                right: Box::new(Expr::Binary {
                    op: BinaryOp::Mul,
                    left: Box::new(Expr::Int(2)),
                    right: Box::new(Expr::Int(3)),
                }),
            })]
        );
    }

    #[test]
    fn parses_let_and_reassignment() {
        let stmts = parse("let x = 10; x = x - 3;");
        assert_eq!(
            stmts,
            crate::vec![
                Stmt::Let {
                    name: "x".into(),
                    line: 1,
                    value: Expr::Int(10),
                },
                Stmt::Expr(Expr::Assign {
                    name: "x".into(),
                    line: 1,
                    value: Box::new(Expr::Binary {
                        op: BinaryOp::Sub,
                        left: Box::new(Expr::Identifier {
                            name: "x".into(),
                            line: 1
                        }),
                        right: Box::new(Expr::Int(3)),
                    }),
                }),
            ]
        );
    }

    #[test]
    fn parses_if_and_while_with_block_bodies() {
        let stmts = parse("while (x) { print x; }");
        match &stmts[0] {
            Stmt::While { body, .. } => {
                assert!(matches!(**body, Stmt::Block(ref b) if b.len() == 1));
            }
            other => panic!("expected while, got {:?}", other),
        }
    }

    #[test]
    fn unary_not_and_negation() {
        let stmts = parse("print !(1 == 2);");
        assert!(matches!(
            stmts[0],
            Stmt::Print(Expr::Unary {
                op: UnaryOp::Not,
                ..
            })
        ));
    }

    #[test]
    fn trailing_semicolon_is_optional_on_every_statement_form() {
        let stmts = parse("let x = 1\nprint x\nx = 2");
        assert_eq!(
            stmts,
            crate::vec![
                Stmt::Let {
                    name: "x".into(),
                    line: 1,
                    value: Expr::Int(1),
                },
                Stmt::Print(Expr::Identifier {
                    name: "x".into(),
                    line: 2,
                }),
                Stmt::Expr(Expr::Assign {
                    name: "x".into(),
                    line: 3,
                    value: Box::new(Expr::Int(2)),
                }),
            ]
        );
    }

    #[test]
    fn missing_closing_paren_is_still_an_error() {
        let tokens = Lexer::new("print (1").scan().unwrap();
        let err = Parser::new(tokens).parse_program().unwrap_err();
        assert_eq!(err.line, 1);
    }

    #[test]
    fn invalid_assignment_target_is_an_error() {
        let tokens = Lexer::new("1 = 2;").scan().unwrap();
        let err = Parser::new(tokens).parse_program().unwrap_err();
        assert_eq!(err.message, "invalid assignment target");
    }
}
