//! Expression productions, precedence-climbing.
//!
//! Binding, loosest to tightest: assignment (right-assoc) < equality <
//! relational < term < factor < primary. There are no unary operators;
//! a leading `-` never parses as negation.

use mc_ir::{BinOp, Expr, TokenKind};

use crate::error::ParseError;
use crate::parser::Parser;

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment()
    }

    /// Right-associative `=`. Only a lone identifier is a legal target;
    /// anything else is rejected before the node is built, never
    /// silently reinterpreted.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let lhs = self.parse_equality()?;
        if !self.check(TokenKind::Assign) {
            return Ok(lhs);
        }
        let eq = self.advance();
        let Expr::Ident(name) = lhs else {
            return Err(self.make_invalid_target_error(eq.line, eq.column));
        };
        let value = Box::new(self.parse_assignment()?);
        Ok(Expr::Assign { name, value })
    }

    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_relational()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Eq => BinOp::Eq,
                TokenKind::Ne => BinOp::Ne,
                _ => return Ok(node),
            };
            self.advance();
            let rhs = self.parse_relational()?;
            node = binary(op, node, rhs);
        }
    }

    fn parse_relational(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_term()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Lt => BinOp::Lt,
                TokenKind::Gt => BinOp::Gt,
                TokenKind::Le => BinOp::Le,
                TokenKind::Ge => BinOp::Ge,
                _ => return Ok(node),
            };
            self.advance();
            let rhs = self.parse_term()?;
            node = binary(op, node, rhs);
        }
    }

    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_factor()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => return Ok(node),
            };
            self.advance();
            let rhs = self.parse_factor()?;
            node = binary(op, node, rhs);
        }
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.parse_primary()?;
        loop {
            let op = match self.current.kind {
                TokenKind::Star => BinOp::Mul,
                TokenKind::Slash => BinOp::Div,
                _ => return Ok(node),
            };
            self.advance();
            let rhs = self.parse_primary()?;
            node = binary(op, node, rhs);
        }
    }

    /// Number literal, identifier, or parenthesized expression.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.current.kind {
            TokenKind::Number => {
                let tok = self.advance();
                let value = tok
                    .text
                    .parse::<i64>()
                    .map_err(|_| self.make_literal_error(&tok))?;
                Ok(Expr::Int(value))
            }
            TokenKind::Ident => Ok(Expr::Ident(self.advance().text)),
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            _ => Err(self.make_expression_error()),
        }
    }
}

#[inline]
fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}
