//! Top-level items: function definitions and skipped declarations.

use mc_ir::{Function, Program, TokenKind};
use tracing::trace;

use crate::error::ParseError;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parse the whole translation unit: a sequence of items until EOF.
    pub(crate) fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut functions = Vec::new();
        while !self.check(TokenKind::Eof) {
            if !self.check(TokenKind::Int) {
                return Err(self.make_item_error());
            }
            if self.looks_like_function() {
                functions.push(self.parse_function()?);
            } else {
                self.skip_declaration()?;
            }
        }
        Ok(Program { functions })
    }

    /// Two-token lookahead past the current `int`: a function item
    /// continues with `IDENT (`. Pulls from a clone of the lexer so the
    /// primary stream stays untouched.
    fn looks_like_function(&self) -> bool {
        let mut probe = self.lexer.clone();
        if probe.next_token().kind != TokenKind::Ident {
            return false;
        }
        probe.next_token().kind == TokenKind::LParen
    }

    /// `int NAME ( ) BLOCK` -- parameter lists are always empty.
    fn parse_function(&mut self) -> Result<Function, ParseError> {
        self.expect(TokenKind::Int)?;
        let name = self.expect_ident()?;
        self.expect(TokenKind::LParen)?;
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;
        trace!(name = %name, statements = body.len(), "parsed function");
        Ok(Function { name, body })
    }

    /// Skip a non-function top-level declaration up to its terminating
    /// `;`, tracking brace depth so semicolons inside nested `{ }` do
    /// not end the skip early.
    fn skip_declaration(&mut self) -> Result<(), ParseError> {
        let mut depth = 0usize;
        loop {
            match self.current.kind {
                // Running out of input mid-skip is the standard
                // unexpected-EOF failure.
                TokenKind::Eof => return self.expect(TokenKind::Semicolon).map(|_| ()),
                TokenKind::LBrace => {
                    depth += 1;
                    self.advance();
                }
                TokenKind::RBrace => {
                    depth = depth.saturating_sub(1);
                    self.advance();
                }
                TokenKind::Semicolon if depth == 0 => {
                    self.advance();
                    return Ok(());
                }
                _ => {
                    self.advance();
                }
            }
        }
    }
}
