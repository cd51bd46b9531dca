//! Parser state and token-stream navigation.

use mc_diagnostic::ErrorCode;
use mc_ir::{Program, Token, TokenKind};
use mc_lexer::Lexer;
use tracing::trace;

use crate::error::ParseError;

/// Compile source text to an AST.
///
/// The buffer is the entire source; ownership of the returned tree
/// transfers to the caller. On the first grammar violation the whole
/// parse fails with no partial result.
pub fn parse_source(source: &[u8]) -> Result<Program, ParseError> {
    Parser::new(source).parse_program()
}

/// Parser state: the underlying lexer plus exactly one lookahead token.
pub struct Parser<'a> {
    pub(crate) lexer: Lexer<'a>,
    pub(crate) current: Token,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Parser { lexer, current }
    }

    /// Consume the lookahead token and pull the next one, returning the
    /// consumed token with its ownership (the lexeme moves into the AST
    /// where needed).
    #[inline]
    pub(crate) fn advance(&mut self) -> Token {
        let token = std::mem::replace(&mut self.current, self.lexer.next_token());
        trace!(
            kind = %token.kind,
            line = token.line,
            column = token.column,
            "advance"
        );
        token
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consume the lookahead if it matches `kind`.
    #[inline]
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect the lookahead to be `kind`, consume and return it.
    ///
    /// Inline happy path with a `#[cold]` error constructor, so the
    /// `format!` allocation stays out of the fast case.
    #[inline]
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    /// Expect and consume an identifier, returning its name.
    #[inline]
    pub(crate) fn expect_ident(&mut self) -> Result<String, ParseError> {
        if self.check(TokenKind::Ident) {
            Ok(self.advance().text)
        } else {
            Err(self.make_expect_ident_error())
        }
    }

    // ─── Error constructors ────────────────────────────────────
    //
    // Cold and never inlined: each one allocates a message.

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: TokenKind) -> ParseError {
        if self.check(TokenKind::Eof) {
            ParseError::new(
                ErrorCode::E1003,
                format!("unexpected end of input, expected {}", kind.display_name()),
                self.current.line,
                self.current.column,
            )
        } else {
            ParseError::new(
                ErrorCode::E1001,
                format!(
                    "expected {}, found {}",
                    kind.display_name(),
                    self.current.kind.display_name()
                ),
                self.current.line,
                self.current.column,
            )
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_ident_error(&self) -> ParseError {
        ParseError::new(
            ErrorCode::E1004,
            format!(
                "expected identifier, found {}",
                self.current.kind.display_name()
            ),
            self.current.line,
            self.current.column,
        )
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn make_expression_error(&self) -> ParseError {
        ParseError::new(
            ErrorCode::E1002,
            format!(
                "expected expression, found {}",
                self.current.kind.display_name()
            ),
            self.current.line,
            self.current.column,
        )
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn make_item_error(&self) -> ParseError {
        ParseError::new(
            ErrorCode::E1006,
            format!(
                "expected INT at top level, found {}",
                self.current.kind.display_name()
            ),
            self.current.line,
            self.current.column,
        )
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn make_invalid_target_error(&self, line: u32, column: u32) -> ParseError {
        ParseError::new(
            ErrorCode::E1005,
            "invalid assignment target, expected identifier",
            line,
            column,
        )
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn make_literal_error(&self, token: &Token) -> ParseError {
        ParseError::new(
            ErrorCode::E1007,
            format!("integer literal {} out of range", token.text),
            token.line,
            token.column,
        )
    }
}
