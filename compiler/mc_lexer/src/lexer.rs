//! One-token-at-a-time scanner.

use std::fmt::Write;

use mc_ir::{Token, TokenKind};
use mc_lexer_core::whitespace_span;

use crate::keywords::keyword_kind;

/// Tokenizer state over a borrowed source buffer.
///
/// The buffer belongs to the caller and must outlive the lexer. Cloning
/// is cheap (a slice plus three counters) and yields an independent
/// cursor over the same buffer -- the snapshot mechanism the parser uses
/// for its second level of lookahead.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    src: &'a [u8],
    pos: usize,
    line: u32,
    col: u32,
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
fn is_ident_part(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Lexer {
            src,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    /// Consume one byte, updating the line/column counters.
    #[inline]
    fn bump(&mut self) {
        if self.src.get(self.pos) == Some(&b'\n') {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        self.pos += 1;
    }

    /// Skip leading whitespace via the vectorized span primitive and
    /// fold its line/column bookkeeping into the cursor.
    fn skip_whitespace(&mut self) {
        let span = whitespace_span(&self.src[self.pos..]);
        if span.advance == 0 {
            return;
        }
        self.pos += span.advance as usize;
        if span.newlines > 0 {
            self.line += span.newlines;
            self.col = span.tail_col;
        } else {
            self.col += span.tail_col;
        }
    }

    /// Pull the next token. Returns EOF at the end of input; repeated
    /// calls after that keep returning EOF at the same position.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let line = self.line;
        let col = self.col;

        let Some(b) = self.peek() else {
            return Token::new(TokenKind::Eof, "", line, col);
        };

        if is_ident_start(b) {
            return self.identifier_or_keyword(line, col);
        }
        if b.is_ascii_digit() {
            return self.number(line, col);
        }

        let start = self.pos;
        self.bump();
        let kind = match b {
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b',' => TokenKind::Comma,
            // Two-byte operators are recognized greedily before their
            // single-byte prefixes.
            b'=' => self.with_eq(TokenKind::Assign, TokenKind::Eq),
            b'<' => self.with_eq(TokenKind::Lt, TokenKind::Le),
            b'>' => self.with_eq(TokenKind::Gt, TokenKind::Ge),
            b'!' => {
                if self.peek() == Some(b'=') {
                    self.bump();
                    TokenKind::Ne
                } else {
                    TokenKind::Unknown
                }
            }
            _ => TokenKind::Unknown,
        };
        Token::new(kind, lexeme(&self.src[start..self.pos]), line, col)
    }

    /// `single` when the next byte is not `=`, otherwise consume it and
    /// produce `combined`.
    #[inline]
    fn with_eq(&mut self, single: TokenKind, combined: TokenKind) -> TokenKind {
        if self.peek() == Some(b'=') {
            self.bump();
            combined
        } else {
            single
        }
    }

    fn identifier_or_keyword(&mut self, line: u32, col: u32) -> Token {
        let start = self.pos;
        self.bump();
        while self.peek().is_some_and(is_ident_part) {
            self.bump();
        }
        let text = lexeme(&self.src[start..self.pos]);
        let kind = keyword_kind(&text).unwrap_or(TokenKind::Ident);
        Token::new(kind, text, line, col)
    }

    fn number(&mut self, line: u32, col: u32) -> Token {
        let start = self.pos;
        self.bump();
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.bump();
        }
        Token::new(
            TokenKind::Number,
            lexeme(&self.src[start..self.pos]),
            line,
            col,
        )
    }
}

/// Owned lexeme text. Identifier, number, and operator runs are ASCII by
/// classification; arbitrary unknown bytes are replaced rather than
/// panicking.
fn lexeme(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Feed a buffer through the tokenizer alone and render one line per
/// token -- `KIND:text (line,column)` -- terminating after the EOF token.
pub fn dump_tokens(source: &[u8]) -> String {
    let mut lexer = Lexer::new(source);
    let mut out = String::new();
    loop {
        let tok = lexer.next_token();
        let _ = writeln!(
            out,
            "{}:{} ({},{})",
            tok.kind.display_name(),
            tok.text,
            tok.line,
            tok.column
        );
        if tok.kind == TokenKind::Eof {
            return out;
        }
    }
}
