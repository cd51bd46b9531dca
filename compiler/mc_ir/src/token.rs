//! Token kinds and the owned token record.

use std::fmt;

/// Lexical category of a token.
///
/// Closed set covering the whole language: every input byte maps to
/// exactly one category, with [`TokenKind::Unknown`] as the fallback for
/// unrecognized bytes. `Unknown` is deliberately not a lexer error -- the
/// parser reports it when one reaches a grammar position.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TokenKind {
    /// End of input. The lexer keeps returning this once the buffer is
    /// exhausted.
    Eof,
    Ident,
    Number,

    // Keywords
    Int,
    Return,
    If,
    Else,
    While,
    For,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    /// `=`
    Assign,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,

    // Punctuation
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,

    /// Unrecognized byte.
    Unknown,
}

impl TokenKind {
    /// Stable display name, used by diagnostics and the token dump.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Number => "NUMBER",
            TokenKind::Int => "INT",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Eq => "EQ",
            TokenKind::Ne => "NEQ",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Le => "LEQ",
            TokenKind::Ge => "GEQ",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified, positioned unit of lexical text.
///
/// `text` is the exact lexeme: the identifier name, the numeral digits,
/// or the operator/punctuation characters. The EOF token has an empty
/// lexeme. `line` and `column` are 1-based and refer to the first byte
/// of the lexeme.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}
