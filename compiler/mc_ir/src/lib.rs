//! Shared data model for the mc compiler front end.
//!
//! Defines the token vocabulary produced by the lexer and the AST
//! produced by the parser, together with the indentation-nested debug
//! dump. Nothing here performs I/O or allocation beyond the owned
//! lexeme/name strings; destruction of a tree is plain ownership drop.

mod ast;
mod token;

pub use ast::{BinOp, Expr, Function, Program, Stmt};
pub use token::{Token, TokenKind};
