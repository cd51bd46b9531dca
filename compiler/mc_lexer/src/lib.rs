//! Scalar tokenizer for the mc compiler.
//!
//! Pulls one [`mc_ir::Token`] at a time from an in-memory byte buffer.
//! Whitespace skipping goes through the vectorized span primitive in
//! `mc_lexer_core`; everything else is a byte-at-a-time classifier with
//! greedy two-byte operator recognition. There is no pushback: callers
//! needing more lookahead clone the lexer, which snapshots its position.

mod keywords;
mod lexer;

pub use lexer::{dump_tokens, Lexer};
