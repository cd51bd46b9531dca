//! Recursive descent parser for the mc language.
//!
//! Consumes the tokenizer one token at a time with a single token of
//! lookahead, plus a cloned-lexer probe for the two-token function-start
//! check at the top level. The first grammar violation aborts the whole
//! parse with a structured [`ParseError`] -- there is no recovery or
//! resynchronization, and no partial AST ever escapes.

mod error;
mod grammar;
mod parser;


pub use error::ParseError;
pub use parser::{parse_source, Parser};
