//! Grammar productions, one module per level: top-level items,
//! statements, expressions.

mod expr;
mod item;
mod stmt;
