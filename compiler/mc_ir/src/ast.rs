//! AST node types and the indentation-nested debug dump.
//!
//! Ordered sequences (the top-level function list, statement lists) are
//! owned `Vec`s; every child edge is exclusive ownership, so the tree is
//! acyclic by construction and a single drop releases everything exactly
//! once. Assignment targets are stored as the identifier name itself,
//! making non-identifier lvalues unrepresentable.

use std::fmt::{self, Write};

use crate::token::TokenKind;

/// A parsed translation unit: the top-level function items in source order.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Program {
    pub functions: Vec<Function>,
}

/// A top-level function item. Parameter lists are always empty in this
/// language, so only the name and body are recorded.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Function {
    pub name: String,
    pub body: Vec<Stmt>,
}

/// Statement forms.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Stmt {
    /// `int NAME;` or `int NAME = EXPR;`
    VarDecl { name: String, init: Option<Expr> },
    /// `return EXPR;`
    Return(Expr),
    /// `if (COND) STMT [else STMT]` -- each branch is a single statement,
    /// possibly a [`Stmt::Block`].
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    /// `while (COND) STMT`
    While { cond: Expr, body: Box<Stmt> },
    /// `for ([INIT]; [COND]; [POST]) STMT` -- any clause may be absent.
    For {
        init: Option<Box<Stmt>>,
        cond: Option<Expr>,
        post: Option<Expr>,
        body: Box<Stmt>,
    },
    /// Expression evaluated for effect: `EXPR;`
    Expr(Expr),
    /// Brace-delimited statement list.
    Block(Vec<Stmt>),
}

/// Expression forms.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Expr {
    Int(i64),
    Ident(String),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// `NAME = EXPR`, right-associative. The target is an identifier by
    /// construction; the parser rejects any other left-hand side.
    Assign { name: String, value: Box<Expr> },
}

/// Arithmetic, relational, and equality operators.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl BinOp {
    /// Map an operator token to its AST tag. Returns `None` for
    /// non-operator tokens (and for `=`, which builds [`Expr::Assign`]).
    pub fn from_token(kind: TokenKind) -> Option<BinOp> {
        match kind {
            TokenKind::Plus => Some(BinOp::Add),
            TokenKind::Minus => Some(BinOp::Sub),
            TokenKind::Star => Some(BinOp::Mul),
            TokenKind::Slash => Some(BinOp::Div),
            TokenKind::Eq => Some(BinOp::Eq),
            TokenKind::Ne => Some(BinOp::Ne),
            TokenKind::Lt => Some(BinOp::Lt),
            TokenKind::Gt => Some(BinOp::Gt),
            TokenKind::Le => Some(BinOp::Le),
            TokenKind::Ge => Some(BinOp::Ge),
            _ => None,
        }
    }

    /// Display name matching the token vocabulary, used in the AST dump.
    pub fn display_name(self) -> &'static str {
        match self {
            BinOp::Add => "PLUS",
            BinOp::Sub => "MINUS",
            BinOp::Mul => "STAR",
            BinOp::Div => "SLASH",
            BinOp::Eq => "EQ",
            BinOp::Ne => "NEQ",
            BinOp::Lt => "LT",
            BinOp::Gt => "GT",
            BinOp::Le => "LEQ",
            BinOp::Ge => "GEQ",
        }
    }
}

impl Program {
    /// Render the tree as an indentation-nested dump, one node per line.
    ///
    /// Multi-branch constructs carry explicit section labels (`COND`,
    /// `THEN`, `ELSE`, `INIT`, `POST`, `BODY`) so sibling subtrees stay
    /// unambiguous. Purely a debugging aid.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for func in &self.functions {
            write_function(&mut out, func, 0);
        }
        out
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn indent(out: &mut String, n: usize) {
    for _ in 0..n {
        out.push(' ');
    }
}

fn line(out: &mut String, depth: usize, text: fmt::Arguments<'_>) {
    indent(out, depth);
    let _ = writeln!(out, "{text}");
}

fn write_function(out: &mut String, func: &Function, depth: usize) {
    line(out, depth, format_args!("FUNC:{}", func.name));
    for stmt in &func.body {
        write_stmt(out, stmt, depth + 2);
    }
}

fn write_stmt(out: &mut String, stmt: &Stmt, depth: usize) {
    match stmt {
        Stmt::VarDecl { name, init } => {
            line(out, depth, format_args!("VAR:{name}"));
            if let Some(init) = init {
                line(out, depth + 2, format_args!("INIT"));
                write_expr(out, init, depth + 4);
            }
        }
        Stmt::Return(expr) => {
            line(out, depth, format_args!("RETURN"));
            write_expr(out, expr, depth + 2);
        }
        Stmt::If {
            cond,
            then_branch,
            else_branch,
        } => {
            line(out, depth, format_args!("IF"));
            line(out, depth + 2, format_args!("COND"));
            write_expr(out, cond, depth + 4);
            line(out, depth + 2, format_args!("THEN"));
            write_stmt(out, then_branch, depth + 4);
            if let Some(else_branch) = else_branch {
                line(out, depth + 2, format_args!("ELSE"));
                write_stmt(out, else_branch, depth + 4);
            }
        }
        Stmt::While { cond, body } => {
            line(out, depth, format_args!("WHILE"));
            line(out, depth + 2, format_args!("COND"));
            write_expr(out, cond, depth + 4);
            line(out, depth + 2, format_args!("BODY"));
            write_stmt(out, body, depth + 4);
        }
        Stmt::For {
            init,
            cond,
            post,
            body,
        } => {
            line(out, depth, format_args!("FOR"));
            if let Some(init) = init {
                line(out, depth + 2, format_args!("INIT"));
                write_stmt(out, init, depth + 4);
            }
            if let Some(cond) = cond {
                line(out, depth + 2, format_args!("COND"));
                write_expr(out, cond, depth + 4);
            }
            if let Some(post) = post {
                line(out, depth + 2, format_args!("POST"));
                write_expr(out, post, depth + 4);
            }
            line(out, depth + 2, format_args!("BODY"));
            write_stmt(out, body, depth + 4);
        }
        Stmt::Expr(expr) => {
            line(out, depth, format_args!("EXPR"));
            write_expr(out, expr, depth + 2);
        }
        // A block is a plain statement list: its children print at the
        // current depth with no header of their own.
        Stmt::Block(stmts) => {
            for stmt in stmts {
                write_stmt(out, stmt, depth);
            }
        }
    }
}

fn write_expr(out: &mut String, expr: &Expr, depth: usize) {
    match expr {
        Expr::Int(value) => line(out, depth, format_args!("NUMBER:{value}")),
        Expr::Ident(name) => line(out, depth, format_args!("IDENT:{name}")),
        Expr::Binary { op, lhs, rhs } => {
            line(out, depth, format_args!("BIN:{}", op.display_name()));
            write_expr(out, lhs, depth + 2);
            write_expr(out, rhs, depth + 2);
        }
        Expr::Assign { name, value } => {
            line(out, depth, format_args!("ASSIGN"));
            line(out, depth + 2, format_args!("IDENT:{name}"));
            write_expr(out, value, depth + 2);
        }
    }
}
