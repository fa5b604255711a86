//! Expression parser
//!
//! This module transforms expression text into an [`ast::Expr`] tree:
//! - [`lexer`]: Tokenization (text → tokens)
//! - [`parse`]: Parser state, errors and the [`parse::parse`] entry point
//! - [`expressions`]: the grammar itself
//! - [`ast`]: AST node definitions
//!
//! # Grammar
//!
//! Integer literals, the variables `a` `b` `c` `d`, the operators `+ - * /`
//! with the usual precedence, parentheses, and calls to the six built-ins
//! `max`, `min`, `equal`, `greater_than`, `ifelse`, `absolute`.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent, one method per precedence tier.
//! No external parser generator dependencies.

pub mod ast;
pub mod expressions;
pub mod lexer;
pub mod parse;
