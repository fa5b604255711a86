//! # Introduction
//!
//! mpcalc parses integer expressions over four variables and evaluates them
//! with arithmetic built from bit operations instead of the CPU's native
//! subtract, multiply, divide and compare. Results match native 32-bit
//! wrapping arithmetic bit for bit, overflow included.
//!
//! ## Execution pipeline
//!
//! ```text
//! Text → Lexer → Parser → AST → Interpreter (ops primitives) → i32
//! ```
//!
//! 1. [`parser`]: tokenises the text and builds an [`Expr`] tree.
//! 2. [`interpreter`]: walks the tree against [`Bindings`] for `a`..`d`,
//!    using the branch-free primitives in [`interpreter::ops`].
//! 3. [`repl`]: the console shell used by the binary; not needed to embed
//!    the interpreter.
//!
//! ## Example
//!
//! ```
//! let expr = mpcalc::parse("max(a * b, c + 5)").unwrap();
//! assert_eq!(mpcalc::evaluate(&expr, 2, 3, 1, 0), Ok(6));
//! assert_eq!(mpcalc::evaluate(&expr, 4, 3, 1, 0), Ok(12));
//! ```
//!
//! ## Language
//!
//! Variables: `a`, `b`, `c`, `d`. Operators: `+ - * /`.
//! Built-ins: `max(x, y)`, `min(x, y)`, `equal(x, y)`, `greater_than(x, y)`,
//! `ifelse(cond, x, y)`, `absolute(x)`.

pub mod interpreter;
pub mod parser;
pub mod repl;

pub use interpreter::engine::{evaluate, Bindings};
pub use interpreter::errors::RuntimeError;
pub use parser::ast::{BinOp, Builtin, Expr, SourceLocation};
pub use parser::lexer::LexError;
pub use parser::parse::{parse, ParseError};

/// Any failure between expression text and a result
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Parse and evaluate `source` in one step.
pub fn eval_str(source: &str, bindings: Bindings) -> Result<i32, Error> {
    let expr = parse(source)?;
    Ok(bindings.evaluate(&expr)?)
}
