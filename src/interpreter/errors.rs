//! Runtime error types for the expression evaluator
//!
//! This module defines [`RuntimeError`], which represents all errors that can occur
//! while evaluating a tree (as opposed to parse errors).
//!
//! A runtime error aborts the current evaluation only. The tree is never
//! modified, so it can be evaluated again with different bindings.

use crate::parser::ast::{Builtin, SourceLocation};
use thiserror::Error;

/// Runtime errors that can occur during evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Right operand of `/` evaluated to zero
    #[error("division by zero at {location}")]
    DivideByZero { location: SourceLocation },

    /// Variable outside `a`, `b`, `c`, `d`; only reachable for hand-built trees
    #[error("unknown variable '{name}' at {location}")]
    UnknownVariable {
        name: char,
        location: SourceLocation,
    },

    /// Call with the wrong number of arguments; only reachable for hand-built trees
    #[error("function '{function}' expects {expected} arguments, but got {got} ({location})")]
    Arity {
        function: Builtin,
        expected: usize,
        got: usize,
        location: SourceLocation,
    },
}

impl RuntimeError {
    pub fn location(&self) -> SourceLocation {
        match self {
            RuntimeError::DivideByZero { location }
            | RuntimeError::UnknownVariable { location, .. }
            | RuntimeError::Arity { location, .. } => *location,
        }
    }
}
