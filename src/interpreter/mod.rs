//! Expression evaluation
//!
//! This module provides the core execution logic:
//! - [`engine`]: [`engine::Bindings`], the tree-walking [`engine::Interpreter`]
//!   and the [`engine::evaluate`] entry point
//! - [`builtins`]: dispatch of the six built-in functions
//! - [`ops`]: branch-free 32-bit arithmetic primitives
//! - [`errors`]: Runtime error types
//!
//! # Execution Model
//!
//! The interpreter walks the tree depth-first, left operand before right and
//! arguments in order. It never mutates the tree and keeps no state between
//! calls, so one parsed expression can be evaluated under many bindings.

pub mod builtins;
pub mod engine;
pub mod errors;
pub mod ops;
