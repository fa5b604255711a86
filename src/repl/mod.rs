//! Console shell around the interpreter.
//!
//! - **[`session`]**: prompts for bindings, reads expressions, prints results
//! - **[`cache`]**: parsed trees keyed by source text
//! - **[`theme`]**: colours for result, error and prompt lines
//! - **[`constants`]**: prompts, usage text, cache capacity
//!
//! Everything the shell does goes through [`crate::parse`] and
//! [`crate::Bindings::evaluate`]; it adds no evaluation logic of its own.

pub mod cache;
pub mod constants;
pub mod session;
pub mod theme;

pub use session::{Command, Session, SessionError, SessionOptions};
