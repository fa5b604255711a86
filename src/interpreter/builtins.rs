//! Built-in function dispatch
//!
//! The engine checks arity before dispatch, so the argument slice is indexed
//! directly. `equal` and `greater_than` produce 1 or 0. At the language level
//! `ifelse(cond, x, y)` takes its condition first; any nonzero condition is true.

use crate::interpreter::engine::Interpreter;
use crate::interpreter::ops;
use crate::parser::ast::{Builtin, SourceLocation};
use tracing::trace;

impl Interpreter {
    pub(crate) fn call_builtin(&self, func: Builtin, args: &[i32], location: SourceLocation) -> i32 {
        trace!(%func, ?args, column = location.column, "calling builtin");

        match func {
            Builtin::Max => ops::max(args[0], args[1]),
            Builtin::Min => ops::min(args[0], args[1]),
            Builtin::Equal => ops::equal(args[0], args[1]) as i32,
            Builtin::GreaterThan => ops::greater_than(args[0], args[1]) as i32,
            Builtin::IfElse => ops::ifelse(args[1], args[2], args[0]),
            Builtin::Absolute => ops::absolute(args[0]),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::engine::{evaluate, Bindings};
    use crate::parser::parse::parse;

    fn eval(src: &str, bindings: Bindings) -> i32 {
        bindings.evaluate(&parse(src).unwrap()).unwrap()
    }

    #[test]
    fn test_each_builtin() {
        let bindings = Bindings::new(3, 8, -4, 0);
        assert_eq!(eval("max(a, b)", bindings), 8);
        assert_eq!(eval("min(a, c)", bindings), -4);
        assert_eq!(eval("equal(a, 3)", bindings), 1);
        assert_eq!(eval("equal(a, b)", bindings), 0);
        assert_eq!(eval("greater_than(b, a)", bindings), 1);
        assert_eq!(eval("greater_than(a, a)", bindings), 0);
        assert_eq!(eval("absolute(c)", bindings), 4);
        assert_eq!(eval("ifelse(d, a, b)", bindings), 8);
        assert_eq!(eval("ifelse(c, a, b)", bindings), 3);
    }

    #[test]
    fn test_ifelse_condition_first() {
        let expr = parse("ifelse(equal(a,b), c, d)").unwrap();
        assert_eq!(evaluate(&expr, 3, 3, 10, 20), Ok(10));
        assert_eq!(evaluate(&expr, 3, 4, 10, 20), Ok(20));
    }

    #[test]
    fn test_nested_calls() {
        let expr = parse("max(absolute(a), min(b, c)) * 2").unwrap();
        assert_eq!(evaluate(&expr, -9, 4, 5, 0), Ok(18));
        assert_eq!(evaluate(&expr, 1, 4, 5, 0), Ok(8));
    }
}
