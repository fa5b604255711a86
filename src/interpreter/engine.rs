// Evaluation engine for the expression interpreter

use crate::interpreter::errors::RuntimeError;
use crate::interpreter::ops;
use crate::parser::ast::{BinOp, Expr, SourceLocation};
use tracing::debug;

/// Values bound to the four variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bindings {
    pub a: i32,
    pub b: i32,
    pub c: i32,
    pub d: i32,
}

impl Bindings {
    pub fn new(a: i32, b: i32, c: i32, d: i32) -> Self {
        Self { a, b, c, d }
    }

    /// Value bound to `name`, if it is one of `a`, `b`, `c`, `d`.
    pub fn get(&self, name: char) -> Option<i32> {
        match name {
            'a' => Some(self.a),
            'b' => Some(self.b),
            'c' => Some(self.c),
            'd' => Some(self.d),
            _ => None,
        }
    }

    /// Mutable slot for `name`, if it is one of `a`, `b`, `c`, `d`.
    pub fn slot_mut(&mut self, name: char) -> Option<&mut i32> {
        match name {
            'a' => Some(&mut self.a),
            'b' => Some(&mut self.b),
            'c' => Some(&mut self.c),
            'd' => Some(&mut self.d),
            _ => None,
        }
    }

    /// Evaluate `expr` against these bindings
    pub fn evaluate(&self, expr: &Expr) -> Result<i32, RuntimeError> {
        let interpreter = Interpreter::new(*self);
        let result = interpreter.evaluate_expr(expr);
        debug!(bindings = ?self, ?result, "evaluated expression");
        result
    }
}

/// Tree-walking evaluator
///
/// Holds nothing but the bindings; evaluating never touches the tree, so one
/// tree can be evaluated any number of times.
pub struct Interpreter {
    pub(crate) bindings: Bindings,
}

impl Interpreter {
    pub fn new(bindings: Bindings) -> Self {
        Interpreter { bindings }
    }

    /// Evaluate an expression; children are evaluated left to right
    pub fn evaluate_expr(&self, expr: &Expr) -> Result<i32, RuntimeError> {
        match expr {
            Expr::Variable { name, location } => {
                self.bindings
                    .get(*name)
                    .ok_or(RuntimeError::UnknownVariable {
                        name: *name,
                        location: *location,
                    })
            }

            Expr::Constant { value, .. } => Ok(*value),

            Expr::BinaryOp {
                op,
                left,
                right,
                location,
            } => {
                let left_val = self.evaluate_expr(left)?;
                let right_val = self.evaluate_expr(right)?;
                self.apply_binary_op(*op, left_val, right_val, *location)
            }

            Expr::Call {
                func,
                args,
                location,
            } => {
                if args.len() != func.arity() {
                    return Err(RuntimeError::Arity {
                        function: *func,
                        expected: func.arity(),
                        got: args.len(),
                        location: *location,
                    });
                }

                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.evaluate_expr(arg)?);
                }
                Ok(self.call_builtin(*func, &values, *location))
            }
        }
    }

    #[inline]
    fn apply_binary_op(
        &self,
        op: BinOp,
        left: i32,
        right: i32,
        location: SourceLocation,
    ) -> Result<i32, RuntimeError> {
        match op {
            BinOp::Add => Ok(left.wrapping_add(right)),
            BinOp::Sub => Ok(ops::subtract(left, right)),
            BinOp::Mul => Ok(ops::multiply(left, right)),
            BinOp::Div => {
                // The primitive quietly yields 0 here; callers get an error instead
                if right == 0 {
                    return Err(RuntimeError::DivideByZero { location });
                }
                Ok(ops::signed_divide(left, right))
            }
        }
    }
}

/// Evaluate `expr` with `a`, `b`, `c`, `d` bound to the given values.
pub fn evaluate(expr: &Expr, a: i32, b: i32, c: i32, d: i32) -> Result<i32, RuntimeError> {
    Bindings::new(a, b, c, d).evaluate(expr)
}
