// AST (Abstract Syntax Tree) definitions for the expression interpreter

use std::fmt;

/// Source location information for error reporting
///
/// Expressions are a single line, so only the 1-based column is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub column: usize,
}

impl SourceLocation {
    pub fn new(column: usize) -> Self {
        Self { column }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {}", self.column)
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

/// The six built-in functions, each with a fixed arity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Max,
    Min,
    Equal,
    GreaterThan,
    IfElse,
    Absolute,
}

impl Builtin {
    pub const ALL: [Builtin; 6] = [
        Builtin::Max,
        Builtin::Min,
        Builtin::Equal,
        Builtin::GreaterThan,
        Builtin::IfElse,
        Builtin::Absolute,
    ];

    /// Look up a reserved function name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "max" => Some(Builtin::Max),
            "min" => Some(Builtin::Min),
            "equal" => Some(Builtin::Equal),
            "greater_than" => Some(Builtin::GreaterThan),
            "ifelse" => Some(Builtin::IfElse),
            "absolute" => Some(Builtin::Absolute),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Builtin::Max => "max",
            Builtin::Min => "min",
            Builtin::Equal => "equal",
            Builtin::GreaterThan => "greater_than",
            Builtin::IfElse => "ifelse",
            Builtin::Absolute => "absolute",
        }
    }

    /// Number of arguments the function must be called with.
    pub fn arity(self) -> usize {
        match self {
            Builtin::Absolute => 1,
            Builtin::Max | Builtin::Min | Builtin::Equal | Builtin::GreaterThan => 2,
            Builtin::IfElse => 3,
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Expression tree node
///
/// Every composite node owns its children outright, so dropping the root
/// releases the whole tree.
#[derive(Debug, Clone)]
pub enum Expr {
    /// Reference to one of the bound variables `a`, `b`, `c`, `d`
    Variable { name: char, location: SourceLocation },

    /// Integer literal
    Constant { value: i32, location: SourceLocation },

    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        location: SourceLocation,
    },

    /// Built-in call; `args.len()` always equals `func.arity()` when parsed
    Call {
        func: Builtin,
        args: Vec<Expr>,
        location: SourceLocation,
    },
}

impl Expr {
    pub fn location(&self) -> SourceLocation {
        match self {
            Expr::Variable { location, .. }
            | Expr::Constant { location, .. }
            | Expr::BinaryOp { location, .. }
            | Expr::Call { location, .. } => *location,
        }
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Variable { .. } | Expr::Constant { .. } => 1,
            Expr::BinaryOp { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Expr::Call { args, .. } => 1 + args.iter().map(Expr::node_count).sum::<usize>(),
        }
    }
}

/// Structural equality; source locations are ignored.
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expr::Variable { name: a, .. }, Expr::Variable { name: b, .. }) => a == b,
            (Expr::Constant { value: a, .. }, Expr::Constant { value: b, .. }) => a == b,
            (
                Expr::BinaryOp {
                    op: op_a,
                    left: left_a,
                    right: right_a,
                    ..
                },
                Expr::BinaryOp {
                    op: op_b,
                    left: left_b,
                    right: right_b,
                    ..
                },
            ) => op_a == op_b && left_a == left_b && right_a == right_b,
            (
                Expr::Call {
                    func: func_a,
                    args: args_a,
                    ..
                },
                Expr::Call {
                    func: func_b,
                    args: args_b,
                    ..
                },
            ) => func_a == func_b && args_a == args_b,
            _ => false,
        }
    }
}

impl Eq for Expr {}

/// Renders fully parenthesised infix text that parses back to the same tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Variable { name, .. } => write!(f, "{}", name),
            Expr::Constant { value, .. } => write!(f, "{}", value),
            Expr::BinaryOp {
                op, left, right, ..
            } => write!(f, "({} {} {})", left, op.symbol(), right),
            Expr::Call { func, args, .. } => {
                write!(f, "{}(", func)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
        }
    }
}
