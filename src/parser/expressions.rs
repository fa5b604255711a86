//! Expression parsing implementation
//!
//! Three precedence tiers, all left-associative:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := NUMBER | VARIABLE | FUNCTION '(' args? ')' | '(' expression ')'
//! ```
//!
//! Function arity is checked here, once the argument list is read, so the
//! evaluator never sees a call with the wrong number of arguments.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

/// Names accepted as variables
pub const VARIABLE_NAMES: [char; 4] = ['a', 'b', 'c', 'd'];

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_term()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Plus(loc)) {
                BinOp::Add
            } else if self.match_token(&Token::Minus(loc)) {
                BinOp::Sub
            } else {
                break;
            };

            let right = Box::new(self.parse_term()?);
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse multiplicative (* /)
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;

        loop {
            let loc = self.current_location();
            let op = if self.match_token(&Token::Star(loc)) {
                BinOp::Mul
            } else if self.match_token(&Token::Slash(loc)) {
                BinOp::Div
            } else {
                break;
            };

            let right = Box::new(self.parse_factor()?);
            left = Expr::BinaryOp {
                op,
                left: Box::new(left),
                right,
                location: loc,
            };
        }

        Ok(left)
    }

    /// Parse primary: literals, variables, calls, parenthesized expressions
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        match self.peek_token().clone() {
            Token::Number(value, location) => {
                self.advance();
                Ok(Expr::Constant { value, location })
            }

            Token::Variable(name, location) => {
                self.advance();

                if self.check(&Token::LParen(location)) {
                    return Err(ParseError::UnknownFunction { name, location });
                }

                self.variable(&name, location)
            }

            Token::Function(func, location) => {
                self.advance();
                self.nested(location, |parser| parser.parse_call(func, location))
            }

            Token::LParen(location) => {
                self.advance();
                self.nested(location, |parser| {
                    let expr = parser.parse_expression()?;
                    parser.expect_token(
                        &Token::RParen(parser.current_location()),
                        "expected ')' after sub-expression",
                    )?;
                    Ok(expr)
                })
            }

            _ => Err(self.syntax_error("unexpected token in expression")),
        }
    }

    /// Validate a variable name: exactly one of `a`, `b`, `c`, `d`
    fn variable(&self, name: &str, location: SourceLocation) -> Result<Expr, ParseError> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if VARIABLE_NAMES.contains(&ch) => Ok(Expr::Variable {
                name: ch,
                location,
            }),
            (Some(_), None) => Err(ParseError::Syntax {
                message: format!(
                    "unknown variable '{}'; available variables are a, b, c, d",
                    name
                ),
                location,
            }),
            _ => Err(ParseError::Syntax {
                message: format!(
                    "variables must be single characters (a, b, c, d), found '{}'",
                    name
                ),
                location,
            }),
        }
    }

    /// Parse call arguments after the function name
    fn parse_call(&mut self, func: Builtin, location: SourceLocation) -> Result<Expr, ParseError> {
        self.expect_token(
            &Token::LParen(self.current_location()),
            &format!("expected '(' after function name '{}'", func),
        )?;

        let mut args = Vec::with_capacity(func.arity());
        if !self.check(&Token::RParen(self.current_location())) {
            loop {
                args.push(self.parse_expression()?);
                if !self.match_token(&Token::Comma(self.current_location())) {
                    break;
                }
            }
        }

        if args.len() != func.arity() {
            return Err(ParseError::Arity {
                function: func,
                expected: func.arity(),
                got: args.len(),
                location,
            });
        }

        self.expect_token(
            &Token::RParen(self.current_location()),
            &format!("expected ')' after arguments to '{}'", func),
        )?;

        Ok(Expr::Call {
            func,
            args,
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::{parse, ParseError};
    use pretty_assertions::assert_eq;

    fn var(name: char) -> Expr {
        Expr::Variable {
            name,
            location: SourceLocation::default(),
        }
    }

    fn num(value: i32) -> Expr {
        Expr::Constant {
            value,
            location: SourceLocation::default(),
        }
    }

    fn bin(op: BinOp, left: Expr, right: Expr) -> Expr {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
            location: SourceLocation::default(),
        }
    }

    fn call(func: Builtin, args: Vec<Expr>) -> Expr {
        Expr::Call {
            func,
            args,
            location: SourceLocation::default(),
        }
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            parse("a + b * c").unwrap(),
            bin(BinOp::Add, var('a'), bin(BinOp::Mul, var('b'), var('c')))
        );
        assert_eq!(
            parse("(a + b) * c").unwrap(),
            bin(BinOp::Mul, bin(BinOp::Add, var('a'), var('b')), var('c'))
        );
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(
            parse("a - b - c").unwrap(),
            bin(BinOp::Sub, bin(BinOp::Sub, var('a'), var('b')), var('c'))
        );
        assert_eq!(
            parse("a / b * 2").unwrap(),
            bin(BinOp::Mul, bin(BinOp::Div, var('a'), var('b')), num(2))
        );
    }

    #[test]
    fn test_calls() {
        assert_eq!(
            parse("max(a * b, c + 5)").unwrap(),
            call(
                Builtin::Max,
                vec![
                    bin(BinOp::Mul, var('a'), var('b')),
                    bin(BinOp::Add, var('c'), num(5)),
                ]
            )
        );
        assert_eq!(
            parse("ifelse(equal(a,b), c, d)").unwrap(),
            call(
                Builtin::IfElse,
                vec![call(Builtin::Equal, vec![var('a'), var('b')]), var('c'), var('d')]
            )
        );
        assert_eq!(
            parse("absolute(-7)").unwrap(),
            call(Builtin::Absolute, vec![num(-7)])
        );
    }

    #[test]
    fn test_negative_literal_positions() {
        assert_eq!(
            parse("a - -5").unwrap(),
            bin(BinOp::Sub, var('a'), num(-5))
        );
        assert_eq!(parse("-5 * a").unwrap(), bin(BinOp::Mul, num(-5), var('a')));
        assert!(matches!(
            parse("a-5").unwrap_err(),
            ParseError::TrailingInput { .. }
        ));
    }

    #[test]
    fn test_arity_errors() {
        match parse("max(a,b,c)").unwrap_err() {
            ParseError::Arity {
                function,
                expected,
                got,
                ..
            } => {
                assert_eq!(function, Builtin::Max);
                assert_eq!(expected, 2);
                assert_eq!(got, 3);
            }
            other => panic!("Expected arity error, got {:?}", other),
        }

        assert!(matches!(
            parse("absolute()").unwrap_err(),
            ParseError::Arity { expected: 1, got: 0, .. }
        ));
        assert!(matches!(
            parse("ifelse(a, b)").unwrap_err(),
            ParseError::Arity { expected: 3, got: 2, .. }
        ));
    }

    #[test]
    fn test_unknown_function() {
        let err = parse("foo(a)").unwrap_err();
        assert!(matches!(err, ParseError::UnknownFunction { ref name, .. } if name == "foo"));
        assert_eq!(err.location().column, 1);
    }

    #[test]
    fn test_bad_variables() {
        let err = parse("a + ab").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { ref message, .. } if message.contains("single characters")));
        assert_eq!(err.location().column, 5);

        let err = parse("e").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { ref message, .. } if message.contains("unknown variable 'e'")));
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(parse("(a + b").unwrap_err(), ParseError::Syntax { .. }));
        assert!(matches!(parse("max a, b").unwrap_err(), ParseError::Syntax { .. }));
        assert!(matches!(parse("max(a, b").unwrap_err(), ParseError::Syntax { .. }));
        assert!(matches!(parse("a +").unwrap_err(), ParseError::Syntax { .. }));
        assert!(matches!(parse("").unwrap_err(), ParseError::Syntax { .. }));
        assert!(matches!(parse("max(a,)").unwrap_err(), ParseError::Syntax { .. }));
        assert!(matches!(parse("a )").unwrap_err(), ParseError::TrailingInput { .. }));
    }

    #[test]
    fn test_display_reparses() {
        for source in [
            "max(a * b, c + 5)",
            "a - -5 / (b + c)",
            "ifelse(greater_than(a, -2147483648), min(c, d), absolute(b))",
            "a - b - c * d",
        ] {
            let expr = parse(source).unwrap();
            let rendered = expr.to_string();
            assert_eq!(parse(&rendered).unwrap(), expr, "round trip of {}", rendered);
        }
    }
}
