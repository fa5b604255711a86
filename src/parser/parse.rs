//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the [`parse`] entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach:
//! - This module: Parser struct, helper methods, and coordination
//! - `expressions`: the three precedence tiers and function calls
//!
//! Parsing stops at the first error. No partial tree is returned.
//!
//! Input is capped at [`MAX_TOKENS`] tokens and [`MAX_NESTING_DEPTH`] levels of
//! parentheses or calls. Every tree walk recurses once per level, so these
//! caps keep evaluation and drop within the stack.

use crate::parser::ast::{Builtin, Expr, SourceLocation};
use crate::parser::lexer::{LexError, Lexer, Token};
use thiserror::Error;
use tracing::debug;

/// Most tokens accepted in one expression, not counting end of input
pub const MAX_TOKENS: usize = 512;

/// Most parentheses and calls open at once
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unrecognised character or malformed literal
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Malformed grammar: missing delimiter, wrong token kind, bad variable name
    #[error("syntax error at {location}: {message}")]
    Syntax {
        message: String,
        location: SourceLocation,
    },

    /// Call syntax applied to a name that is not a built-in function
    #[error("unknown function '{name}' at {location}")]
    UnknownFunction {
        name: String,
        location: SourceLocation,
    },

    /// Built-in called with the wrong number of arguments
    #[error(
        "function '{function}' expects {expected} argument{}, but got {got} ({location})",
        plural(.expected)
    )]
    Arity {
        function: Builtin,
        expected: usize,
        got: usize,
        location: SourceLocation,
    },

    /// Tokens left over after a complete expression
    #[error("unconsumed input at {location}: {token}")]
    TrailingInput {
        token: String,
        location: SourceLocation,
    },
}

impl ParseError {
    pub fn location(&self) -> SourceLocation {
        match self {
            ParseError::Lex(err) => err.location,
            ParseError::Syntax { location, .. }
            | ParseError::UnknownFunction { location, .. }
            | ParseError::Arity { location, .. }
            | ParseError::TrailingInput { location, .. } => *location,
        }
    }
}

/// Recursive descent parser for arithmetic expressions
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) depth: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;

        // The last token is always Eof
        if tokens.len() > MAX_TOKENS + 1 {
            return Err(ParseError::Syntax {
                message: format!("expression too long (more than {} tokens)", MAX_TOKENS),
                location: tokens[MAX_TOKENS].location(),
            });
        }

        Ok(Self {
            tokens,
            position: 0,
            depth: 0,
        })
    }

    /// Parse one complete expression; the whole input must be consumed.
    pub fn parse_complete(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;

        if !self.is_at_end() {
            let token = self.peek_token();
            return Err(ParseError::TrailingInput {
                token: token.to_string(),
                location: token.location(),
            });
        }

        Ok(expr)
    }

    // ===== Helper methods =====

    /// Run `parse` one nesting level deeper, failing past [`MAX_NESTING_DEPTH`]
    pub(crate) fn nested<T>(
        &mut self,
        location: SourceLocation,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::Syntax {
                message: format!(
                    "expression too deeply nested (more than {} levels)",
                    MAX_NESTING_DEPTH
                ),
                location,
            });
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(self.peek_token()) == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek_token(), Token::Eof(_))
    }

    /// The token stream always ends in `Eof`, so the last token is a safe fallback.
    pub(crate) fn peek_token(&self) -> &Token {
        self.tokens
            .get(self.position)
            .or_else(|| self.tokens.last())
            .unwrap_or(&EOF)
    }

    pub(crate) fn previous(&self) -> &Token {
        self.tokens
            .get(self.position.saturating_sub(1))
            .unwrap_or(&EOF)
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek_token().location()
    }

    pub(crate) fn expect_token(&mut self, token: &Token, message: &str) -> Result<(), ParseError> {
        if self.match_token(token) {
            Ok(())
        } else {
            Err(self.syntax_error(message))
        }
    }

    /// Syntax error pointing at the current token
    pub(crate) fn syntax_error(&self, message: &str) -> ParseError {
        let found = self.peek_token();
        ParseError::Syntax {
            message: format!("{}, found {}", message, found),
            location: found.location(),
        }
    }
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

static EOF: Token = Token::Eof(SourceLocation { column: 0 });

/// Parse `source` into an expression tree.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(source)?;
    debug!(source, tokens = parser.tokens.len(), "parsing expression");
    let expr = parser.parse_complete()?;
    debug!(nodes = expr.node_count(), "parsed expression");
    Ok(expr)
}
