//! Lexer (tokenizer) for arithmetic expressions
//!
//! Converts raw expression text into a flat [`Token`] stream consumed by the
//! parser. The stream always ends with [`Token::Eof`].
//!
//! A `-` immediately followed by a digit is lexed as part of a number literal,
//! regardless of what precedes it. `a - 5` yields three tokens, `a-5` yields
//! two (`a` and `-5`).

use super::ast::{Builtin, SourceLocation};
use std::fmt;
use thiserror::Error;
use tracing::trace;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate column without a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Operands
    Variable(String, SourceLocation),
    Number(i32, SourceLocation),

    // Reserved function names
    Function(Builtin, SourceLocation),

    // Operators
    Plus(SourceLocation),  // +
    Minus(SourceLocation), // -
    Star(SourceLocation),  // *
    Slash(SourceLocation), // /

    // Punctuation
    LParen(SourceLocation), // (
    RParen(SourceLocation), // )
    Comma(SourceLocation),  // ,

    // End of input
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::Variable(_, loc)
            | Token::Number(_, loc)
            | Token::Function(_, loc)
            | Token::Plus(loc)
            | Token::Minus(loc)
            | Token::Star(loc)
            | Token::Slash(loc)
            | Token::LParen(loc)
            | Token::RParen(loc)
            | Token::Comma(loc)
            | Token::Eof(loc) => *loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Variable(s, _) => write!(f, "identifier '{}'", s),
            Token::Number(n, _) => write!(f, "number {}", n),
            Token::Function(func, _) => write!(f, "function '{}'", func),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Minus(_) => write!(f, "'-'"),
            Token::Star(_) => write!(f, "'*'"),
            Token::Slash(_) => write!(f, "'/'"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::Comma(_) => write!(f, "','"),
            Token::Eof(_) => write!(f, "end of input"),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("lexer error at {location}: {message}")]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

/// Lexer for expression text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given expression.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            let loc = self.current_location();
            let Some(ch) = self.advance() else {
                tokens.push(Token::Eof(loc));
                break;
            };

            let token = self.next_token(ch, loc)?;
            trace!(%token, column = token.location().column, "lexed token");
            tokens.push(token);
        }

        Ok(tokens)
    }

    /// Token starting with `ch`, already consumed at `loc`
    fn next_token(&mut self, ch: char, loc: SourceLocation) -> Result<Token, LexError> {
        match ch {
            '0'..='9' => self.number_literal(ch, loc),

            // Negative literal only when a digit follows directly
            '-' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                self.number_literal(ch, loc)
            }

            'a'..='z' | 'A'..='Z' => Ok(self.identifier_or_function(ch, loc)),

            '+' => Ok(Token::Plus(loc)),
            '-' => Ok(Token::Minus(loc)),
            '*' => Ok(Token::Star(loc)),
            '/' => Ok(Token::Slash(loc)),
            '(' => Ok(Token::LParen(loc)),
            ')' => Ok(Token::RParen(loc)),
            ',' => Ok(Token::Comma(loc)),

            _ => Err(LexError {
                message: format!("Unexpected character: '{}'", ch),
                location: loc,
            }),
        }
    }

    /// Parse an integer literal; `first` is a digit or a leading `-`
    fn number_literal(&mut self, first: char, loc: SourceLocation) -> Result<Token, LexError> {
        let mut num_str = String::new();
        num_str.push(first);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let value = num_str.parse::<i32>().map_err(|_| LexError {
            message: format!("Invalid integer literal: {}", num_str),
            location: loc,
        })?;

        Ok(Token::Number(value, loc))
    }

    /// Parse identifier; reserved names become [`Token::Function`]
    fn identifier_or_function(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match Builtin::from_name(&ident) {
            Some(func) => Token::Function(func, loc),
            None => Token::Variable(ident, loc),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.position + 1)
    }
}

/// Tokenize `input` in one call.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}
