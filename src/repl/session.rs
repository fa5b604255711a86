//! Interactive session state and the read-eval-print loop
//!
//! [`Session`] is generic over its input and output so the whole loop can be
//! driven from in-memory buffers in tests.

use super::cache::ParseCache;
use super::constants::{EXPRESSION_PROMPT, PARSE_CACHE_CAPACITY, QUIT_COMMAND, USAGE};
use super::theme::Painter;
use crate::interpreter::engine::Bindings;
use crate::parser::expressions::VARIABLE_NAMES;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that end a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input ended while a variable value was still required
    #[error("input closed while reading a value for '{0}'")]
    InputClosed(char),
}

/// Settings taken from the command line
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Values supplied up front for `a`, `b`, `c`, `d`; `None` means prompt
    pub preset: [Option<i32>; 4],
    /// Print the parsed tree before each result
    pub print_ast: bool,
    pub color: bool,
}

/// What one line of input asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Empty,
    Help,
    Vars,
    Set { name: char, value: i32 },
    Evaluate(String),
}

impl Command {
    /// Classify a line. Malformed `set` commands are reported as usage errors.
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();

        match line {
            QUIT_COMMAND => return Ok(Command::Quit),
            "" => return Ok(Command::Empty),
            "help" => return Ok(Command::Help),
            "vars" => return Ok(Command::Vars),
            _ => {}
        }

        match line.strip_prefix("set ") {
            Some(rest) => parse_assignment(rest),
            None => Ok(Command::Evaluate(line.to_string())),
        }
    }
}

fn parse_assignment(rest: &str) -> Result<Command, String> {
    let usage = || "Usage: set <a|b|c|d> = <integer>".to_string();

    let (name, value) = rest.split_once('=').ok_or_else(usage)?;
    let mut chars = name.trim().chars();
    let name = match (chars.next(), chars.next()) {
        (Some(ch), None) if VARIABLE_NAMES.contains(&ch) => ch,
        _ => return Err(usage()),
    };
    let value = value.trim().parse::<i32>().map_err(|_| usage())?;

    Ok(Command::Set { name, value })
}

pub struct Session<R, W> {
    input: R,
    output: W,
    bindings: Bindings,
    options: SessionOptions,
    cache: ParseCache,
    painter: Painter,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        let mut bindings = Bindings::default();
        for (name, preset) in VARIABLE_NAMES.iter().zip(options.preset) {
            if let (Some(slot), Some(value)) = (bindings.slot_mut(*name), preset) {
                *slot = value;
            }
        }

        Session {
            input,
            output,
            bindings,
            painter: Painter::new(options.color),
            options,
            cache: ParseCache::new(PARSE_CACHE_CAPACITY),
        }
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Consume the session and hand back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the interactive loop until `quit` or end of input
    pub fn run(&mut self) -> Result<(), SessionError> {
        write!(self.output, "{}", USAGE)?;
        writeln!(self.output)?;

        if self.prompt_for_bindings()? {
            writeln!(self.output)?;
        }
        self.print_bindings()?;
        writeln!(self.output)?;

        loop {
            write!(self.output, "{}", self.painter.prompt(EXPRESSION_PROMPT))?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(usage) => {
                    warn!(line = line.trim(), "malformed command");
                    writeln!(self.output, "{}", self.painter.error(&usage))?;
                }
            }
            writeln!(self.output)?;
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Evaluate each expression once without prompting; unset bindings are 0.
    ///
    /// Returns `true` when every expression succeeded.
    pub fn run_batch(&mut self, expressions: &[String]) -> Result<bool, SessionError> {
        let mut all_ok = true;
        for source in expressions {
            all_ok &= self.report(source.trim())?;
        }
        self.output.flush()?;
        Ok(all_ok)
    }

    fn execute(&mut self, command: Command) -> Result<(), SessionError> {
        match command {
            Command::Quit => {}
            Command::Empty => {
                writeln!(
                    self.output,
                    "{}",
                    self.painter
                        .info("Empty expression. Please enter a valid expression or 'quit'.")
                )?;
            }
            Command::Help => write!(self.output, "{}", USAGE)?,
            Command::Vars => self.print_bindings()?,
            Command::Set { name, value } => {
                if let Some(slot) = self.bindings.slot_mut(name) {
                    *slot = value;
                }
                debug!(%name, value, "rebound variable");
                self.print_bindings()?;
            }
            Command::Evaluate(source) => {
                self.report(&source)?;
            }
        }
        Ok(())
    }

    /// Evaluate `source` and print the result or the error.
    fn report(&mut self, source: &str) -> Result<bool, SessionError> {
        let bindings = self.bindings;
        let outcome = match self.cache.get_or_parse(source) {
            Ok(expr) => {
                if self.options.print_ast {
                    let rendered = format!("AST: {}", expr);
                    writeln!(self.output, "{}", self.painter.info(&rendered))?;
                }
                bindings.evaluate(expr).map_err(crate::Error::from)
            }
            Err(err) => Err(crate::Error::from(err)),
        };

        match outcome {
            Ok(value) => {
                let line = format!("Result: {}", value);
                writeln!(self.output, "{}", self.painter.result(&line))?;
                Ok(true)
            }
            Err(err) => {
                warn!(source, error = %err, "expression rejected");
                let line = format!("Error: {}", err);
                writeln!(self.output, "{}", self.painter.error(&line))?;
                Ok(false)
            }
        }
    }

    /// Parse (or fetch from the cache) and evaluate against the current bindings
    pub fn evaluate(&mut self, source: &str) -> Result<i32, crate::Error> {
        let expr = self.cache.get_or_parse(source)?;
        Ok(self.bindings.evaluate(expr)?)
    }

    /// Ask for every binding not preset; `true` if anything was asked for
    fn prompt_for_bindings(&mut self) -> Result<bool, SessionError> {
        let mut prompted = false;
        for (index, name) in VARIABLE_NAMES.iter().enumerate() {
            if self.options.preset[index].is_some() {
                continue;
            }
            let value = self.read_int(*name)?;
            if let Some(slot) = self.bindings.slot_mut(*name) {
                *slot = value;
            }
            prompted = true;
        }
        Ok(prompted)
    }

    /// Prompt until a line parses as an integer
    fn read_int(&mut self, name: char) -> Result<i32, SessionError> {
        loop {
            let prompt = format!("Enter value for {}: ", name);
            write!(self.output, "{}", self.painter.prompt(&prompt))?;
            self.output.flush()?;

            let line = self.read_line()?.ok_or(SessionError::InputClosed(name))?;
            match line.trim().parse::<i32>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(
                    self.output,
                    "{}",
                    self.painter
                        .error("Invalid input. Please enter an integer.")
                )?,
            }
        }
    }

    fn print_bindings(&mut self) -> Result<(), SessionError> {
        let Bindings { a, b, c, d } = self.bindings;
        writeln!(self.output, "Variables: a={}, b={}, c={}, d={}", a, b, c, d)?;
        Ok(())
    }

    /// One line without its terminator, or `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("  quit \n"), Ok(Command::Quit));
        assert_eq!(Command::parse("   "), Ok(Command::Empty));
        assert_eq!(Command::parse("vars"), Ok(Command::Vars));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(
            Command::parse("set b = -12"),
            Ok(Command::Set {
                name: 'b',
                value: -12
            })
        );
        assert_eq!(
            Command::parse(" a + 1 "),
            Ok(Command::Evaluate("a + 1".to_string()))
        );
    }

    #[test]
    fn test_command_parse_rejects_bad_set() {
        assert!(Command::parse("set e = 1").is_err());
        assert!(Command::parse("set a 1").is_err());
        assert!(Command::parse("set a = x").is_err());
        assert!(Command::parse("set ab = 1").is_err());
    }

    #[test]
    fn test_presets_skip_prompts() {
        let options = SessionOptions {
            preset: [Some(1), Some(2), Some(3), Some(4)],
            ..Default::default()
        };
        let mut session = Session::new(&b"quit\n"[..], Vec::new(), options);
        session.run().unwrap();

        assert_eq!(*session.bindings(), Bindings::new(1, 2, 3, 4));
        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(!output.contains("Enter value for"));
        assert!(output.contains("Enter 'quit' to exit\n\nVariables: a=1, b=2, c=3, d=4\n"));
    }

    #[test]
    fn test_variables_start_on_own_line_after_prompts() {
        let options = SessionOptions {
            preset: [Some(1), Some(2), Some(3), None],
            ..Default::default()
        };
        let mut session = Session::new(&b"9\nquit\n"[..], Vec::new(), options);
        session.run().unwrap();

        let output = String::from_utf8(session.into_output()).unwrap();
        assert!(output.contains("Enter value for d: \nVariables: a=1, b=2, c=3, d=9\n"));
    }

    #[test]
    fn test_evaluate_uses_cache() {
        let mut session = Session::new(&b""[..], Vec::new(), SessionOptions::default());
        assert_eq!(session.evaluate("a + 1").unwrap(), 1);
        assert_eq!(session.evaluate("a + 1").unwrap(), 1);
        assert_eq!(session.cache.hits(), 1);
    }
}
