// Constants for the console shell

/// Typing this on the expression prompt ends the session
pub const QUIT_COMMAND: &str = "quit";

pub const EXPRESSION_PROMPT: &str = "Enter expression: ";

/// Parsed expressions kept before the cache is flushed
pub const PARSE_CACHE_CAPACITY: usize = 256;

pub const USAGE: &str = "\
MPC Expression Interpreter
Available variables: a, b, c, d (single character)
Available functions: max(x, y), min(x, y), equal(x, y), greater_than(x, y), ifelse(condition, true_val, false_val), absolute(x)
Available operators: +, -, *, /
Example: max(a * b, c + 5)
Commands: set <a|b|c|d> = <integer>, vars, help
Enter 'quit' to exit
";
