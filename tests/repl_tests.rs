use mpcalc::repl::{Session, SessionError, SessionOptions};
use pretty_assertions::assert_eq;

fn run_session(input: &str, options: SessionOptions) -> (Result<(), SessionError>, String) {
    let mut session = Session::new(input.as_bytes(), Vec::new(), options);
    let result = session.run();
    let output = String::from_utf8(session.into_output()).expect("output is UTF-8");
    (result, output)
}

/// Output lines after the usage banner
fn transcript(output: &str) -> Vec<&str> {
    output
        .lines()
        .skip_while(|line| !line.starts_with("Enter 'quit'"))
        .skip(1)
        .collect()
}

#[test]
fn test_full_session() {
    let input = "2\n3\n1\n0\nmax(a * b, c + 5)\nquit\n";
    let (result, output) = run_session(input, SessionOptions::default());

    assert!(result.is_ok(), "Session failed: {:?}", result);
    assert_eq!(
        transcript(&output),
        vec![
            "",
            "Enter value for a: Enter value for b: Enter value for c: Enter value for d: ",
            "Variables: a=2, b=3, c=1, d=0",
            "",
            "Enter expression: Result: 6",
            "",
            "Enter expression: Goodbye!",
        ]
    );
}

#[test]
fn test_invalid_binding_reprompts() {
    let input = "x\n5\n0\n0\n0\na\nquit\n";
    let (result, output) = run_session(input, SessionOptions::default());

    assert!(result.is_ok());
    assert!(output.contains("Invalid input. Please enter an integer."));
    assert!(output.contains("Variables: a=5, b=0, c=0, d=0"));
    assert!(output.contains("Result: 5"));
}

#[test]
fn test_errors_do_not_end_session() {
    let options = SessionOptions {
        preset: [Some(1), Some(0), Some(0), Some(0)],
        ..Default::default()
    };
    let input = "a / b\nfoo(a)\nmax(a)\na $ b\n\na + 1\nquit\n";
    let (result, output) = run_session(input, options);

    assert!(result.is_ok());
    assert!(output.contains("Error: division by zero at column 3"));
    assert!(output.contains("Error: unknown function 'foo' at column 1"));
    assert!(output.contains("Error: function 'max' expects 2 arguments, but got 1 (column 1)"));
    assert!(output.contains("Error: lexer error at column 3: Unexpected character: '$'"));
    assert!(output.contains("Empty expression."));
    assert!(output.contains("Result: 2"));
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_set_and_vars() {
    let options = SessionOptions {
        preset: [Some(1), Some(2), Some(3), Some(4)],
        ..Default::default()
    };
    let input = "set c = -30\nvars\na + c\nset q = 1\nquit\n";
    let (_, output) = run_session(input, options);

    assert!(output.contains("Variables: a=1, b=2, c=-30, d=4"));
    assert!(output.contains("Result: -29"));
    assert!(output.contains("Usage: set <a|b|c|d> = <integer>"));
}

#[test]
fn test_end_of_input_while_prompting() {
    let (result, _) = run_session("1\n2\n", SessionOptions::default());
    assert!(matches!(result, Err(SessionError::InputClosed('c'))));
}

#[test]
fn test_end_of_input_at_expression_prompt() {
    let options = SessionOptions {
        preset: [Some(0); 4],
        ..Default::default()
    };
    let (result, output) = run_session("a\n", options);
    assert!(result.is_ok());
    assert!(output.ends_with("Goodbye!\n"));
}

#[test]
fn test_print_ast() {
    let options = SessionOptions {
        preset: [Some(2), Some(3), Some(0), Some(0)],
        print_ast: true,
        ..Default::default()
    };
    let (_, output) = run_session("a + b * 2\nquit\n", options);
    assert!(output.contains("AST: (a + (b * 2))"));
    assert!(output.contains("Result: 8"));
}

#[test]
fn test_batch_mode() {
    let options = SessionOptions {
        preset: [Some(4), None, None, None],
        ..Default::default()
    };
    let mut session = Session::new(&b""[..], Vec::new(), options);
    let ok = session
        .run_batch(&["a * 2".to_string(), "a / b".to_string()])
        .expect("Batch failed");
    let output = String::from_utf8(session.into_output()).unwrap();

    assert!(!ok);
    assert_eq!(
        output,
        "Result: 8\nError: division by zero at column 3\n"
    );
}
