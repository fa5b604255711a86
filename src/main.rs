// mpcalc: branch-free integer expression interpreter

use std::io::{self, IsTerminal};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mpcalc::repl::{Session, SessionOptions};

/// Evaluate integer expressions over the variables a, b, c, d
#[derive(Parser, Debug)]
#[command(name = "mpcalc", version)]
#[command(about = "Evaluate integer expressions with branch-free arithmetic", long_about = None)]
struct Args {
    /// Value for a (prompted for when omitted)
    #[arg(short = 'a', allow_hyphen_values = true)]
    a: Option<i32>,

    /// Value for b (prompted for when omitted)
    #[arg(short = 'b', allow_hyphen_values = true)]
    b: Option<i32>,

    /// Value for c (prompted for when omitted)
    #[arg(short = 'c', allow_hyphen_values = true)]
    c: Option<i32>,

    /// Value for d (prompted for when omitted)
    #[arg(short = 'd', allow_hyphen_values = true)]
    d: Option<i32>,

    /// Evaluate this expression and exit; may be repeated. Unset variables are 0.
    #[arg(short = 'e', long = "expr")]
    expressions: Vec<String>,

    /// Print the parsed tree before each result
    #[arg(long)]
    print_ast: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    let options = SessionOptions {
        preset: [args.a, args.b, args.c, args.d],
        print_ast: args.print_ast,
        color: !args.no_color && stdout.is_terminal(),
    };

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), stdout.lock(), options);

    if !args.expressions.is_empty() {
        if !session.run_batch(&args.expressions)? {
            std::process::exit(1);
        }
        return Ok(());
    }

    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
