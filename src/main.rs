//! CLI entry point for the `shuntcalc` tool.
//!
//! Evaluates each expression given on the command line, or each line of
//! standard input when none are given, and prints one result per line.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use shuntcalc::{Engine, EvalConfig, EvalError, SyntaxMode, format_number};
use thiserror::Error;

#[derive(Parser)]
#[command(name = "shuntcalc")]
#[command(about = "Evaluate arithmetic expressions with + - * / ^ and parentheses")]
struct Cli {
    /// Expressions to evaluate; read from stdin, one per line, when omitted
    expressions: Vec<String>,
    /// Reject unknown characters and unbalanced parentheses
    #[arg(long)]
    strict: bool,
    /// Print the postfix form instead of evaluating
    #[arg(long)]
    postfix: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let mode = if cli.strict {
        SyntaxMode::Strict
    } else {
        SyntaxMode::Permissive
    };
    let engine = Engine::new(EvalConfig::default().with_mode(mode));

    let inputs: Box<dyn Iterator<Item = io::Result<String>>> = if cli.expressions.is_empty() {
        Box::new(io::stdin().lock().lines())
    } else {
        Box::new(cli.expressions.into_iter().map(Ok))
    };

    let mut failed = false;
    for input in inputs {
        // A broken input stream cannot be resumed reliably.
        let stop = input.is_err();
        if let Err(e) = input
            .map_err(CliError::from)
            .and_then(|expr| run(&engine, &expr, cli.postfix))
        {
            let _ = writeln!(io::stderr(), "error: {e}");
            failed = true;
        }
        if stop {
            break;
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run(engine: &Engine, expr: &str, postfix: bool) -> Result<(), CliError> {
    let line = if postfix {
        engine.to_postfix(expr)?.to_string()
    } else {
        format_number(engine.evaluate(expr)?)
    };
    let _ = writeln!(io::stdout(), "{line}");
    Ok(())
}
