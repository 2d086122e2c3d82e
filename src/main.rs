//! CLI entry point for the `prattcalc` tool.
//!
//! Parses one expression given on the command line and prints either its
//! value or the S-expression form of its parse tree.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser as ClapParser;
use log::{LevelFilter, debug, error};
use prattcalc::{Lexer, parse};

#[derive(ClapParser, Debug)]
#[command(version, about = "Parse and evaluate an arithmetic expression", long_about = None)]
struct Args {
    /// Print the S-expression for the parse tree instead of its value
    #[arg(short, long)]
    s_expr: bool,

    /// Log tokens and the parse tree at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Arithmetic expression, e.g. "2 + 3 * 4"
    #[arg(allow_negative_numbers = true)]
    expression: String,
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn log_tokens(src: &str) {
    for item in Lexer::new(src) {
        match item {
            Ok((token, span)) => debug!(
                "token {token} at {span:?} precedence={}",
                token.precedence()
            ),
            Err(e) => debug!("lexing stopped: {e}"),
        }
    }
}

fn run(args: &Args) -> Result<String, prattcalc::Error> {
    debug!("expression={:?}", args.expression);
    if log::log_enabled!(log::Level::Debug) {
        log_tokens(&args.expression);
    }
    let tree = parse(&args.expression)?;
    debug!("parse tree {} (depth {})", tree.to_sexpr(), tree.depth());
    if args.s_expr {
        Ok(tree.to_sexpr())
    } else {
        Ok(tree.evaluate()?.to_string())
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(output) => {
            if writeln!(io::stdout(), "{output}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("{e:?}");
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
