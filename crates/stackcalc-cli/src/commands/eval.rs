//! Implementation of the `stackcalc eval` command.

use miette::{IntoDiagnostic, Report, Result};
use stackcalc::{Calculator, Reply};

use crate::output::{ExpressionDiagnostic, ReplyJson};

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Message or arithmetic expression, e.g. "10 + 5 * 3"
    pub expression: String,

    /// Reject characters outside the expression grammar
    #[arg(long, env = "STACKCALC_STRICT")]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs, verbose: bool) -> Result<i32> {
    let mut calculator = Calculator::builder().strict(args.strict).build();
    let reply = calculator.respond(&args.expression);

    if args.json {
        let output = ReplyJson::new(&args.expression, &reply);
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", reply);
    }

    let Reply::Error(error) = &reply else {
        return Ok(exitcode::OK);
    };

    if verbose && !args.json {
        match ExpressionDiagnostic::from_eval_error(&args.expression, error) {
            Some(diagnostic) => eprintln!("{:?}", Report::new(diagnostic)),
            None => eprintln!("cause: {}", error),
        }
    }
    Ok(exitcode::DATAERR)
}
