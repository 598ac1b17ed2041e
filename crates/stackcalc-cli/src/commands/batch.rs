//! Implementation of the `stackcalc batch` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::Args;
use miette::{miette, IntoDiagnostic, Result};
use stackcalc::{format_value, to_postfix, tokenize, tokenize_strict, Calculator, Reply};
use tracing::debug;

use crate::output::table::{format_batch_table, BatchRow};
use crate::output::ReplyJson;

/// Arguments for the batch command.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// File with one expression per line. Blank lines and `#` comments are skipped.
    pub file: PathBuf,

    /// Reject characters outside the expression grammar
    #[arg(long, env = "STACKCALC_STRICT")]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the batch command.
pub fn run_batch(args: BatchArgs) -> Result<i32> {
    let expressions = load_expressions(&args.file)?;
    let mut calculator = Calculator::builder().strict(args.strict).build();
    let replies: Vec<Reply> = expressions
        .iter()
        .map(|expression| calculator.respond(expression))
        .collect();

    let failures = replies
        .iter()
        .filter(|reply| matches!(reply, Reply::Error(_)))
        .count();

    if args.json {
        let json_data: Vec<ReplyJson<'_>> = expressions
            .iter()
            .zip(&replies)
            .map(|(expression, reply)| ReplyJson::new(expression, reply))
            .collect();
        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let rows: Vec<BatchRow> = expressions
            .iter()
            .zip(&replies)
            .map(|(expression, reply)| batch_row(expression, reply, args.strict))
            .collect();
        println!("{}", format_batch_table(&rows));
        println!("\n{} expressions, {} failed", expressions.len(), failures);
    }

    if failures > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Read the expressions from a batch file.
fn load_expressions(path: &Path) -> Result<Vec<String>> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read expression file {:?}: {}", path, e))?;

    let expressions: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect();
    debug!("loaded {} expressions from {:?}", expressions.len(), path);
    Ok(expressions)
}

fn batch_row(expression: &str, reply: &Reply, strict: bool) -> BatchRow {
    let postfix = if strict {
        tokenize_strict(expression)
            .map(|tokens| to_postfix(&tokens).to_string())
            .unwrap_or_else(|_| "-".to_string())
    } else {
        to_postfix(&tokenize(expression)).to_string()
    };

    let outcome = match reply {
        Reply::Result(value) => format_value(*value),
        Reply::Error(error) => format!("error: {}", error),
        Reply::Greeting | Reply::Farewell => reply.to_string(),
    };

    BatchRow {
        expression: expression.to_string(),
        postfix,
        outcome,
    }
}
