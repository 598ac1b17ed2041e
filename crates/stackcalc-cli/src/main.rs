//! stackcalc CLI entry point.
//!
//! Provides a terminal front-end for the stack-based calculator:
//! - `stackcalc eval` - Answer a single message
//! - `stackcalc chat` - Converse line by line on stdin
//! - `stackcalc batch` - Evaluate every expression in a file

mod commands;
mod output;

use std::io;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_batch, run_chat, run_eval, BatchArgs, ChatArgs, EvalArgs};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt::Layer;
use tracing_subscriber::prelude::*;

/// Crates whose events follow `--verbose`.
const LOGGED_CRATES: [&str; 2] = ["stackcalc", "stackcalc_cli"];

/// Stack-based arithmetic calculator.
#[derive(Debug, Parser)]
#[command(name = "stackcalc")]
#[command(about = "Stack-based arithmetic calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Show error causes and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Send one message to the calculator
    Eval(EvalArgs),
    /// Start an interactive conversation
    Chat(ChatArgs),
    /// Evaluate expressions from a file, one per line
    Batch(BatchArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Event filter: our crates log at debug with `verbose`, everything else
/// only warns.
fn log_filter(verbose: bool) -> Targets {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    Targets::new()
        .with_default(LevelFilter::WARN)
        .with_targets(LOGGED_CRATES.map(|name| (name, level)))
}

/// Install a stderr subscriber so log lines never mix with replies on stdout.
fn init_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(
            Layer::new()
                .without_time()
                .with_writer(io::stderr)
                .with_filter(log_filter(verbose)),
        )
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    init_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Eval(args) => run_eval(args, cli.verbose),
        Commands::Chat(args) => run_chat(args, cli.verbose),
        Commands::Batch(args) => run_batch(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
