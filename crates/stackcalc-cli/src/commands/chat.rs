//! Implementation of the `stackcalc chat` command.

use std::io::{self, BufRead, Write};

use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use stackcalc::{Calculator, Reply, WELCOME};

const AGENT: &str = "Agent 🤖:";
const USER: &str = "You 🙂:";

/// Arguments for the chat command.
#[derive(Debug, clap::Args)]
pub struct ChatArgs {
    /// Reject characters outside the expression grammar
    #[arg(long, env = "STACKCALC_STRICT")]
    pub strict: bool,
}

/// Run the chat command until end of input or a farewell.
pub fn run_chat(args: ChatArgs, verbose: bool) -> Result<i32> {
    let mut calculator = Calculator::builder().strict(args.strict).build();
    let stdin = io::stdin();
    let stdout = io::stdout();
    converse(&mut calculator, stdin.lock(), stdout.lock(), verbose).into_diagnostic()?;
    Ok(exitcode::OK)
}

/// Drive one conversation over a line reader and a writer.
fn converse<R: BufRead, W: Write>(
    calculator: &mut Calculator,
    mut input: R,
    mut output: W,
    verbose: bool,
) -> io::Result<()> {
    let agent = AGENT.if_supports_color(Stream::Stdout, |label| label.cyan());
    let user = USER.if_supports_color(Stream::Stdout, |label| label.bold());

    writeln!(output, "{agent} {WELCOME}\n")?;

    loop {
        write!(output, "{user} ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        let reply = calculator.respond(message);
        writeln!(output, "{agent} {reply}")?;
        if let Reply::Error(error) = &reply {
            if verbose {
                writeln!(output, "  ({error})")?;
            }
        }
        writeln!(output)?;

        if reply.is_farewell() {
            break;
        }
    }

    output.flush()
}
