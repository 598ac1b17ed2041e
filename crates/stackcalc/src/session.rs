//! Conversational front door for the evaluator.
//!
//! A [`Calculator`] screens each message for greeting and farewell keywords
//! before handing it to the evaluator, and keeps the last successful result.

use std::fmt::{Display, Formatter, Result as FmtResult};

use bon::Builder;
use tracing::debug;

use crate::error::{ErrorKind, EvalError};
use crate::interpreter::{evaluate, evaluate_strict};

/// Opening message shown by front-ends before the first exchange.
pub const WELCOME: &str =
    "Hello! I am your Stack-Based AI Calculator.\nTry: 10 + 5 * 3 or ( 8 + 2 ) * 5";

const GREETING_REPLY: &str = "Hello 👋 Tell me what you want to calculate!";
const FAREWELL_REPLY: &str = "Byeee 👋";
const INVALID_REPLY: &str = "Invalid expression 🙂";

/// One calculator conversation.
///
/// Each instance owns its own last result, so independent sessions never
/// observe each other.
///
/// # Example
///
/// ```
/// use stackcalc::{Calculator, Reply};
///
/// let mut calculator = Calculator::new();
/// assert_eq!(calculator.respond("(8 + 2) * 5"), Reply::Result(50.0));
/// assert_eq!(calculator.last_result(), Some(50.0));
/// assert_eq!(calculator.respond("hello").to_string(), "Hello 👋 Tell me what you want to calculate!");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Calculator {
    /// Keywords that trigger the greeting reply when found anywhere in the
    /// lowercased input.
    #[builder(default = vec!["hi".to_string(), "hello".to_string(), "hey".to_string()])]
    greetings: Vec<String>,

    /// Keywords that trigger the farewell reply. Checked after greetings.
    #[builder(default = vec!["bye".to_string(), "exit".to_string(), "quit".to_string()])]
    farewells: Vec<String>,

    /// Reject characters outside the expression grammar instead of skipping
    /// them.
    #[builder(default)]
    strict: bool,

    #[builder(skip)]
    last_result: Option<f64>,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::builder().build()
    }
}

impl Calculator {
    /// Create a calculator with the default keyword sets in lenient mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether unrecognized characters are rejected.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// The value of the most recent successful evaluation.
    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// Forget the last result.
    pub fn clear_memory(&mut self) {
        self.last_result = None;
    }

    /// Answer one message.
    ///
    /// Greeting and farewell keywords take priority over arithmetic, even
    /// when the message also contains an expression. Everything else is
    /// evaluated; a success overwrites the last result, a failure leaves it
    /// alone.
    pub fn respond(&mut self, input: &str) -> Reply {
        let text = input.to_lowercase();

        if mentions_any(&text, &self.greetings) {
            debug!("greeting detected in {input:?}");
            return Reply::Greeting;
        }
        if mentions_any(&text, &self.farewells) {
            debug!("farewell detected in {input:?}");
            return Reply::Farewell;
        }

        let outcome = if self.strict {
            evaluate_strict(input)
        } else {
            evaluate(input)
        };

        match outcome {
            Ok(value) => {
                debug!("{input:?} = {value}");
                self.last_result = Some(value);
                Reply::Result(value)
            }
            Err(error) => {
                debug!("{input:?} rejected: {error}");
                Reply::Error(error)
            }
        }
    }
}

fn mentions_any(text: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|keyword| !keyword.is_empty() && text.contains(keyword.as_str()))
}

/// The calculator's answer to one message.
///
/// `Display` renders the user-facing text. Every error shares one message;
/// use [`Reply::error_kind`] or the wrapped [`EvalError`] to tell them apart.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Greeting,
    Farewell,
    Result(f64),
    Error(EvalError),
}

impl Reply {
    /// The computed value, if evaluation succeeded.
    pub fn value(&self) -> Option<f64> {
        match self {
            Reply::Result(value) => Some(*value),
            Reply::Greeting | Reply::Farewell | Reply::Error(_) => None,
        }
    }

    /// The fault class, if evaluation failed.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Reply::Error(error) => Some(error.kind()),
            Reply::Greeting | Reply::Farewell | Reply::Result(_) => None,
        }
    }

    /// Whether this reply ends the conversation.
    pub fn is_farewell(&self) -> bool {
        matches!(self, Reply::Farewell)
    }
}

impl Display for Reply {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Reply::Greeting => write!(f, "{GREETING_REPLY}"),
            Reply::Farewell => write!(f, "{FAREWELL_REPLY}"),
            Reply::Result(value) => write!(f, "The result is {}", format_value(*value)),
            Reply::Error(_) => write!(f, "{INVALID_REPLY}"),
        }
    }
}

/// Render a result the way the transcript shows it: integral values keep a
/// trailing `.0` (`25.0`), others use the shortest round-trip form, and
/// exponents carry a sign and at least two digits (`1e+16`, `2.5e-07`).
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let shortest = format!("{value:?}");
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
