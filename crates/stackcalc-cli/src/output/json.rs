//! JSON shape for calculator replies.

use serde::Serialize;
use stackcalc::{ErrorKind, Reply};

/// JSON output for a single reply.
#[derive(Debug, Serialize)]
pub struct ReplyJson<'a> {
    pub input: &'a str,
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl<'a> ReplyJson<'a> {
    pub fn new(input: &'a str, reply: &Reply) -> Self {
        let cause = match reply {
            Reply::Error(error) => Some(error.to_string()),
            Reply::Greeting | Reply::Farewell | Reply::Result(_) => None,
        };
        ReplyJson {
            input,
            reply: reply.to_string(),
            value: reply.value(),
            error: reply.error_kind(),
            cause,
        }
    }
}
