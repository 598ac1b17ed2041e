//! CLI command implementations.

mod batch;
mod chat;
mod eval;

pub use batch::{run_batch, BatchArgs};
pub use chat::{run_chat, ChatArgs};
pub use eval::{run_eval, EvalArgs};
