//! Expression interpreter.
//!
//! Converts token streams to postfix order with the shunting-yard algorithm
//! and reduces postfix sequences to a single value on an operand stack.

mod evaluator;
mod postfix;

pub use evaluator::{evaluate, evaluate_postfix, evaluate_strict};
pub use postfix::{Postfix, to_postfix};
