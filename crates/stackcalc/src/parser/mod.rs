//! Expression tokenizer.
//!
//! Splits raw text into numbers, the four arithmetic operators and
//! parentheses. Classification happens once here so later stages never
//! re-inspect source text.

mod token;
mod tokenizer;

pub use token::{Operator, Token, TokenStream};
pub use tokenizer::{tokenize, tokenize_strict};
