pub mod error;
pub mod interpreter;
pub mod parser;
mod session;

pub use error::{ErrorKind, EvalError};
pub use interpreter::{Postfix, evaluate, evaluate_postfix, evaluate_strict, to_postfix};
pub use parser::{Operator, Token, TokenStream, tokenize, tokenize_strict};
pub use session::{Calculator, Reply, WELCOME, format_value};
