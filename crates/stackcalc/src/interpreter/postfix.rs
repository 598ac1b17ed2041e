//! Infix to postfix conversion.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;

use tracing::trace;

use crate::parser::Token;

/// Tokens in postfix (Reverse Polish) order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Postfix(pub Vec<Token>);

impl Deref for Postfix {
    type Target = Vec<Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Postfix {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, token) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Converts infix tokens to postfix order using the shunting-yard algorithm.
///
/// Operators of equal or higher precedence are popped before a new operator
/// is pushed, so same-rank operators associate to the left. This stage never
/// fails:
/// - a `)` without a matching `(` empties the operator stack and is dropped
/// - an unmatched `(` is flushed into the output at the end, where the
///   evaluator rejects it
pub fn to_postfix(tokens: &[Token]) -> Postfix {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for &token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::LeftParen => stack.push(token),
            Token::RightParen => {
                while let Some(top) = stack.pop() {
                    if top == Token::LeftParen {
                        break;
                    }
                    output.push(top);
                }
            }
            Token::Operator(operator) => {
                while let Some(&Token::Operator(top)) = stack.last() {
                    if top.precedence() < operator.precedence() {
                        break;
                    }
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(token);
            }
        }
    }

    while let Some(top) = stack.pop() {
        output.push(top);
    }

    let postfix = Postfix(output);
    trace!("postfix: {postfix}");
    postfix
}
