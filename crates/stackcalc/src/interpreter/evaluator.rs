//! Postfix reduction on an operand stack.

use tracing::debug;

use crate::error::EvalError;
use crate::interpreter::postfix::to_postfix;
use crate::parser::{Token, tokenize, tokenize_strict};

/// Evaluate an infix expression, skipping characters outside the grammar.
///
/// This is the main entry point: tokenize, convert to postfix, reduce.
///
/// # Errors
///
/// Returns [`EvalError::DivisionByZero`] for a zero divisor and one of the
/// invalid-expression variants for anything malformed.
///
/// # Example
///
/// ```
/// use stackcalc::evaluate;
///
/// assert_eq!(evaluate("10 + 5 * 3").unwrap(), 25.0);
/// assert!(evaluate("4 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(expression);
    evaluate_postfix(&to_postfix(&tokens))
}

/// Evaluate an infix expression, rejecting unrecognized characters up front.
///
/// # Errors
///
/// Same as [`evaluate`], plus [`EvalError::UnexpectedCharacter`].
pub fn evaluate_strict(expression: &str) -> Result<f64, EvalError> {
    let tokens = tokenize_strict(expression)?;
    evaluate_postfix(&to_postfix(&tokens))
}

/// Reduce a postfix sequence to a single value.
///
/// Each operator pops the right operand first, then the left, and pushes
/// `left op right`. Exactly one value must remain at the end.
///
/// # Errors
///
/// Returns an error if:
/// - an operator finds fewer than two operands
/// - a divisor is exactly zero
/// - a parenthesis is present
/// - zero or several values remain
pub fn evaluate_postfix(postfix: &[Token]) -> Result<f64, EvalError> {
    let mut operands: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match *token {
            Token::Number(value) => operands.push(value),
            Token::Operator(operator) => {
                let (Some(right), Some(left)) = (operands.pop(), operands.pop()) else {
                    debug!("operand stack underflow at '{operator}'");
                    return Err(EvalError::MissingOperand { operator });
                };
                operands.push(operator.apply(left, right)?);
            }
            Token::LeftParen | Token::RightParen => return Err(EvalError::StrayParenthesis),
        }
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        [] => Err(EvalError::EmptyExpression),
        rest => Err(EvalError::ExcessOperands { count: rest.len() }),
    }
}
