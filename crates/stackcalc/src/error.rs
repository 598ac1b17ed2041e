//! Error types for expression evaluation.

use serde::Serialize;
use thiserror::Error;

use crate::parser::Operator;

/// An error that occurred while evaluating an expression.
///
/// Only the postfix reduction stage produces these in lenient mode. Strict
/// tokenization adds [`EvalError::UnexpectedCharacter`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The right operand of `/` was exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An operator found fewer than two values on the operand stack.
    #[error("operator '{operator}' is missing an operand")]
    MissingOperand { operator: Operator },

    /// More than one value remained after reduction.
    #[error("expression leaves {count} values instead of one")]
    ExcessOperands { count: usize },

    /// There was nothing to evaluate.
    #[error("expression is empty")]
    EmptyExpression,

    /// An unmatched `(` survived into the postfix sequence.
    #[error("unbalanced parenthesis")]
    StrayParenthesis,

    /// Strict tokenization met a character outside the expression grammar.
    #[error("unexpected character '{character}' at offset {offset}")]
    UnexpectedCharacter { character: char, offset: usize },
}

/// The two fault classes callers distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    DivisionByZero,
    InvalidExpression,
}

impl EvalError {
    /// Classify this error. Everything except division by zero is a
    /// malformed expression.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::DivisionByZero => ErrorKind::DivisionByZero,
            EvalError::MissingOperand { .. }
            | EvalError::ExcessOperands { .. }
            | EvalError::EmptyExpression
            | EvalError::StrayParenthesis
            | EvalError::UnexpectedCharacter { .. } => ErrorKind::InvalidExpression,
        }
    }
}
