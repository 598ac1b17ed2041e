//! Miette diagnostic for characters rejected by strict tokenization.

use miette::{Diagnostic, NamedSource, SourceSpan};
use stackcalc::EvalError;
use thiserror::Error;

/// A miette-compatible diagnostic pointing at an unexpected character.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("unexpected character '{character}' in expression")]
#[diagnostic(
    code(stackcalc::unexpected_character),
    help("strict mode accepts digits, '.', + - * / ( ) and whitespace")
)]
pub struct ExpressionDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("not part of an expression")]
    span: SourceSpan,

    character: char,
}

impl ExpressionDiagnostic {
    /// Build a diagnostic for `err`, if it points at a location in the input.
    pub fn from_eval_error(expression: &str, err: &EvalError) -> Option<Self> {
        let EvalError::UnexpectedCharacter { character, offset } = err else {
            return None;
        };

        // Clamp to the input to avoid a miette panic on out-of-bounds spans
        let offset = (*offset).min(expression.len());

        Some(ExpressionDiagnostic {
            src: NamedSource::new("input", expression.to_string()),
            span: (offset, character.len_utf8()).into(),
            character: *character,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_only_for_located_errors() {
        assert!(ExpressionDiagnostic::from_eval_error("4 / 0", &EvalError::DivisionByZero).is_none());

        let err = EvalError::UnexpectedCharacter {
            character: 'x',
            offset: 2,
        };
        let diagnostic = ExpressionDiagnostic::from_eval_error("2 x 3", &err).unwrap();
        assert_eq!(diagnostic.span, SourceSpan::from((2, 1)));
        assert_eq!(diagnostic.to_string(), "unexpected character 'x' in expression");
    }
}
