//! Expression scanner using winnow.
//!
//! At each position the scanner matches either a run of digits with at most
//! one decimal point, or a single character from `+ - * / ( )`. The lenient
//! scanner drops anything else; the strict scanner only tolerates whitespace.

use tracing::trace;
use winnow::ascii::{digit0, digit1};
use winnow::combinator::{alt, opt, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::token::{Operator, Token, TokenStream};
use crate::error::EvalError;

/// Tokenize an expression, silently skipping unrecognized characters.
///
/// `"-5"` yields an operator followed by a number; there is no sign token.
/// `".5"` yields `5` because the leading `.` is skipped.
pub fn tokenize(input: &str) -> TokenStream {
    let mut remaining = input;
    // `any` absorbs every character the grammar rejects, so this only stops
    // at end of input.
    let scanned = lenient_tokens(&mut remaining).unwrap_or_default();
    let tokens: Vec<Token> = scanned.into_iter().flatten().collect();
    trace!("tokenized {input:?} into {} tokens", tokens.len());
    TokenStream(tokens)
}

/// Tokenize an expression, rejecting any character other than whitespace that
/// is not part of a token.
///
/// # Errors
///
/// Returns [`EvalError::UnexpectedCharacter`] with the byte offset of the
/// first offending character.
pub fn tokenize_strict(input: &str) -> Result<TokenStream, EvalError> {
    let mut remaining = input;
    match strict_tokens(&mut remaining) {
        Ok(tokens) if remaining.is_empty() => Ok(TokenStream(tokens)),
        _ => Err(EvalError::UnexpectedCharacter {
            character: remaining.chars().next().unwrap_or('?'),
            offset: input.len() - remaining.len(),
        }),
    }
}

fn lenient_tokens(input: &mut &str) -> ModalResult<Vec<Option<Token>>> {
    repeat(0.., alt((token.map(Some), any.value(None)))).parse_next(input)
}

fn strict_tokens(input: &mut &str) -> ModalResult<Vec<Token>> {
    terminated(repeat(0.., preceded(ws, token)), ws).parse_next(input)
}

/// Parse a single token.
fn token(input: &mut &str) -> ModalResult<Token> {
    alt((number, paren, operator)).parse_next(input)
}

/// Parse a decimal literal: digits, optionally followed by `.` and more digits.
fn number(input: &mut &str) -> ModalResult<Token> {
    (digit1, opt(('.', digit0)))
        .take()
        .try_map(|literal: &str| literal.parse::<f64>())
        .map(Token::Number)
        .parse_next(input)
}

fn paren(input: &mut &str) -> ModalResult<Token> {
    alt(('('.value(Token::LeftParen), ')'.value(Token::RightParen))).parse_next(input)
}

fn operator(input: &mut &str) -> ModalResult<Token> {
    any.verify_map(Operator::from_symbol)
        .map(Token::Operator)
        .parse_next(input)
}

/// Parse optional whitespace.
fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., char::is_whitespace).void().parse_next(input)
}
