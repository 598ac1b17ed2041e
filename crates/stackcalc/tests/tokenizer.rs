//! Integration tests for expression tokenization.

use stackcalc::{EvalError, Operator, Token, tokenize, tokenize_strict};

// =============================================================================
// Lenient scanning
// =============================================================================

#[test]
fn tokenize_simple_expression() {
    let tokens = tokenize("10 + 5 * 3");
    assert_eq!(
        *tokens,
        vec![
            Token::Number(10.0),
            Token::Operator(Operator::Add),
            Token::Number(5.0),
            Token::Operator(Operator::Multiply),
            Token::Number(3.0),
        ]
    );
}

#[test]
fn tokenize_parentheses_and_decimals() {
    let tokens = tokenize("(8.25+2)/0.5");
    assert_eq!(
        *tokens,
        vec![
            Token::LeftParen,
            Token::Number(8.25),
            Token::Operator(Operator::Add),
            Token::Number(2.0),
            Token::RightParen,
            Token::Operator(Operator::Divide),
            Token::Number(0.5),
        ]
    );
}

#[test]
fn tokenize_empty_string() {
    assert!(tokenize("").is_empty());
}

#[test]
fn tokenize_skips_unrecognized_characters() {
    let tokens = tokenize("what is 2 x 3?");
    assert_eq!(*tokens, vec![Token::Number(2.0), Token::Number(3.0)]);
}

#[test]
fn tokenize_consecutive_operators_stay_separate() {
    let tokens = tokenize("5 ++ 3");
    assert_eq!(
        *tokens,
        vec![
            Token::Number(5.0),
            Token::Operator(Operator::Add),
            Token::Operator(Operator::Add),
            Token::Number(3.0),
        ]
    );
}

#[test]
fn tokenize_minus_is_never_a_sign() {
    let tokens = tokenize("-5");
    assert_eq!(
        *tokens,
        vec![Token::Operator(Operator::Subtract), Token::Number(5.0)]
    );
}

#[test]
fn tokenize_leading_point_is_skipped() {
    assert_eq!(*tokenize(".5"), vec![Token::Number(5.0)]);
}

#[test]
fn tokenize_second_decimal_point_splits_number() {
    assert_eq!(
        *tokenize("1.2.3"),
        vec![Token::Number(1.2), Token::Number(3.0)]
    );
}

#[test]
fn tokenize_trailing_point() {
    assert_eq!(*tokenize("5."), vec![Token::Number(5.0)]);
}

// =============================================================================
// Strict scanning
// =============================================================================

#[test]
fn strict_accepts_whitespace() {
    let tokens = tokenize_strict("  ( 8 + 2 ) * 5 ").unwrap();
    assert_eq!(tokens, tokenize("(8+2)*5"));
}

#[test]
fn strict_rejects_letters_with_offset() {
    let err = tokenize_strict("2 x 3").unwrap_err();
    assert_eq!(
        err,
        EvalError::UnexpectedCharacter {
            character: 'x',
            offset: 2,
        }
    );
}

#[test]
fn strict_reports_byte_offset_after_multibyte_text() {
    let err = tokenize_strict("1 + é").unwrap_err();
    assert_eq!(
        err,
        EvalError::UnexpectedCharacter {
            character: 'é',
            offset: 4,
        }
    );
}

#[test]
fn strict_rejects_lone_decimal_point() {
    let err = tokenize_strict(".5").unwrap_err();
    assert_eq!(
        err,
        EvalError::UnexpectedCharacter {
            character: '.',
            offset: 0,
        }
    );
}

// =============================================================================
// Token rendering
// =============================================================================

#[test]
fn tokens_display_as_source_text() {
    let rendered: Vec<String> = tokenize("(1.5*2)").iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["(", "1.5", "*", "2", ")"]);
}

#[test]
fn operator_symbols_round_trip() {
    for symbol in ['+', '-', '*', '/'] {
        let operator = Operator::from_symbol(symbol).unwrap();
        assert_eq!(operator.symbol(), symbol);
    }
    assert_eq!(Operator::from_symbol('^'), None);
}
