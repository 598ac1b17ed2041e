//! Integration tests for shunting-yard conversion.

use stackcalc::{Operator, Token, to_postfix, tokenize};

fn postfix_of(expression: &str) -> String {
    to_postfix(&tokenize(expression)).to_string()
}

// =============================================================================
// Precedence and associativity
// =============================================================================

#[test]
fn precedence_table_is_fixed() {
    assert_eq!(Operator::Add.precedence(), 1);
    assert_eq!(Operator::Subtract.precedence(), 1);
    assert_eq!(Operator::Multiply.precedence(), 2);
    assert_eq!(Operator::Divide.precedence(), 2);
}

#[test]
fn higher_precedence_binds_first() {
    insta::assert_snapshot!(postfix_of("10 + 5 * 3"), @"10 5 3 * +");
}

#[test]
fn equal_precedence_is_left_associative() {
    insta::assert_snapshot!(postfix_of("8 - 3 - 2"), @"8 3 - 2 -");
    insta::assert_snapshot!(postfix_of("8 / 4 * 2"), @"8 4 / 2 *");
}

#[test]
fn parentheses_override_precedence() {
    insta::assert_snapshot!(postfix_of("(8 + 2) * 5"), @"8 2 + 5 *");
}

#[test]
fn nested_parentheses() {
    insta::assert_snapshot!(postfix_of("2 * ((3 + 4) - 1) / 6"), @"2 3 4 + 1 - * 6 /");
}

// =============================================================================
// Malformed input passes through
// =============================================================================

#[test]
fn unmatched_close_paren_is_dropped() {
    insta::assert_snapshot!(postfix_of("2 + 3) * 4"), @"2 3 + 4 *");
}

#[test]
fn unmatched_open_paren_is_flushed() {
    let postfix = to_postfix(&tokenize("(2 + 3"));
    assert_eq!(
        *postfix,
        vec![
            Token::Number(2.0),
            Token::Number(3.0),
            Token::Operator(Operator::Add),
            Token::LeftParen,
        ]
    );
}

#[test]
fn doubled_operator_is_kept() {
    insta::assert_snapshot!(postfix_of("5 + + 3"), @"5 + 3 +");
}

#[test]
fn leading_minus_is_kept() {
    insta::assert_snapshot!(postfix_of("-5"), @"5 -");
}
