//! Token-level validation for the expression buffer.
//!
//! Rules are checked against the buffer's trailing state before a token is
//! appended. A rejected token is dropped silently by the accumulator.

use std::fmt;

use crate::token::{is_number_boundary, is_operator_char, Operator, Token};

use super::state::RESET_INPUT;

/// Why a token was not appended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    /// Binary operator right after another binary operator
    RepeatedOperator,
    /// Second `.` inside the same number
    SecondDecimalPoint,
    /// Binary operator other than `-` as the first character
    LeadingOperator,
}

impl fmt::Display for TokenRejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenRejection::RepeatedOperator => write!(f, "operator follows operator"),
            TokenRejection::SecondDecimalPoint => write!(f, "number already has a decimal point"),
            TokenRejection::LeadingOperator => write!(f, "expression cannot start with operator"),
        }
    }
}

/// The maximal run of digits and `.` at the end of the buffer
pub fn trailing_number(buffer: &str) -> &str {
    match buffer.rfind(is_number_boundary) {
        Some(idx) => &buffer[idx + 1..],
        None => buffer,
    }
}

/// Check whether `token` may be appended to `buffer`
///
/// Note that an operator after an operator is rejected even when it is a
/// `-` meant as a sign, so `5*-3` cannot be typed key by key.
pub fn validate_token(buffer: &str, token: Token) -> Result<(), TokenRejection> {
    match token {
        Token::Operator(op) => {
            if buffer.chars().last().is_some_and(is_operator_char) {
                return Err(TokenRejection::RepeatedOperator);
            }
            if buffer == RESET_INPUT && op != Operator::Subtract {
                return Err(TokenRejection::LeadingOperator);
            }
            Ok(())
        }
        Token::DecimalPoint if trailing_number(buffer).contains('.') => {
            Err(TokenRejection::SecondDecimalPoint)
        }
        _ => Ok(()),
    }
}
