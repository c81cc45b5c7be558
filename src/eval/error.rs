//! Error types for expression evaluation

use std::fmt;

use thiserror::Error;

/// Failures surfaced by the evaluator
///
/// The `Display` text is the message shown to the user on a failed commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Grouping characters do not nest or close correctly
    #[error("Invalid brackets")]
    UnbalancedGrouping,

    /// The expression is not valid arithmetic (dangling operator, empty group, ...)
    #[error("Invalid expression")]
    MalformedExpression,

    /// Division by zero, 0/0, or overflow to infinity
    #[error("Cannot divide by zero")]
    NonFiniteResult,

    /// The expression contains characters outside the arithmetic whitelist
    #[error("Invalid characters in expression")]
    InvalidCharacters,
}

pub type Result<T> = std::result::Result<T, CalcError>;

/// What went wrong while tokenizing or parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ended where an operand was expected
    UnexpectedEnd,
    /// A token appeared where an operand was expected
    ExpectedOperand,
    /// A `(` without its `)`
    UnclosedGroup,
    /// Tokens left over after a complete expression
    TrailingInput,
    /// A number with more than one `.` or no digits at all
    InvalidNumber,
    /// `++` or `--` written without a space in between
    IncrementOperator,
    /// A character the lexer does not know
    UnexpectedChar(char),
    /// Grouping nested deeper than the parser allows
    TooDeep,
}

/// A parse failure with the byte offset where it was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ParseErrorKind::UnexpectedEnd => write!(f, "unexpected end of input"),
            ParseErrorKind::ExpectedOperand => {
                write!(f, "expected a number or '(' at {}", self.position)
            }
            ParseErrorKind::UnclosedGroup => write!(f, "unclosed '(' at {}", self.position),
            ParseErrorKind::TrailingInput => {
                write!(f, "unexpected input after expression at {}", self.position)
            }
            ParseErrorKind::InvalidNumber => write!(f, "invalid number at {}", self.position),
            ParseErrorKind::IncrementOperator => {
                write!(f, "repeated sign operator at {}", self.position)
            }
            ParseErrorKind::UnexpectedChar(ch) => {
                write!(f, "unexpected character {:?} at {}", ch, self.position)
            }
            ParseErrorKind::TooDeep => write!(f, "grouping nested too deeply"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for CalcError {
    fn from(_: ParseError) -> Self {
        CalcError::MalformedExpression
    }
}
