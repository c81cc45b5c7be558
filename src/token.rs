//! Input tokens - the discrete symbols appended to the expression buffer

use std::fmt;

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Canonical buffer character for this operator
    pub const fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Parse an operator character, accepting the `×` and `÷` glyphs
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }
}

/// Returns true for the four binary operator characters as stored in the buffer
#[inline]
pub fn is_operator_char(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/')
}

/// Returns true for characters that end a numeric run (operators and grouping)
#[inline]
pub fn is_number_boundary(ch: char) -> bool {
    is_operator_char(ch) || ch == '(' || ch == ')'
}

/// A single keypad token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A decimal digit 0-9
    Digit(u8),
    /// One of `+ - * /`
    Operator(Operator),
    /// `.`
    DecimalPoint,
    /// `(`
    OpenGroup,
    /// `)`
    CloseGroup,
}

impl Token {
    /// Create a digit token; values above 9 are rejected
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Token::Digit(value))
    }

    /// Parse a token from a typed character
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => Some(Token::Digit(ch as u8 - b'0')),
            '.' => Some(Token::DecimalPoint),
            '(' => Some(Token::OpenGroup),
            ')' => Some(Token::CloseGroup),
            _ => Operator::from_char(ch).map(Token::Operator),
        }
    }

    /// The character this token contributes to the buffer
    pub fn as_char(self) -> char {
        match self {
            Token::Digit(d) => char::from(b'0' + d.min(9)),
            Token::Operator(op) => op.as_char(),
            Token::DecimalPoint => '.',
            Token::OpenGroup => '(',
            Token::CloseGroup => ')',
        }
    }

    /// Check if this token is a binary operator
    pub fn is_operator(self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
