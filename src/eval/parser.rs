//! Recursive-descent evaluator over `+ - * / ( )`
//!
//! Grammar:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! Values are computed while parsing; no tree is built. Operators of equal
//! precedence associate to the left. Division follows IEEE 754, so `1/0`
//! yields infinity and the caller decides what a non-finite value means.

use super::error::{ParseError, ParseErrorKind};
use super::lexer::{tokenize, Lexeme, Spanned};

/// Maximum nesting of groups and unary signs
pub const MAX_DEPTH: usize = 256;

/// Parse and evaluate an arithmetic expression
pub fn parse_and_eval(src: &str) -> Result<f64, ParseError> {
    let tokens = tokenize(src)?;
    let mut parser = Parser {
        tokens: &tokens,
        index: 0,
        depth: 0,
        end: src.len(),
    };

    let value = parser.expr()?;

    if let Some(extra) = parser.peek() {
        return Err(ParseError::new(
            ParseErrorKind::TrailingInput,
            extra.position,
        ));
    }

    Ok(value)
}

struct Parser<'a> {
    tokens: &'a [Spanned],
    index: usize,
    depth: usize,
    /// Byte length of the source, reported for errors at end of input
    end: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Spanned> {
        self.tokens.get(self.index)
    }

    fn next(&mut self) -> Option<&'a Spanned> {
        let tok = self.tokens.get(self.index);
        if tok.is_some() {
            self.index += 1;
        }
        tok
    }

    fn descend(&mut self, position: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::new(ParseErrorKind::TooDeep, position));
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<f64, ParseError> {
        let mut acc = self.term()?;
        while let Some(tok) = self.peek() {
            match tok.lexeme {
                Lexeme::Plus => {
                    self.index += 1;
                    acc += self.term()?;
                }
                Lexeme::Minus => {
                    self.index += 1;
                    acc -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    fn term(&mut self) -> Result<f64, ParseError> {
        let mut acc = self.unary()?;
        while let Some(tok) = self.peek() {
            match tok.lexeme {
                Lexeme::Star => {
                    self.index += 1;
                    acc *= self.unary()?;
                }
                Lexeme::Slash => {
                    self.index += 1;
                    acc /= self.unary()?;
                }
                _ => break,
            }
        }
        Ok(acc)
    }

    fn unary(&mut self) -> Result<f64, ParseError> {
        match self.peek() {
            Some(tok) if matches!(tok.lexeme, Lexeme::Plus | Lexeme::Minus) => {
                self.index += 1;
                self.descend(tok.position)?;
                let operand = self.unary()?;
                self.depth -= 1;
                Ok(if tok.lexeme == Lexeme::Minus {
                    -operand
                } else {
                    operand
                })
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64, ParseError> {
        let Some(tok) = self.next() else {
            return Err(ParseError::new(ParseErrorKind::UnexpectedEnd, self.end));
        };

        match tok.lexeme {
            Lexeme::Number(value) => Ok(value),
            Lexeme::LParen => {
                self.descend(tok.position)?;
                let value = self.expr()?;
                self.depth -= 1;
                match self.next() {
                    Some(close) if close.lexeme == Lexeme::RParen => Ok(value),
                    Some(other) => Err(ParseError::new(
                        ParseErrorKind::TrailingInput,
                        other.position,
                    )),
                    None => Err(ParseError::new(
                        ParseErrorKind::UnclosedGroup,
                        tok.position,
                    )),
                }
            }
            _ => Err(ParseError::new(
                ParseErrorKind::ExpectedOperand,
                tok.position,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(src: &str) -> f64 {
        parse_and_eval(src).unwrap()
    }

    fn kind(src: &str) -> ParseErrorKind {
        parse_and_eval(src).unwrap_err().kind
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2+3*4"), 14.0);
        assert_eq!(eval("(2+3)*4"), 20.0);
        assert_eq!(eval("10-4/2"), 8.0);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(eval("10-4-3"), 3.0);
        assert_eq!(eval("100/10/5"), 2.0);
        assert_eq!(eval("2*3/4"), 1.5);
    }

    #[test]
    fn test_unary_signs() {
        assert_eq!(eval("-3"), -3.0);
        assert_eq!(eval("+3"), 3.0);
        assert_eq!(eval("2*-3"), -6.0);
        assert_eq!(eval("-(2+3)"), -5.0);
        assert_eq!(eval("-(-3)"), 3.0);
        assert_eq!(eval("2- -3"), 5.0);
    }

    #[test]
    fn test_division_by_zero_is_not_a_parse_error() {
        assert!(eval("1/0").is_infinite());
        assert!(eval("0/0").is_nan());
    }

    #[test]
    fn test_dangling_operator() {
        assert_eq!(kind("5+"), ParseErrorKind::UnexpectedEnd);
        assert_eq!(kind("*5"), ParseErrorKind::ExpectedOperand);
    }

    #[test]
    fn test_empty_group() {
        assert_eq!(kind("()"), ParseErrorKind::ExpectedOperand);
    }

    #[test]
    fn test_unclosed_group() {
        assert_eq!(kind("(2+3"), ParseErrorKind::UnclosedGroup);
    }

    #[test]
    fn test_stray_close_and_juxtaposition() {
        assert_eq!(kind("2+3)"), ParseErrorKind::TrailingInput);
        assert_eq!(kind("2(3)"), ParseErrorKind::TrailingInput);
        assert_eq!(kind("(2)(3)"), ParseErrorKind::TrailingInput);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(kind(""), ParseErrorKind::UnexpectedEnd);
        assert_eq!(kind("   "), ParseErrorKind::UnexpectedEnd);
    }

    #[test]
    fn test_nesting_limit() {
        let deep = format!("{}1{}", "(".repeat(MAX_DEPTH + 1), ")".repeat(MAX_DEPTH + 1));
        assert_eq!(kind(&deep), ParseErrorKind::TooDeep);

        let ok = format!("{}1{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(eval(&ok), 1.0);
    }
}
