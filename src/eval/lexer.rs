//! Tokenizer for arithmetic expressions

use super::error::{ParseError, ParseErrorKind};

/// A lexical unit of an arithmetic expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lexeme {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// A lexeme with the byte offset it starts at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spanned {
    pub lexeme: Lexeme,
    pub position: usize,
}

/// Split an expression into lexemes, skipping whitespace
///
/// Numbers are plain decimals: `12`, `1.5`, `.5` and `5.` are accepted,
/// `1.2.3` and a lone `.` are not. A sign character immediately followed by
/// the same sign (`--`, `++`) is rejected.
pub fn tokenize(src: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut out = Vec::with_capacity(src.len());
    let mut chars = src.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        let lexeme = match ch {
            c if c.is_whitespace() => continue,
            '+' | '-' => {
                if chars.peek().is_some_and(|&(_, next)| next == ch) {
                    return Err(ParseError::new(ParseErrorKind::IncrementOperator, pos));
                }
                if ch == '+' {
                    Lexeme::Plus
                } else {
                    Lexeme::Minus
                }
            }
            '*' => Lexeme::Star,
            '/' => Lexeme::Slash,
            '(' => Lexeme::LParen,
            ')' => Lexeme::RParen,
            '0'..='9' | '.' => {
                let mut end = pos + ch.len_utf8();
                while let Some(&(next_pos, next)) = chars.peek() {
                    if next.is_ascii_digit() || next == '.' {
                        end = next_pos + next.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                Lexeme::Number(parse_number(&src[pos..end], pos)?)
            }
            other => return Err(ParseError::new(ParseErrorKind::UnexpectedChar(other), pos)),
        };
        out.push(Spanned {
            lexeme,
            position: pos,
        });
    }

    Ok(out)
}

fn parse_number(text: &str, position: usize) -> Result<f64, ParseError> {
    let dots = text.bytes().filter(|&b| b == b'.').count();
    let has_digit = text.bytes().any(|b| b.is_ascii_digit());
    if dots > 1 || !has_digit {
        return Err(ParseError::new(ParseErrorKind::InvalidNumber, position));
    }
    text.parse::<f64>()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidNumber, position))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(src: &str) -> Vec<Lexeme> {
        tokenize(src).unwrap().into_iter().map(|s| s.lexeme).collect()
    }

    #[test]
    fn test_simple_expression() {
        assert_eq!(
            lexemes("12+3.5"),
            vec![Lexeme::Number(12.0), Lexeme::Plus, Lexeme::Number(3.5)]
        );
    }

    #[test]
    fn test_whitespace_skipped() {
        assert_eq!(
            lexemes(" ( 1 * 2 ) "),
            vec![
                Lexeme::LParen,
                Lexeme::Number(1.0),
                Lexeme::Star,
                Lexeme::Number(2.0),
                Lexeme::RParen
            ]
        );
    }

    #[test]
    fn test_partial_decimals() {
        assert_eq!(lexemes(".5"), vec![Lexeme::Number(0.5)]);
        assert_eq!(lexemes("5."), vec![Lexeme::Number(5.0)]);
    }

    #[test]
    fn test_positions_are_byte_offsets() {
        let spans = tokenize("10 / 2").unwrap();
        let positions: Vec<usize> = spans.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0, 3, 5]);
    }

    #[test]
    fn test_invalid_numbers() {
        let err = tokenize("1.2.3").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidNumber);
        assert_eq!(tokenize(".").unwrap_err().kind, ParseErrorKind::InvalidNumber);
    }

    #[test]
    fn test_doubled_signs_rejected() {
        assert_eq!(
            tokenize("2--3").unwrap_err().kind,
            ParseErrorKind::IncrementOperator
        );
        assert_eq!(
            tokenize("2++3").unwrap_err().kind,
            ParseErrorKind::IncrementOperator
        );
        // Mixed or spaced signs are fine
        assert!(tokenize("2+-3").is_ok());
        assert!(tokenize("2- -3").is_ok());
    }

    #[test]
    fn test_unknown_char() {
        let err = tokenize("2^3").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedChar('^'));
        assert_eq!(err.position, 1);
    }
}
