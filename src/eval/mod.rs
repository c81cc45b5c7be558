//! Expression evaluator - validation, arithmetic and rounding
//!
//! Two entry points drive the calculator:
//!
//! - [`commit`] runs the full pipeline for the `=` action and classifies
//!   failures into [`CalcError`] variants shown to the user.
//! - [`preview`] is the best-effort live result shown while typing; it never
//!   reports why it failed.
//!
//! Arithmetic goes through a dedicated recursive-descent evaluator that only
//! understands numbers, `+ - * /` and parentheses.

mod error;
mod format;
mod lexer;
mod parser;

use std::borrow::Cow;

pub use error::{CalcError, ParseError, ParseErrorKind, Result};
pub use format::{format_number, round, ROUNDING_SCALE};
pub use lexer::{tokenize, Lexeme, Spanned};
pub use parser::{parse_and_eval, MAX_DEPTH};

/// Check that every `(` is closed and no `)` comes before its opener
///
/// The empty string is balanced.
pub fn check_balance(expr: &str) -> bool {
    let mut depth: i64 = 0;
    for ch in expr.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Replace the `÷` and `×` glyphs with `/` and `*`
pub fn normalize(expr: &str) -> Cow<'_, str> {
    if expr.contains(['÷', '×']) {
        Cow::Owned(expr.replace('÷', "/").replace('×', "*"))
    } else {
        Cow::Borrowed(expr)
    }
}

/// Check the arithmetic character whitelist: digits, `+ - * / . ( )` and whitespace
///
/// The empty string does not pass.
pub fn is_whitelisted(expr: &str) -> bool {
    !expr.is_empty()
        && expr.chars().all(|c| {
            c.is_ascii_digit()
                || matches!(c, '+' | '-' | '*' | '/' | '.' | '(' | ')')
                || c.is_whitespace()
        })
}

/// Evaluate an expression to a raw (unrounded) value
///
/// The result may be infinite or NaN (`1/0`, `0/0`); finiteness is the
/// caller's concern.
pub fn evaluate(expr: &str) -> Result<f64> {
    let expr = normalize(expr);
    if !is_whitelisted(&expr) {
        return Err(CalcError::InvalidCharacters);
    }

    parse_and_eval(&expr).map_err(|e| {
        tracing::trace!(expr = %expr, error = %e, "evaluation failed");
        CalcError::from(e)
    })
}

/// Full evaluation for the `=` action
///
/// Checks grouping balance, evaluates, rejects non-finite results and rounds.
/// Every evaluation failure, including whitelist violations, is reported as
/// [`CalcError::MalformedExpression`].
pub fn commit(expr: &str) -> Result<f64> {
    #[cfg(feature = "profile-tracing")]
    let _span = tracing::trace_span!("commit", len = expr.len()).entered();

    if !check_balance(expr) {
        return Err(CalcError::UnbalancedGrouping);
    }

    let value = evaluate(expr).map_err(|_| CalcError::MalformedExpression)?;

    if !value.is_finite() {
        return Err(CalcError::NonFiniteResult);
    }

    Ok(round(value))
}

/// Best-effort rounded value for the live preview
pub fn preview(expr: &str) -> Option<f64> {
    evaluate(expr)
        .ok()
        .filter(|value| value.is_finite())
        .map(round)
}
