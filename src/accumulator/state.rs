//! Session - the expression buffer and everything committed from it

use std::fmt;

use crate::eval::{self, format_number};
use crate::token::Token;

use super::constraints::validate_token;

/// Canonical empty/reset buffer
pub const RESET_INPUT: &str = "0";

/// History label before anything has been committed
pub const NO_HISTORY: &str = "None";

/// The most recent committed evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Buffer contents at the time of the commit
    pub expression: String,
    /// Rounded result
    pub result: f64,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.expression, format_number(self.result))
    }
}

/// Calculator session state
///
/// Created once at startup and mutated in place by every accumulator
/// operation and every commit.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The expression buffer, never empty
    pub current_input: String,
    /// Next numeric token replaces the buffer instead of appending
    pub is_fresh_input: bool,
    /// Most recently committed result
    pub last_result: Option<f64>,
    /// Most recent committed evaluation
    pub history: Option<HistoryEntry>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            current_input: RESET_INPUT.to_string(),
            is_fresh_input: true,
            last_result: None,
            history: None,
        }
    }

    /// Start a session from an existing buffer (not fresh)
    pub fn with_input(input: impl Into<String>) -> Self {
        let mut input = input.into();
        if input.is_empty() {
            input = RESET_INPUT.to_string();
        }
        Self {
            current_input: input,
            is_fresh_input: false,
            last_result: None,
            history: None,
        }
    }

    /// Append a token, replacing the buffer when it is fresh or `"0"`
    ///
    /// Returns false when the token was rejected; the buffer is then unchanged.
    pub fn append_token(&mut self, token: Token) -> bool {
        let ch = token.as_char();

        if self.is_fresh_input && token != Token::OpenGroup && !token.is_operator() {
            self.current_input = ch.to_string();
            self.is_fresh_input = false;
            return true;
        }

        self.is_fresh_input = false;

        if self.current_input == RESET_INPUT && token != Token::DecimalPoint {
            self.current_input = ch.to_string();
            return true;
        }

        match validate_token(&self.current_input, token) {
            Ok(()) => {
                self.current_input.push(ch);
                true
            }
            Err(reason) => {
                tracing::trace!(
                    token = %token,
                    buffer = %self.current_input,
                    %reason,
                    "token rejected"
                );
                false
            }
        }
    }

    /// Drop the last character, or reset to `"0"` when only one is left
    pub fn delete_last(&mut self) {
        if self.current_input.chars().count() > 1 {
            self.current_input.pop();
        } else {
            self.current_input = RESET_INPUT.to_string();
        }
    }

    /// Clear the buffer and mark the next input as fresh
    pub fn reset(&mut self) {
        self.current_input = RESET_INPUT.to_string();
        self.is_fresh_input = true;
    }

    /// Record a committed result and make it the new buffer
    pub fn commit_result(&mut self, result: f64, expression: impl Into<String>) {
        self.history = Some(HistoryEntry {
            expression: expression.into(),
            result,
        });
        self.current_input = format_number(result);
        self.last_result = Some(result);
        self.is_fresh_input = true;
    }

    /// Evaluate the buffer for the `=` action and commit on success
    ///
    /// On failure nothing changes.
    pub fn commit(&mut self) -> eval::Result<f64> {
        let result = eval::commit(&self.current_input)?;
        let expression = std::mem::take(&mut self.current_input);
        self.commit_result(result, expression);
        Ok(result)
    }

    /// Live preview text for the buffer (`"= <value>"` or empty)
    ///
    /// Only shown while accumulating a buffer longer than one character.
    pub fn preview_text(&self) -> String {
        if self.current_input == RESET_INPUT
            || self.is_fresh_input
            || self.current_input.chars().count() <= 1
        {
            return String::new();
        }

        eval::preview(&self.current_input)
            .map(|value| format!("= {}", format_number(value)))
            .unwrap_or_default()
    }

    /// `"<expression> = <result>"`, or `"None"` before the first commit
    pub fn history_label(&self) -> String {
        match &self.history {
            Some(entry) => entry.to_string(),
            None => NO_HISTORY.to_string(),
        }
    }
}
