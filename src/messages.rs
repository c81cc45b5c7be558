//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::token::{Operator, Token};

/// Calculator input events (keypad buttons and their keyboard equivalents)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMsg {
    /// Digit 0-9
    Digit(u8),
    /// `+ - * /`
    Operator(Operator),
    /// `.`
    DecimalPoint,
    /// `(`
    OpenGroup,
    /// `)`
    CloseGroup,
    /// Reset the buffer (Escape / C)
    Clear,
    /// Remove the last character (Backspace)
    Delete,
    /// Commit the expression (Enter / =)
    Equals,
}

impl InputMsg {
    /// The token this message appends, if it is an append event
    pub fn token(self) -> Option<Token> {
        match self {
            InputMsg::Digit(d) => Token::digit(d),
            InputMsg::Operator(op) => Some(Token::Operator(op)),
            InputMsg::DecimalPoint => Some(Token::DecimalPoint),
            InputMsg::OpenGroup => Some(Token::OpenGroup),
            InputMsg::CloseGroup => Some(Token::CloseGroup),
            InputMsg::Clear | InputMsg::Delete | InputMsg::Equals => None,
        }
    }
}

impl From<Token> for InputMsg {
    fn from(token: Token) -> Self {
        match token {
            Token::Digit(d) => InputMsg::Digit(d),
            Token::Operator(op) => InputMsg::Operator(op),
            Token::DecimalPoint => InputMsg::DecimalPoint,
            Token::OpenGroup => InputMsg::OpenGroup,
            Token::CloseGroup => InputMsg::CloseGroup,
        }
    }
}

/// Application-level messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMsg {
    /// Switch between the light and dark theme and persist the choice
    ToggleTheme,
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Calculator input
    Input(InputMsg),
    /// App messages (theme, lifecycle)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a digit message
    pub fn digit(value: u8) -> Self {
        Msg::Input(InputMsg::Digit(value))
    }

    /// Create an operator message
    pub fn operator(op: Operator) -> Self {
        Msg::Input(InputMsg::Operator(op))
    }

    /// Create an append message for a token
    pub fn token(token: Token) -> Self {
        Msg::Input(token.into())
    }

    pub fn equals() -> Self {
        Msg::Input(InputMsg::Equals)
    }

    pub fn clear() -> Self {
        Msg::Input(InputMsg::Clear)
    }

    pub fn delete() -> Self {
        Msg::Input(InputMsg::Delete)
    }
}
