//! Core types for the keymap system

use std::fmt;

/// A key press as seen by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character
    Char(char),
    Enter,
    Escape,
    Backspace,
}

impl Key {
    /// Map a raw input character, recognizing control characters
    pub fn from_char(ch: char) -> Self {
        match ch {
            '\r' | '\n' => Key::Enter,
            '\u{1b}' => Key::Escape,
            '\u{8}' | '\u{7f}' => Key::Backspace,
            c => Key::Char(c),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{}", c),
            Key::Enter => write!(f, "Enter"),
            Key::Escape => write!(f, "Escape"),
            Key::Backspace => write!(f, "Backspace"),
        }
    }
}
