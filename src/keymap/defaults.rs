//! Default key bindings for the keypad
//!
//! Digits, `+ - * / . ( )` type their token; `×` and `÷` type `*` and `/`.
//! `Enter` and `=` evaluate, `Escape` clears and `Backspace` deletes.

use crate::messages::{InputMsg, Msg};
use crate::token::Token;

use super::command::Command;
use super::types::Key;

/// Translate a key press into a message, or `None` for unmapped keys
pub fn msg_for_key(key: Key) -> Option<Msg> {
    match key {
        Key::Enter | Key::Char('=') => Some(Msg::Input(InputMsg::Equals)),
        Key::Escape => Some(Msg::Input(InputMsg::Clear)),
        Key::Backspace => Some(Msg::Input(InputMsg::Delete)),
        Key::Char(ch) => Token::from_char(ch).map(Msg::token),
    }
}

/// Translate one line of terminal input into messages
///
/// `:name` lines run a [`Command`]; an empty line acts as `Enter`; anything
/// else is read key by key with whitespace and unmapped characters dropped.
pub fn parse_line(line: &str) -> Vec<Msg> {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(name) = line.trim().strip_prefix(':') {
        return match Command::from_name(name) {
            Some(cmd) => cmd.to_msgs(),
            None => {
                tracing::debug!(command = name, "unknown command");
                Vec::new()
            }
        };
    }

    if line.trim().is_empty() {
        return vec![Msg::Input(InputMsg::Equals)];
    }

    line.chars()
        .filter(|c| !c.is_whitespace())
        .filter_map(|c| msg_for_key(Key::from_char(c)))
        .collect()
}
