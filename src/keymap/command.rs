//! Named commands for actions without a printable key
//!
//! Commands are the bridge between `:name` lines and the message system.

use crate::messages::{AppMsg, InputMsg, Msg};

/// Actions reachable by name from the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Clear,
    Delete,
    Equals,
    ToggleTheme,
    Quit,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Clear,
        Command::Delete,
        Command::Equals,
        Command::ToggleTheme,
        Command::Quit,
    ];

    /// Convert this command to message(s) for the Elm update loop
    pub fn to_msgs(self) -> Vec<Msg> {
        let msg = match self {
            Command::Clear => Msg::Input(InputMsg::Clear),
            Command::Delete => Msg::Input(InputMsg::Delete),
            Command::Equals => Msg::Input(InputMsg::Equals),
            Command::ToggleTheme => Msg::App(AppMsg::ToggleTheme),
            Command::Quit => Msg::App(AppMsg::Quit),
        };
        vec![msg]
    }

    /// Primary name accepted after `:`
    pub fn name(self) -> &'static str {
        match self {
            Command::Clear => "clear",
            Command::Delete => "del",
            Command::Equals => "eq",
            Command::ToggleTheme => "theme",
            Command::Quit => "quit",
        }
    }

    /// Human-readable label for the help line
    pub fn display_name(self) -> &'static str {
        match self {
            Command::Clear => "Clear",
            Command::Delete => "Delete Last",
            Command::Equals => "Evaluate",
            Command::ToggleTheme => "Toggle Theme",
            Command::Quit => "Quit",
        }
    }

    /// Look up a command by name or alias (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "clear" | "c" => Some(Command::Clear),
            "del" | "delete" | "d" => Some(Command::Delete),
            "eq" | "equals" => Some(Command::Equals),
            "theme" | "t" => Some(Command::ToggleTheme),
            "quit" | "q" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}
