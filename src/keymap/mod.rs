//! Keyboard mapping for the calculator
//!
//! # Architecture
//!
//! ```text
//! stdin line → Key → msg_for_key() → Msg
//! `:name` line → Command → Vec<Msg>
//! ```

mod command;
mod defaults;
mod types;

pub use command::Command;
pub use defaults::{msg_for_key, parse_line};
pub use types::Key;
