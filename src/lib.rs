//! calcpad - Elm-style arithmetic calculator
//!
//! This crate provides the input accumulator, the expression evaluator and
//! the Elm Architecture plumbing (messages, model, update, view) around them.

pub mod accumulator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod eval;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod theme;
pub mod token;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use accumulator::Session;
pub use commands::Cmd;
pub use config::{CalcConfig, ThemeId};
pub use eval::CalcError;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
pub use view::ViewState;
