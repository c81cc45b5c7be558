//! Runtime module - terminal integration
//!
//! - `app` - line-oriented event loop, command execution and rendering

pub mod app;

pub use app::{evaluate_once, App};
