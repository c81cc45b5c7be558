//! Command-line argument parsing for the calculator
//!
//! Supports:
//! - Interactive keypad session on stdin (default)
//! - One-shot evaluation with `--eval`
//! - Per-run theme override

use clap::Parser;

use crate::config::ThemeId;

/// A keyboard-driven arithmetic calculator
#[derive(Parser, Debug)]
#[command(name = "calcpad", version, about = "A keyboard-driven arithmetic calculator")]
pub struct CliArgs {
    /// Evaluate EXPR once, print the result and exit
    #[arg(short = 'e', long, value_name = "EXPR")]
    pub eval: Option<String>,

    /// Use this theme for the run without saving it
    #[arg(long, value_enum, value_name = "THEME")]
    pub theme: Option<ThemeId>,

    /// Disable ANSI colors
    #[arg(long)]
    pub plain: bool,
}

/// What the runtime should do after startup
#[derive(Debug, Clone, PartialEq)]
pub enum StartupMode {
    /// Read keypad input from stdin until EOF or `:quit`
    Interactive,
    /// Commit a single expression
    Eval(String),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub mode: StartupMode,
    /// Theme override; `None` keeps the persisted preference
    pub theme: Option<ThemeId>,
    /// Emit ANSI color sequences
    pub color: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let mode = match self.eval {
            Some(expr) if expr.trim().is_empty() => {
                return Err("Expression to evaluate must not be empty".to_string());
            }
            Some(expr) => StartupMode::Eval(expr),
            None => StartupMode::Interactive,
        };

        Ok(StartupConfig {
            mode,
            theme: self.theme,
            color: !self.plain,
        })
    }
}
