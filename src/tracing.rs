//! Debug tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=session=debug` - buffer/phase transitions only
//! - `RUST_LOG=calcpad::accumulator=trace` - rejected tokens
//!
//! # Log Files
//!
//! Logs are written to `~/.config/calcpad/logs/calcpad.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::model::{AppModel, SessionPhase};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`, so the
/// interactive prompt stays clean.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of session state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub current_input: String,
    pub phase: SessionPhase,
    pub history: String,
}

impl SessionSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            current_input: model.session.current_input.clone(),
            phase: model.phase(),
            history: model.session.history_label(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SessionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.current_input != other.current_input {
            changes.push(format!(
                "input: {:?} → {:?}",
                self.current_input, other.current_input
            ));
        }
        if self.phase != other.phase {
            changes.push(format!("phase: {:?} → {:?}", self.phase, other.phase));
        }
        if self.history != other.history {
            changes.push(format!("history: {}", other.history));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::Session;

    #[test]
    fn test_diff_unchanged() {
        let model = AppModel::default();
        let snap = SessionSnapshot::from_model(&model);
        assert_eq!(snap.diff(&snap.clone()), None);
    }

    #[test]
    fn test_diff_reports_input_and_phase() {
        let mut model = AppModel::default();
        let before = SessionSnapshot::from_model(&model);
        model.session = Session::with_input("12");
        let after = SessionSnapshot::from_model(&model);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("input: \"0\" → \"12\""));
        assert!(diff.contains("phase: Fresh → Accumulating"));
    }
}
