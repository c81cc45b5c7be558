//! Application model - the complete state of the calculator
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod ui;

pub use ui::UiState;

use crate::accumulator::Session;
use crate::config::CalcConfig;
use crate::theme::Theme;

/// Where the session sits in its input cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// After startup, reset or a successful commit
    Fresh,
    /// Building an expression
    Accumulating,
    /// The last commit failed and nothing has cleared it yet
    Error,
}

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Expression buffer, last result and history
    pub session: Session,
    /// Error state and cached preview
    pub ui: UiState,
    /// Theme for colors and styling
    pub theme: Theme,
    /// Persisted calculator configuration
    pub config: CalcConfig,
}

impl AppModel {
    /// Create a model with a fresh session, resolving the configured theme
    pub fn new(config: CalcConfig) -> Self {
        let theme = Theme::for_id(config.theme);
        Self::with_theme(config, theme)
    }

    /// Create a model with an already resolved theme
    pub fn with_theme(config: CalcConfig, theme: Theme) -> Self {
        Self {
            session: Session::new(),
            ui: UiState::new(),
            theme,
            config,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.ui.is_error() {
            SessionPhase::Error
        } else if self.session.is_fresh_input {
            SessionPhase::Fresh
        } else {
            SessionPhase::Accumulating
        }
    }

    /// Recompute the cached preview from the session
    pub fn sync_preview(&mut self) {
        self.ui.preview = if self.ui.is_error() {
            String::new()
        } else {
            self.session.preview_text()
        };
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::with_theme(CalcConfig::default(), Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::CalcError;

    #[test]
    fn test_phases() {
        let mut model = AppModel::default();
        assert_eq!(model.phase(), SessionPhase::Fresh);

        model.session = Session::with_input("1+");
        assert_eq!(model.phase(), SessionPhase::Accumulating);

        model.ui.set_error(CalcError::MalformedExpression);
        assert_eq!(model.phase(), SessionPhase::Error);
    }

    #[test]
    fn test_sync_preview_blank_in_error() {
        let mut model = AppModel::default();
        model.session = Session::with_input("2+3");
        model.sync_preview();
        assert_eq!(model.ui.preview, "= 5");

        model.ui.set_error(CalcError::UnbalancedGrouping);
        model.sync_preview();
        assert_eq!(model.ui.preview, "");
    }
}
