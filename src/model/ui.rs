//! UI state - error banner and the cached live preview

use crate::eval::CalcError;

/// Presentational state derived from the session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Error raised by the last failed commit
    pub error: Option<CalcError>,
    /// Live preview (`"= 15"`), empty when there is nothing to show
    pub preview: String,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the error state; the preview is hidden until it clears
    pub fn set_error(&mut self, error: CalcError) {
        self.error = Some(error);
        self.preview.clear();
    }

    /// Leave the error state, returning true if it was set
    pub fn clear_error(&mut self) -> bool {
        self.error.take().is_some()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_error_hides_preview() {
        let mut ui = UiState {
            error: None,
            preview: "= 7".to_string(),
        };
        ui.set_error(CalcError::NonFiniteResult);
        assert!(ui.is_error());
        assert!(ui.preview.is_empty());
    }

    #[test]
    fn test_clear_error_reports_change() {
        let mut ui = UiState::new();
        assert!(!ui.clear_error());
        ui.set_error(CalcError::UnbalancedGrouping);
        assert!(ui.clear_error());
        assert!(!ui.is_error());
    }
}
