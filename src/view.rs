//! View - outbound display state and its terminal rendering
//!
//! The view is a pure function of the model: `ViewState::from_model` after
//! every update, then `render` to produce the text written to the terminal.

use std::fmt::Write as _;

use crate::model::AppModel;
use crate::theme::{Theme, RESET};

/// Prefix of the history line
pub const HISTORY_PREFIX: &str = "Last: ";

/// Everything the presentation layer shows for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Buffer, or the error message while in error
    pub display_text: String,
    /// `"= <value>"` or empty
    pub preview_text: String,
    /// `"<expression> = <result>"` or `"None"`
    pub history_text: String,
    pub is_error: bool,
}

impl ViewState {
    pub fn from_model(model: &AppModel) -> Self {
        let (display_text, is_error) = match model.ui.error {
            Some(error) => (error.to_string(), true),
            None => (model.session.current_input.clone(), false),
        };

        Self {
            display_text,
            preview_text: if is_error {
                String::new()
            } else {
                model.ui.preview.clone()
            },
            history_text: model.session.history_label(),
            is_error,
        }
    }
}

/// Render options for the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit 24-bit ANSI color sequences
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

fn paint(out: &mut String, text: &str, fg: Option<String>) {
    match fg {
        Some(seq) => {
            let _ = write!(out, "{}{}{}", seq, text, RESET);
        }
        None => out.push_str(text),
    }
}

/// Render the three display lines (history, display, preview)
///
/// The preview line is omitted when there is no preview.
pub fn render(view: &ViewState, theme: &Theme, options: RenderOptions) -> String {
    let color = |c: crate::theme::Color| options.color.then(|| c.fg());
    let mut out = String::with_capacity(64);

    paint(
        &mut out,
        &format!("{}{}", HISTORY_PREFIX, view.history_text),
        color(theme.history),
    );
    out.push('\n');

    let display_color = if view.is_error {
        theme.error
    } else {
        theme.display
    };
    paint(&mut out, &view.display_text, color(display_color));
    out.push('\n');

    if !view.preview_text.is_empty() {
        paint(&mut out, &view.preview_text, color(theme.preview));
        out.push('\n');
    }

    out
}

/// Prompt shown before each input line
pub fn prompt(theme: &Theme, options: RenderOptions) -> String {
    let mut out = String::new();
    paint(&mut out, "> ", options.color.then(|| theme.accent.fg()));
    out
}
