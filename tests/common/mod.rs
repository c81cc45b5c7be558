//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use calcpad::accumulator::Session;
use calcpad::config::CalcConfig;
use calcpad::keymap::{msg_for_key, Key};
use calcpad::model::{AppModel, UiState};
use calcpad::theme::Theme;
use calcpad::update::update;
use calcpad::Cmd;

/// Create a fresh test model (light theme, nothing committed)
pub fn test_model() -> AppModel {
    AppModel::with_theme(CalcConfig::default(), Theme::default())
}

/// Create a test model whose buffer already holds `input` (not fresh)
pub fn test_model_with_input(input: &str) -> AppModel {
    AppModel {
        session: Session::with_input(input),
        ui: UiState::new(),
        theme: Theme::default(),
        config: CalcConfig::default(),
    }
}

/// Press a single key, returning the resulting command
pub fn press(model: &mut AppModel, key: Key) -> Option<Cmd> {
    msg_for_key(key).and_then(|msg| update(model, msg))
}

/// Type every character of `keys` as a key press
pub fn type_str(model: &mut AppModel, keys: &str) {
    for ch in keys.chars() {
        press(model, Key::from_char(ch));
    }
}

/// Current buffer contents
pub fn buffer(model: &AppModel) -> &str {
    &model.session.current_input
}
