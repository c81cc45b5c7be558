//! End-to-end key sequences through update and the view

mod common;

use calcpad::keymap::Key;
use calcpad::model::SessionPhase;
use calcpad::view::ViewState;
use common::{buffer, press, test_model, type_str};

#[test]
fn test_multiply_and_commit() {
    let mut model = test_model();
    type_str(&mut model, "5*3");
    assert_eq!(model.ui.preview, "= 15");

    press(&mut model, Key::Enter);

    let view = ViewState::from_model(&model);
    assert_eq!(view.display_text, "15");
    assert_eq!(view.history_text, "5*3 = 15");
    assert_eq!(view.preview_text, "");
    assert!(!view.is_error);
    assert_eq!(model.session.last_result, Some(15.0));
    assert_eq!(model.phase(), SessionPhase::Fresh);
}

#[test]
fn test_divide_by_zero() {
    let mut model = test_model();
    type_str(&mut model, "1/0=");

    let view = ViewState::from_model(&model);
    assert_eq!(view.display_text, "Cannot divide by zero");
    assert!(view.is_error);
    assert_eq!(view.history_text, "None");
    assert_eq!(buffer(&model), "1/0");
}

#[test]
fn test_unbalanced_group() {
    let mut model = test_model();
    type_str(&mut model, "(2+3=");

    let view = ViewState::from_model(&model);
    assert_eq!(view.display_text, "Invalid brackets");
    assert!(view.is_error);
    assert_eq!(buffer(&model), "(2+3");

    // Closing the group and committing again recovers
    type_str(&mut model, ")=");
    let view = ViewState::from_model(&model);
    assert_eq!(view.display_text, "5");
    assert_eq!(view.history_text, "(2+3) = 5");
}

#[test]
fn test_malformed_commit_keeps_previous_history() {
    let mut model = test_model();
    type_str(&mut model, "2*4=");
    type_str(&mut model, "+=");

    let view = ViewState::from_model(&model);
    assert_eq!(view.display_text, "Invalid expression");
    assert_eq!(view.history_text, "2*4 = 8");
    assert_eq!(buffer(&model), "8+");
}

#[test]
fn test_operator_continues_from_result() {
    let mut model = test_model();
    type_str(&mut model, "12+3=");
    type_str(&mut model, "*2");
    assert_eq!(buffer(&model), "15*2");
    assert_eq!(model.ui.preview, "= 30");

    press(&mut model, Key::Char('='));
    assert_eq!(buffer(&model), "30");
    assert_eq!(model.session.history_label(), "15*2 = 30");
}

#[test]
fn test_digit_after_result_starts_over() {
    let mut model = test_model();
    type_str(&mut model, "12+3=");
    type_str(&mut model, "4");
    assert_eq!(buffer(&model), "4");
    assert_eq!(model.session.history_label(), "12+3 = 15");
}

#[test]
fn test_open_group_after_result_appends() {
    // Appends without an operator; committing this is malformed
    let mut model = test_model();
    type_str(&mut model, "2+2=(1)=");
    assert_eq!(buffer(&model), "4(1)");
    assert!(model.ui.is_error());
}

#[test]
fn test_float_error_absorbed() {
    let mut model = test_model();
    type_str(&mut model, "0.1+0.2=");
    assert_eq!(buffer(&model), "0.3");
    assert_eq!(model.session.history_label(), "0.1+0.2 = 0.3");
}

#[test]
fn test_negative_result_can_be_extended() {
    let mut model = test_model();
    type_str(&mut model, "2-5=");
    assert_eq!(buffer(&model), "-3");
    type_str(&mut model, "*2=");
    assert_eq!(buffer(&model), "-6");
}

#[test]
fn test_leading_minus_from_fresh() {
    let mut model = test_model();
    type_str(&mut model, "-4+1=");
    assert_eq!(buffer(&model), "-3");
}

#[test]
fn test_sign_after_operator_needs_parentheses() {
    // `5*-3` cannot be typed key by key; a group is the way around it
    let mut model = test_model();
    type_str(&mut model, "5*(0-3)=");
    assert_eq!(buffer(&model), "-15");
}
