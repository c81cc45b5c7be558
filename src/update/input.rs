//! Calculator input handlers (keypad tokens, clear, delete, equals)

use tracing::debug;

use crate::commands::Cmd;
use crate::messages::InputMsg;
use crate::model::AppModel;

/// Handle keypad input
pub fn update_input(model: &mut AppModel, msg: InputMsg) -> Option<Cmd> {
    match msg {
        InputMsg::Clear => {
            model.session.reset();
            model.ui.clear_error();
        }

        InputMsg::Delete => {
            model.session.delete_last();
            model.ui.clear_error();
        }

        InputMsg::Equals => match model.session.commit() {
            Ok(result) => {
                debug!(target: "session", result, "committed");
                model.ui.clear_error();
            }
            Err(error) => {
                debug!(
                    target: "session",
                    %error,
                    buffer = %model.session.current_input,
                    "commit failed"
                );
                model.ui.set_error(error);
            }
        },

        append => {
            let Some(token) = append.token() else {
                return None;
            };
            if !model.session.append_token(token) {
                return None;
            }
            model.ui.clear_error();
        }
    }

    Some(Cmd::Redraw)
}
