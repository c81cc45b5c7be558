//! App message handlers (theme, lifecycle)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;
use crate::theme::Theme;

pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::ToggleTheme => {
            let id = model.config.toggle_theme();
            model.theme = Theme::for_id(id);
            tracing::info!("Switched to {} theme", id);
            Some(Cmd::batch(vec![
                Cmd::SaveConfig(model.config.clone()),
                Cmd::Redraw,
            ]))
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}
