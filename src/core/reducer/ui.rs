use super::{CoreState, UiAction};
use crate::core::effects::CoreEffects;
use crate::messages::app::AppCommand;

pub(super) fn handle_ui(
    cmd: &AppCommand,
    state: &mut CoreState,
    effects: &mut CoreEffects,
) -> UiAction {
    match cmd {
        AppCommand::Quit => UiAction::Quit,
        AppCommand::Bootstrap => {
            tracing::info!("设置页已构造，使用默认设置");
            effects.emit_state(&state.app);
            UiAction::Handled
        }
        AppCommand::UiToggleHelp => {
            state.app.help_visible = !state.app.help_visible;
            effects.emit_state(&state.app);
            UiAction::Handled
        }
        AppCommand::Back => {
            // 选择器盖住了返回按钮
            if state.app.list.is_picker_open() {
                tracing::debug!("选择器打开中，忽略返回");
                return UiAction::Handled;
            }
            tracing::info!("用户触发：返回，请求关闭设置页");
            effects.dismiss();
            UiAction::Handled
        }
        _ => UiAction::NotHandled,
    }
}
