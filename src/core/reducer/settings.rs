use super::{CoreState, UiAction};
use crate::core::effects::CoreEffects;
use crate::messages::app::AppCommand;

pub(super) fn handle_ui(
    cmd: &AppCommand,
    state: &mut CoreState,
    effects: &mut CoreEffects,
) -> UiAction {
    let is_list_cmd = matches!(
        cmd,
        AppCommand::SettingsMoveUp
            | AppCommand::SettingsMoveDown
            | AppCommand::SettingsToggleSelected
            | AppCommand::SettingsToggle { .. }
            | AppCommand::SettingsActivateSelected
            | AppCommand::SettingsActivate { .. }
    );
    if !is_list_cmd {
        return UiAction::NotHandled;
    }

    let list = &mut state.app.list;
    // 选择器打开时列表不接收交互
    if list.is_picker_open() {
        tracing::debug!(?cmd, "选择器打开中，忽略列表命令");
        return UiAction::Handled;
    }

    match cmd {
        AppCommand::SettingsMoveUp => list.select_prev(),
        AppCommand::SettingsMoveDown => list.select_next(),
        AppCommand::SettingsToggleSelected => {
            let row = list.selected_row();
            list.toggle(row);
        }
        AppCommand::SettingsToggle { row } => {
            list.select(*row);
            list.toggle(*row);
        }
        AppCommand::SettingsActivateSelected => {
            let row = list.selected_row();
            list.on_row_activated(row);
        }
        AppCommand::SettingsActivate { row } => {
            list.on_row_activated(*row);
        }
        _ => unreachable!("checked by is_list_cmd"),
    }
    effects.emit_state(&state.app);
    UiAction::Handled
}
