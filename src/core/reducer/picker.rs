use super::{CoreState, UiAction};
use crate::core::effects::CoreEffects;
use crate::messages::app::AppCommand;

pub(super) fn handle_ui(
    cmd: &AppCommand,
    state: &mut CoreState,
    effects: &mut CoreEffects,
) -> UiAction {
    let list = &mut state.app.list;
    match cmd {
        AppCommand::PickerMoveUp
        | AppCommand::PickerMoveDown
        | AppCommand::PickerSelect { .. } => {
            let Some(picker) = list.picker_mut() else {
                return UiAction::Handled;
            };
            match cmd {
                AppCommand::PickerMoveUp => picker.scroll_up(),
                AppCommand::PickerMoveDown => picker.scroll_down(),
                AppCommand::PickerSelect { index } => {
                    if !picker.select_index(*index) {
                        return UiAction::Handled;
                    }
                }
                _ => unreachable!("checked by outer match"),
            }
            effects.emit_state(&state.app);
            UiAction::Handled
        }
        AppCommand::PickerConfirm => {
            if list.confirm_picker().is_some() {
                effects.emit_state(&state.app);
            }
            UiAction::Handled
        }
        _ => UiAction::NotHandled,
    }
}
