use crate::app::AppSnapshot;
use crate::messages::app::AppCommand;
use crate::screen::ListMount;
use crate::settings::ControlKind;
use crossterm::{
    event::{MouseButton, MouseEvent, MouseEventKind},
    terminal,
};
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;

pub(super) async fn handle_mouse(
    app: &AppSnapshot,
    mouse: MouseEvent,
    tx: &mpsc::Sender<AppCommand>,
) {
    if app.help_visible {
        return;
    }
    let Ok((cols, rows)) = terminal::size() else {
        return;
    };
    let Ok(mount) = ListMount::resolve(Rect::new(0, 0, cols, rows)) else {
        return;
    };

    if let Some(cmd) = mouse_command(app, &mount, mouse) {
        let _ = tx.send(cmd).await;
    }
}

pub(super) fn mouse_command(
    app: &AppSnapshot,
    mount: &ListMount,
    mouse: MouseEvent,
) -> Option<AppCommand> {
    let pos = Position::new(mouse.column, mouse.row);
    let clicked = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));

    if app.picker.is_some() {
        let sheet = mount.sheet();
        return match mouse.kind {
            MouseEventKind::ScrollUp => Some(AppCommand::PickerMoveUp),
            MouseEventKind::ScrollDown => Some(AppCommand::PickerMoveDown),
            _ if clicked && sheet.done.contains(pos) => Some(AppCommand::PickerConfirm),
            _ if clicked => sheet
                .wheel_index_at(pos)
                .map(|index| AppCommand::PickerSelect { index }),
            _ => None,
        };
    }

    if !clicked {
        return None;
    }
    if mount.back_rect().contains(pos) {
        return Some(AppCommand::Back);
    }
    let row = mount.row_at(pos)?;
    // 开关自己处理点击；点行的其他位置才算激活整行
    if row.control() == ControlKind::Toggle && mount.switch_rect(row).contains(pos) {
        Some(AppCommand::SettingsToggle { row })
    } else {
        Some(AppCommand::SettingsActivate { row })
    }
}
