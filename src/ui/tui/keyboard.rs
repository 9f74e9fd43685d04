use crate::app::AppSnapshot;
use crate::messages::app::AppCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

/// 按键 -> AppCommand。返回 true 表示退出程序
pub(super) async fn handle_key(
    app: &AppSnapshot,
    key: KeyEvent,
    tx: &mpsc::Sender<AppCommand>,
) -> bool {
    // Some terminals/platforms may report both press and release events; we only act on press/repeat.
    if matches!(key.kind, KeyEventKind::Release) {
        return false;
    }

    if app.help_visible {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc => {
                let _ = tx.send(AppCommand::UiToggleHelp).await;
            }
            _ => {}
        }
        return false;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => {
            let _ = tx.send(AppCommand::Quit).await;
            return true;
        }
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
            let _ = tx.send(AppCommand::Quit).await;
            return true;
        }
        (KeyCode::Char('?'), _) => {
            let _ = tx.send(AppCommand::UiToggleHelp).await;
            return false;
        }
        _ => {}
    }

    // 选择器打开：只有滚轮和 Done，没有取消
    if app.picker.is_some() {
        let cmd = match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(AppCommand::PickerMoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppCommand::PickerMoveDown),
            KeyCode::Enter => Some(AppCommand::PickerConfirm),
            _ => None,
        };
        if let Some(cmd) = cmd {
            let _ = tx.send(cmd).await;
        }
        return false;
    }

    let cmd = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(AppCommand::SettingsMoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(AppCommand::SettingsMoveDown),
        KeyCode::Char(' ') => Some(AppCommand::SettingsToggleSelected),
        KeyCode::Enter => Some(AppCommand::SettingsActivateSelected),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(AppCommand::Back),
        _ => None,
    };
    if let Some(cmd) = cmd {
        tracing::trace!(?cmd, "按键映射");
        let _ = tx.send(cmd).await;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::settings::SettingRow;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    fn picker_open_snapshot() -> AppSnapshot {
        let mut app = App::default();
        app.list.on_row_activated(SettingRow::PomodoroTimer);
        AppSnapshot::from_app(&app)
    }

    #[tokio::test]
    async fn release_is_ignored() {
        let app = AppSnapshot::from_app(&App::default());
        let (tx, mut rx) = mpsc::channel::<AppCommand>(8);

        let key = KeyEvent {
            kind: KeyEventKind::Release,
            ..press(KeyCode::Enter)
        };

        let should_quit = handle_key(&app, key, &tx).await;
        assert!(!should_quit);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn list_keys_map_to_settings_commands() {
        let app = AppSnapshot::from_app(&App::default());
        let (tx, mut rx) = mpsc::channel::<AppCommand>(8);

        handle_key(&app, press(KeyCode::Down), &tx).await;
        assert!(matches!(rx.try_recv(), Ok(AppCommand::SettingsMoveDown)));
        handle_key(&app, press(KeyCode::Char(' ')), &tx).await;
        assert!(matches!(rx.try_recv(), Ok(AppCommand::SettingsToggleSelected)));
        handle_key(&app, press(KeyCode::Enter), &tx).await;
        assert!(matches!(rx.try_recv(), Ok(AppCommand::SettingsActivateSelected)));
        handle_key(&app, press(KeyCode::Esc), &tx).await;
        assert!(matches!(rx.try_recv(), Ok(AppCommand::Back)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn picker_keys_map_to_picker_commands() {
        let app = picker_open_snapshot();
        let (tx, mut rx) = mpsc::channel::<AppCommand>(8);

        handle_key(&app, press(KeyCode::Down), &tx).await;
        assert!(matches!(rx.try_recv(), Ok(AppCommand::PickerMoveDown)));
        handle_key(&app, press(KeyCode::Enter), &tx).await;
        assert!(matches!(rx.try_recv(), Ok(AppCommand::PickerConfirm)));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn esc_does_not_cancel_picker() {
        let app = picker_open_snapshot();
        let (tx, mut rx) = mpsc::channel::<AppCommand>(8);

        let should_quit = handle_key(&app, press(KeyCode::Esc), &tx).await;
        assert!(!should_quit);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn q_quits() {
        let app = picker_open_snapshot();
        let (tx, mut rx) = mpsc::channel::<AppCommand>(8);

        assert!(handle_key(&app, press(KeyCode::Char('q')), &tx).await);
        assert!(matches!(rx.try_recv(), Ok(AppCommand::Quit)));
    }

    #[tokio::test]
    async fn help_swallows_other_keys() {
        let app = AppSnapshot {
            help_visible: true,
            ..AppSnapshot::from_app(&App::default())
        };
        let (tx, mut rx) = mpsc::channel::<AppCommand>(8);

        assert!(!handle_key(&app, press(KeyCode::Char('q')), &tx).await);
        assert!(rx.try_recv().is_err());
        handle_key(&app, press(KeyCode::Esc), &tx).await;
        assert!(matches!(rx.try_recv(), Ok(AppCommand::UiToggleHelp)));
    }
}
