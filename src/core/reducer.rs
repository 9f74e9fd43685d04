use crate::app::App;
use crate::messages::app::{AppCommand, AppEvent};

use tokio::sync::mpsc;

use crate::core::effects::{CoreDispatch, CoreEffects, run_effects};

mod picker;
mod settings;
mod ui;

struct CoreState {
    app: App,
}

enum UiAction {
    Handled,
    NotHandled,
    Quit,
}

fn reduce(cmd: AppCommand, state: &mut CoreState, effects: &mut CoreEffects) -> bool {
    for handler in [ui::handle_ui, picker::handle_ui, settings::handle_ui] {
        match handler(&cmd, state, effects) {
            UiAction::Quit => return true,
            UiAction::Handled => return false,
            UiAction::NotHandled => {}
        }
    }
    tracing::debug!(?cmd, "命令未处理");
    false
}

/// 以默认状态启动 AppActor
pub fn spawn_app_actor() -> (mpsc::Sender<AppCommand>, mpsc::Receiver<AppEvent>) {
    spawn_app_actor_with(App::default())
}

/// 启动 AppActor：独占设置页状态，逐条处理 UI 命令并回发快照。
///
/// 命令通道关闭或收到 `Quit` 时退出。
pub fn spawn_app_actor_with(app: App) -> (mpsc::Sender<AppCommand>, mpsc::Receiver<AppEvent>) {
    let (tx_cmd, mut rx_cmd) = mpsc::channel::<AppCommand>(64);
    let (tx_evt, rx_evt) = mpsc::channel::<AppEvent>(64);

    tokio::spawn(async move {
        let mut state = CoreState { app };
        let dispatch = CoreDispatch { tx_evt: &tx_evt };

        while let Some(cmd) = rx_cmd.recv().await {
            tracing::trace!(?cmd, "AppActor 收到命令");
            let mut effects = CoreEffects::default();
            let should_quit = reduce(cmd, &mut state, &mut effects);
            run_effects(effects, &dispatch).await;
            if should_quit {
                break;
            }
        }

        tracing::info!(settings = ?state.app.list.state(), "AppActor 退出，设置页状态丢弃");
    });

    (tx_cmd, rx_evt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppSnapshot;
    use crate::settings::SettingRow;

    async fn next_state(rx: &mut mpsc::Receiver<AppEvent>) -> AppSnapshot {
        match rx.recv().await {
            Some(AppEvent::State(s)) => *s,
            other => panic!("expected state, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn bootstrap_emits_default_state() {
        let (tx, mut rx) = spawn_app_actor();
        tx.send(AppCommand::Bootstrap).await.unwrap();
        let snap = next_state(&mut rx).await;
        assert_eq!(snap, AppSnapshot::from_app(&App::default()));
    }

    #[tokio::test]
    async fn picking_sixty_minutes_updates_state() {
        let (tx, mut rx) = spawn_app_actor();

        tx.send(AppCommand::SettingsActivate {
            row: SettingRow::PomodoroTimer,
        })
        .await
        .unwrap();
        let snap = next_state(&mut rx).await;
        assert_eq!(snap.picker.map(|p| p.highlighted), Some(1));

        tx.send(AppCommand::PickerSelect { index: 4 }).await.unwrap();
        next_state(&mut rx).await;
        tx.send(AppCommand::PickerConfirm).await.unwrap();
        let snap = next_state(&mut rx).await;

        assert!(snap.picker.is_none());
        assert_eq!(snap.settings.pomodoro_minutes.minutes(), 60);
    }

    #[tokio::test]
    async fn list_commands_are_ignored_while_picker_is_open() {
        let (tx, mut rx) = spawn_app_actor();
        tx.send(AppCommand::SettingsActivate {
            row: SettingRow::PomodoroTimer,
        })
        .await
        .unwrap();
        next_state(&mut rx).await;

        tx.send(AppCommand::SettingsToggle {
            row: SettingRow::BackgroundMusic,
        })
        .await
        .unwrap();
        tx.send(AppCommand::Back).await.unwrap();
        tx.send(AppCommand::PickerConfirm).await.unwrap();

        // 只有 PickerConfirm 产生事件
        let snap = next_state(&mut rx).await;
        assert!(!snap.settings.background_music_enabled);
        assert!(snap.picker.is_none());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn back_requests_dismiss_once() {
        let (tx, mut rx) = spawn_app_actor();
        tx.send(AppCommand::Back).await.unwrap();
        assert!(matches!(rx.recv().await, Some(AppEvent::Dismiss)));
        tx.send(AppCommand::Bootstrap).await.unwrap();
        assert!(matches!(rx.recv().await, Some(AppEvent::State(_))));
    }

    #[tokio::test]
    async fn quit_with_open_picker_delivers_nothing() {
        let (tx, mut rx) = spawn_app_actor();
        tx.send(AppCommand::SettingsActivate {
            row: SettingRow::PomodoroTimer,
        })
        .await
        .unwrap();
        next_state(&mut rx).await;
        tx.send(AppCommand::PickerMoveDown).await.unwrap();
        next_state(&mut rx).await;
        tx.send(AppCommand::Quit).await.unwrap();

        // Actor 退出后事件通道关闭，不会再有任何事件
        assert!(rx.recv().await.is_none());
    }
}
