// TUI 子模块
mod event_loop;
mod guard;
mod header;
mod keyboard;
mod mouse;
mod overlays;
mod picker_view;
mod settings_view;
mod styles;
mod utils;
mod views;
mod widgets;

use crate::app::AppSnapshot;
use crate::error::AppError;
use crate::messages::app::{AppCommand, AppEvent};
use std::time::Duration;
use tokio::sync::mpsc;

/// 主 TUI 入口点 - 从 main.rs 调用
pub async fn run_tui(
    app: AppSnapshot,
    tx: mpsc::Sender<AppCommand>,
    rx: mpsc::Receiver<AppEvent>,
    tick_rate: Duration,
) -> Result<(), AppError> {
    event_loop::run_tui_internal(app, tx, rx, tick_rate).await
}
