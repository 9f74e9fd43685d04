use super::guard::TuiGuard;
use super::keyboard::handle_key;
use super::mouse::handle_mouse;
use super::views::draw_ui;
use crate::app::AppSnapshot;
use crate::error::AppError;
use crate::messages::app::{AppCommand, AppEvent};
use crate::screen::ListMount;
use crossterm::{
    event::{self, Event},
    terminal,
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

pub(super) async fn run_tui_internal(
    mut app: AppSnapshot,
    tx: mpsc::Sender<AppCommand>,
    mut rx: mpsc::Receiver<AppEvent>,
    tick_rate: Duration,
) -> Result<(), AppError> {
    // 挂载点必须在进入备用屏幕之前解析出来，失败直接返回给调用方
    let (cols, rows) = terminal::size()?;
    let mount = ListMount::resolve(Rect::new(0, 0, cols, rows))?;
    tracing::info!(area = ?mount.area, "设置页挂载点已解析");

    let _guard = TuiGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let _ = tx.send(AppCommand::Bootstrap).await;

    let mut last_tick = Instant::now();

    loop {
        // 单线程运行时：让出一次，AppActor 才能处理刚发出的命令
        tokio::task::yield_now().await;

        while let Ok(evt) = rx.try_recv() {
            match evt {
                AppEvent::State(s) => app = *s,
                AppEvent::Dismiss => {
                    tracing::info!("设置页已关闭");
                    return Ok(());
                }
            }
        }

        terminal.draw(|f| draw_ui(f, &app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key(&app, key, &tx).await {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    handle_mouse(&app, mouse, &tx).await;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}
