use bevodoro_settings::app::{App, AppSnapshot};
use bevodoro_settings::config::AppConfig;
use bevodoro_settings::core::spawn_app_actor;
use bevodoro_settings::error::AppError;
use bevodoro_settings::logging;
use bevodoro_settings::ui::{Cli, Command, rows_report, run_tui};
use clap::Parser;
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut cfg = AppConfig::default();
    if let Some(v) = cli.data_dir.clone() {
        cfg.data_dir = v;
    }
    cfg.tick_rate = Duration::from_millis(cli.tick_ms);

    let _log_guard = logging::init(
        &cfg.data_dir,
        logging::LogConfig {
            dir: cli.log_dir.clone(),
            filter: cli.log_filter.clone(),
        },
    );
    tracing::info!(data_dir = %cfg.data_dir.display(), "bevodoro-settings 启动");

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let (tx, rx) = spawn_app_actor();
            run_tui(AppSnapshot::from_app(&App::default()), tx, rx, cfg.tick_rate).await?;
            Ok(())
        }
        Command::Rows => {
            tracing::info!("启动模式: Rows");
            print!("{}", rows_report());
            Ok(())
        }
    }
}
