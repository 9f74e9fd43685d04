use crate::config::DEFAULT_TICK_MS;
use crate::screen::{ControlState, DurationPicker, SettingsList};
use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "bevodoro-settings",
    version,
    about = "Bevodoro 设置页 TUI（Rust + ratatui）"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// 覆盖数据目录（默认走系统 data_local_dir）
    #[arg(long, env = "BEVODORO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// 覆盖日志目录（默认 `{data_dir}/logs`）
    #[arg(long, env = "BEVODORO_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// 覆盖日志过滤（等价于设置 RUST_LOG）
    #[arg(long, env = "RUST_LOG")]
    pub log_filter: Option<String>,

    /// 重绘间隔（毫秒）
    #[arg(
        long,
        env = "BEVODORO_TICK_MS",
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(10..=5000)
    )]
    pub tick_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// 运行 TUI（默认）
    Tui,

    /// 无交互快速自检：打印设置行与可选时长
    Rows,
}

pub fn rows_report() -> String {
    let list = SettingsList::new();
    let mut out = String::from("Settings\n");
    for r in list.render() {
        let control = match r.control {
            ControlState::Switch { on } => format!("toggle ({})", if on { "on" } else { "off" }),
            ControlState::Disclosure => "disclosure".to_owned(),
        };
        let _ = writeln!(
            out,
            "  {}  {:<18} {:<20} {}",
            r.row.index(),
            r.content.title,
            r.content.icon,
            control
        );
    }
    let _ = writeln!(
        out,
        "Pomodoro durations: {}",
        DurationPicker::labels().join(", ")
    );
    out
}
