use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TICK_MS: u64 = 200;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 数据目录（目前只放日志）
    pub data_dir: PathBuf,
    /// TUI 重绘节拍
    pub tick_rate: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = ProjectDirs::from("dev", "bevodoro", "bevodoro-settings")
            .map(|p| p.data_local_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("bevodoro-settings"));
        Self {
            data_dir,
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}
