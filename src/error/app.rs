//! 应用通用错误

/// 应用通用错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// IO 错误（终端读写等）
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    /// 设置页挂载失败
    #[error("挂载设置页失败: {0}")]
    Mount(#[from] MountError),
}

/// 设置列表挂载点相关错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    /// 终端区域放不下标题栏、设置行与状态栏
    #[error("终端尺寸 {width}x{height} 过小，至少需要 {min_width}x{min_height}")]
    TooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
}
