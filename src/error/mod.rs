//! 统一错误处理模块
//!
//! 所有错误类型都通过 thiserror 实现 Display 和 Error。

mod app;

pub use app::{AppError, MountError};
