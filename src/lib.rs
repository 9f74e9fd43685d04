//! Bevodoro 设置页：背景音乐、Bevo 音效两个开关，以及番茄钟时长选择。
//!
//! 状态只存在内存里，每次构造页面都会重置。

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod messages;
pub mod screen;
pub mod settings;
pub mod ui;
