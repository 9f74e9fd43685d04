pub mod cli;
pub mod tui;

pub use cli::{Cli, Command, rows_report};
pub use tui::run_tui;
