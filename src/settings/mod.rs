mod duration;
mod row;
mod state;

pub use duration::DurationOption;
pub use row::{ControlKind, RowContent, SettingRow};
pub use state::SettingsState;
