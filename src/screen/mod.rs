//! 设置页：设置列表、时长选择器与挂载点

mod list;
mod mount;
mod picker;

pub use list::{ControlState, RenderedRow, SettingsList};
pub use mount::{
    BACK_LABEL, DONE_LABEL, FOOTER_HEIGHT, HEADER_HEIGHT, ListMount, MIN_HEIGHT, MIN_WIDTH,
    ROW_HEIGHT, SHEET_HEIGHT, SWITCH_WIDTH, SheetLayout,
};
pub use picker::DurationPicker;
