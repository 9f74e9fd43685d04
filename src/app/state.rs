use crate::screen::{RenderedRow, SettingsList};
use crate::settings::{SettingRow, SettingsState};

#[derive(Debug, Clone, Default)]
pub struct App {
    pub list: SettingsList,
    pub help_visible: bool,
}

/// UI 绘制用的只读快照，由 AppActor 在每次状态变化后发出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSnapshot {
    pub rows: Vec<RenderedRow>,
    pub selected: SettingRow,
    pub settings: SettingsState,
    pub picker: Option<PickerSnapshot>,
    pub status: String,
    pub help_visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerSnapshot {
    pub highlighted: usize,
}

impl AppSnapshot {
    pub fn from_app(app: &App) -> Self {
        Self {
            rows: app.list.render(),
            selected: app.list.selected_row(),
            settings: *app.list.state(),
            picker: app.list.picker().map(|p| PickerSnapshot {
                highlighted: p.highlighted_index(),
            }),
            status: app.list.status().to_owned(),
            help_visible: app.help_visible,
        }
    }
}
