use crate::app::AppSnapshot;
use crate::settings::SettingRow;

#[derive(Debug)]
pub enum AppCommand {
    Bootstrap,
    SettingsMoveUp,
    SettingsMoveDown,
    /// 翻转当前选中行的开关
    SettingsToggleSelected,
    SettingsToggle { row: SettingRow },
    /// 激活当前选中行（番茄钟行会打开选择器）
    SettingsActivateSelected,
    SettingsActivate { row: SettingRow },
    PickerMoveUp,
    PickerMoveDown,
    PickerSelect { index: usize },
    PickerConfirm,
    UiToggleHelp,
    Back,
    Quit,
}

#[derive(Debug)]
pub enum AppEvent {
    State(Box<AppSnapshot>),
    /// 用户点了返回，请求宿主关闭设置页
    Dismiss,
}
