use super::{DurationOption, SettingRow};

/// 设置页内存状态；每次构造页面都重置为默认值，不落盘
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsState {
    pub background_music_enabled: bool,
    pub bevos_sound_enabled: bool,
    pub pomodoro_minutes: DurationOption,
}

impl SettingsState {
    /// 开关行的当前值；番茄钟行没有开关
    pub fn toggle_value(&self, row: SettingRow) -> Option<bool> {
        match row {
            SettingRow::BackgroundMusic => Some(self.background_music_enabled),
            SettingRow::BevosSound => Some(self.bevos_sound_enabled),
            SettingRow::PomodoroTimer => None,
        }
    }

    /// 返回 false 表示该行没有开关，状态未变
    pub fn set_toggle(&mut self, row: SettingRow, value: bool) -> bool {
        match row {
            SettingRow::BackgroundMusic => self.background_music_enabled = value,
            SettingRow::BevosSound => self.bevos_sound_enabled = value,
            SettingRow::PomodoroTimer => return false,
        }
        true
    }
}
