use super::DurationPicker;
use crate::settings::{ControlKind, DurationOption, RowContent, SettingRow, SettingsState};

/// 行尾控件的当前显示状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Switch { on: bool },
    Disclosure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedRow {
    pub row: SettingRow,
    pub content: RowContent,
    pub control: ControlState,
}

/// 设置列表：三行固定内容 + 内存中的设置状态 + 可能打开着的时长选择器
#[derive(Debug, Clone, Default)]
pub struct SettingsList {
    state: SettingsState,
    selected: usize,
    picker: Option<DurationPicker>,
    status: String,
}

impl SettingsList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SettingsState {
        &self.state
    }

    pub fn selected_row(&self) -> SettingRow {
        SettingRow::from_index(self.selected).unwrap_or(SettingRow::BackgroundMusic)
    }

    pub fn picker(&self) -> Option<&DurationPicker> {
        self.picker.as_ref()
    }

    pub fn picker_mut(&mut self) -> Option<&mut DurationPicker> {
        self.picker.as_mut()
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker.is_some()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn render(&self) -> Vec<RenderedRow> {
        SettingRow::ALL
            .iter()
            .map(|&row| {
                let content = self.row_content(row);
                let control = match content.control {
                    ControlKind::Toggle => ControlState::Switch {
                        on: self.state.toggle_value(row).unwrap_or(false),
                    },
                    ControlKind::Disclosure => ControlState::Disclosure,
                };
                RenderedRow {
                    row,
                    content,
                    control,
                }
            })
            .collect()
    }

    pub fn row_content(&self, row: SettingRow) -> RowContent {
        row.content()
    }

    pub fn on_toggle_changed(&mut self, row: SettingRow, new_value: bool) {
        if !self.state.set_toggle(row, new_value) {
            return;
        }
        tracing::info!(row = ?row, enabled = new_value, "开关已切换");
        self.status = format!("{}: {}", row.title(), if new_value { "On" } else { "Off" });
    }

    /// 翻转该行的开关；番茄钟行无开关，什么也不做
    pub fn toggle(&mut self, row: SettingRow) {
        if let Some(current) = self.state.toggle_value(row) {
            self.on_toggle_changed(row, !current);
        }
    }

    /// 点击整行。只有番茄钟行会响应（打开选择器），返回是否打开了选择器
    pub fn on_row_activated(&mut self, row: SettingRow) -> bool {
        self.selected = row.index();
        if row != SettingRow::PomodoroTimer || self.picker.is_some() {
            return false;
        }
        let minutes = self.state.pomodoro_minutes.minutes();
        self.picker = Some(DurationPicker::open(minutes));
        tracing::info!(minutes, "打开番茄钟时长选择器");
        true
    }

    pub fn on_duration_picked(&mut self, minutes: DurationOption) {
        self.state.pomodoro_minutes = minutes;
        tracing::info!(minutes = minutes.minutes(), "番茄钟时长已更新");
        self.status = format!("{}: {}", SettingRow::PomodoroTimer.title(), minutes);
    }

    /// 确认选择器（Done）：交付结果并关闭。选择器未打开时返回 None
    pub fn confirm_picker(&mut self) -> Option<DurationOption> {
        let picked = self.picker.take()?.confirm();
        self.on_duration_picked(picked);
        Some(picked)
    }

    pub fn select(&mut self, row: SettingRow) {
        self.selected = row.index();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(SettingRow::COUNT - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(m: u32) -> DurationOption {
        DurationOption::from_minutes(m).expect("valid duration")
    }

    #[test]
    fn render_lists_three_rows_in_order() {
        let list = SettingsList::new();
        let rows = list.render();
        assert_eq!(rows.len(), SettingRow::COUNT);
        let order: Vec<SettingRow> = rows.iter().map(|r| r.row).collect();
        assert_eq!(order, SettingRow::ALL.to_vec());
        assert_eq!(rows[0].control, ControlState::Switch { on: false });
        assert_eq!(rows[2].control, ControlState::Disclosure);
    }

    #[test]
    fn toggle_roundtrip_restores_original_value() {
        let mut list = SettingsList::new();
        list.on_toggle_changed(SettingRow::BackgroundMusic, true);
        assert!(list.state().background_music_enabled);
        list.on_toggle_changed(SettingRow::BackgroundMusic, false);
        assert!(!list.state().background_music_enabled);
        assert_eq!(*list.state(), SettingsState::default());
    }

    #[test]
    fn toggle_flips_and_reports_status() {
        let mut list = SettingsList::new();
        list.toggle(SettingRow::BevosSound);
        assert!(list.state().bevos_sound_enabled);
        assert_eq!(list.status(), "Bevo's Sound: On");
        assert_eq!(list.render()[1].control, ControlState::Switch { on: true });
    }

    #[test]
    fn toggle_on_pomodoro_row_is_noop() {
        let mut list = SettingsList::new();
        list.toggle(SettingRow::PomodoroTimer);
        list.on_toggle_changed(SettingRow::PomodoroTimer, true);
        assert_eq!(*list.state(), SettingsState::default());
        assert!(list.status().is_empty());
    }

    #[test]
    fn activating_toggle_rows_does_nothing() {
        let mut list = SettingsList::new();
        assert!(!list.on_row_activated(SettingRow::BackgroundMusic));
        assert!(!list.on_row_activated(SettingRow::BevosSound));
        assert!(!list.is_picker_open());
        assert_eq!(*list.state(), SettingsState::default());
    }

    #[test]
    fn activating_pomodoro_opens_picker_seeded_with_current_value() {
        let mut list = SettingsList::new();
        assert!(list.on_row_activated(SettingRow::PomodoroTimer));
        let picker = list.picker().expect("picker open");
        assert_eq!(picker.highlighted().minutes(), 25);
    }

    #[test]
    fn confirm_delivers_once_and_closes() {
        let mut list = SettingsList::new();
        list.on_duration_picked(minutes(30));
        list.on_row_activated(SettingRow::PomodoroTimer);
        let target = DurationOption::index_of(60).expect("60 is an option");
        list.picker_mut().expect("picker open").select_index(target);

        assert_eq!(list.confirm_picker(), Some(minutes(60)));
        assert_eq!(list.state().pomodoro_minutes.minutes(), 60);
        assert!(!list.is_picker_open());
        assert_eq!(list.confirm_picker(), None);
    }

    #[test]
    fn picked_duration_does_not_change_pomodoro_row() {
        let mut list = SettingsList::new();
        let before = list.render()[SettingRow::PomodoroTimer.index()];
        list.on_duration_picked(minutes(45));
        let after = list.render()[SettingRow::PomodoroTimer.index()];
        assert_eq!(before, after);
        assert_eq!(list.state().pomodoro_minutes.minutes(), 45);
    }

    #[test]
    fn selection_is_bounded() {
        let mut list = SettingsList::new();
        list.select_prev();
        assert_eq!(list.selected_row(), SettingRow::BackgroundMusic);
        for _ in 0..5 {
            list.select_next();
        }
        assert_eq!(list.selected_row(), SettingRow::PomodoroTimer);
    }
}
