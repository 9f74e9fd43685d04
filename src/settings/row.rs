/// 设置页的行，声明顺序即显示顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingRow {
    BackgroundMusic = 0,
    BevosSound = 1,
    PomodoroTimer = 2,
}

/// 行尾控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Toggle,
    Disclosure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowContent {
    pub title: &'static str,
    pub icon: &'static str,
    pub control: ControlKind,
}

impl SettingRow {
    pub const ALL: [SettingRow; 3] = [
        SettingRow::BackgroundMusic,
        SettingRow::BevosSound,
        SettingRow::PomodoroTimer,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            SettingRow::BackgroundMusic => "Background Music",
            SettingRow::BevosSound => "Bevo's Sound",
            SettingRow::PomodoroTimer => "Pomodoro Timer",
        }
    }

    /// 图标标识（与移动端的符号名保持一致，绘制时再映射成终端字符）
    pub fn icon_name(self) -> &'static str {
        match self {
            SettingRow::BackgroundMusic => "music.note",
            SettingRow::BevosSound => "speaker.wave.2.fill",
            SettingRow::PomodoroTimer => "clock",
        }
    }

    pub fn control(self) -> ControlKind {
        match self {
            SettingRow::BackgroundMusic | SettingRow::BevosSound => ControlKind::Toggle,
            SettingRow::PomodoroTimer => ControlKind::Disclosure,
        }
    }

    pub fn content(self) -> RowContent {
        RowContent {
            title: self.title(),
            icon: self.icon_name(),
            control: self.control(),
        }
    }
}
