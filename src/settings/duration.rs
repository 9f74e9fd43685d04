use std::fmt;

/// 番茄钟时长（分钟）。
///
/// 只能取 [`DurationOption::ALL`] 中的值，顺序即滚轮顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DurationOption(u32);

impl DurationOption {
    pub const ALL: [DurationOption; 5] = [
        DurationOption(15),
        DurationOption(25),
        DurationOption(30),
        DurationOption(45),
        DurationOption(60),
    ];

    pub const DEFAULT: DurationOption = DurationOption(25);

    pub fn from_minutes(minutes: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.0 == minutes)
    }

    /// 对应 `minutes` 在滚轮中的位置；不在序列里返回 None
    pub fn index_of(minutes: u32) -> Option<usize> {
        Self::ALL.iter().position(|o| o.0 == minutes)
    }

    pub fn at(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn label(self) -> String {
        self.to_string()
    }
}

impl Default for DurationOption {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for DurationOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}
