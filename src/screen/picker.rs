use crate::settings::DurationOption;

/// 番茄钟时长选择器（底部弹出的单列滚轮）。
///
/// 一个实例对应一次弹出：`open` 进入打开状态，`confirm` 消费实例并交回选中的时长。
/// 没有取消路径，所以每个实例至多交付一次结果，且只能经由 `confirm`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationPicker {
    highlighted: usize,
}

impl DurationPicker {
    /// 以 `initial_minutes` 预选滚轮；不在可选序列里时不预选，停在第一项
    pub fn open(initial_minutes: u32) -> Self {
        let highlighted = match DurationOption::index_of(initial_minutes) {
            Some(index) => index,
            None => {
                tracing::debug!(initial_minutes, "初始时长不在可选列表中，不预选");
                0
            }
        };
        Self { highlighted }
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted
    }

    pub fn highlighted(&self) -> DurationOption {
        DurationOption::at(self.highlighted).unwrap_or_default()
    }

    pub fn scroll_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.highlighted = (self.highlighted + 1).min(DurationOption::ALL.len() - 1);
    }

    /// 越界的下标被忽略，返回 false
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= DurationOption::ALL.len() {
            return false;
        }
        self.highlighted = index;
        true
    }

    pub fn labels() -> Vec<String> {
        DurationOption::ALL.iter().map(|o| o.label()).collect()
    }

    pub fn confirm(self) -> DurationOption {
        let picked = self.highlighted();
        tracing::debug!(minutes = picked.minutes(), "时长选择器确认");
        picked
    }
}
