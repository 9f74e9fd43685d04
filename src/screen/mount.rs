use crate::error::MountError;
use crate::settings::{DurationOption, SettingRow};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

pub const BACK_LABEL: &str = "‹ Back";
pub const DONE_LABEL: &str = "Done";

pub const HEADER_HEIGHT: u16 = 2;
pub const ROW_HEIGHT: u16 = 2;
pub const FOOTER_HEIGHT: u16 = 3;
pub const SWITCH_WIDTH: u16 = 9;
pub const SHEET_HEIGHT: u16 = 10;

const ROWS_HEIGHT: u16 = ROW_HEIGHT * SettingRow::COUNT as u16;
const WHEEL_ROWS: u16 = DurationOption::ALL.len() as u16;

pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = HEADER_HEIGHT + ROWS_HEIGHT + FOOTER_HEIGHT;

/// 设置列表的挂载点：终端中容纳标题栏、三行设置和状态栏的区域。
///
/// 页面构造时必须能解析出挂载点，否则返回 [`MountError`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMount {
    pub area: Rect,
    pub header: Rect,
    pub list: Rect,
    pub footer: Rect,
}

/// 底部弹出的时长选择器区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub area: Rect,
    pub grabber: Rect,
    pub done: Rect,
    pub wheel: Rect,
}

impl ListMount {
    pub fn resolve(area: Rect) -> Result<Self, MountError> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return Err(MountError::TooSmall {
                width: area.width,
                height: area.height,
                min_width: MIN_WIDTH,
                min_height: MIN_HEIGHT,
            });
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(ROWS_HEIGHT),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        Ok(Self {
            area,
            header: chunks[0],
            list: chunks[1],
            footer: chunks[2],
        })
    }

    pub fn row_rect(&self, row: SettingRow) -> Rect {
        Rect {
            x: self.list.x,
            y: self.list.y + row.index() as u16 * ROW_HEIGHT,
            width: self.list.width,
            height: ROW_HEIGHT,
        }
    }

    pub fn row_at(&self, pos: Position) -> Option<SettingRow> {
        if !self.list.contains(pos) {
            return None;
        }
        SettingRow::from_index(usize::from((pos.y - self.list.y) / ROW_HEIGHT))
    }

    /// 开关所在区域（该行第一行的最右侧）
    pub fn switch_rect(&self, row: SettingRow) -> Rect {
        let r = self.row_rect(row);
        Rect {
            x: r.right().saturating_sub(SWITCH_WIDTH),
            y: r.y,
            width: SWITCH_WIDTH.min(r.width),
            height: 1,
        }
    }

    pub fn back_rect(&self) -> Rect {
        Rect {
            x: self.header.x,
            y: self.header.y,
            width: (BACK_LABEL.width() as u16 + 2).min(self.header.width),
            height: 1,
        }
    }

    pub fn sheet(&self) -> SheetLayout {
        let height = SHEET_HEIGHT.min(self.area.height);
        let area = Rect {
            x: self.area.x,
            y: self.area.bottom() - height,
            width: self.area.width,
            height,
        };
        // 边框内：第 0 行抓手，第 1 行 Done，第 3 行起是滚轮
        let inner_x = area.x + 1;
        let inner_y = area.y + 1;
        let inner_width = area.width.saturating_sub(2);
        let done_width = DONE_LABEL.width() as u16 + 2;

        SheetLayout {
            area,
            grabber: Rect {
                x: inner_x,
                y: inner_y,
                width: inner_width,
                height: 1,
            },
            done: Rect {
                x: (inner_x + inner_width).saturating_sub(done_width),
                y: inner_y + 1,
                width: done_width,
                height: 1,
            },
            wheel: Rect {
                x: inner_x,
                y: inner_y + 3,
                width: inner_width,
                height: WHEEL_ROWS,
            },
        }
    }
}

impl SheetLayout {
    pub fn wheel_index_at(&self, pos: Position) -> Option<usize> {
        if !self.wheel.contains(pos) {
            return None;
        }
        let index = usize::from(pos.y - self.wheel.y);
        (index < DurationOption::ALL.len()).then_some(index)
    }
}
