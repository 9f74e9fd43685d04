use super::styles::{focus_style, separator_style, switch_style};
use super::utils::{DISCLOSURE_LABEL, icon_cell, switch_label};
use crate::app::AppSnapshot;
use crate::screen::{ControlState, ListMount};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HINT: &str = "↑↓ select | Space toggle | Enter open | Esc back | ? help | q quit";

pub(super) fn draw_settings(f: &mut Frame, mount: &ListMount, app: &AppSnapshot) {
    for r in &app.rows {
        let area = mount.row_rect(r.row);
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(separator_style());
        let inner = block.inner(area);
        f.render_widget(block, area);

        // 选择器打开时不显示光标
        let selected = r.row == app.selected && app.picker.is_none();
        let marker = if selected { "▸ " } else { "  " };
        let line = Line::from(vec![
            Span::styled(marker, focus_style(selected)),
            Span::raw(icon_cell(r.content.icon)),
            Span::raw("  "),
            Span::styled(r.content.title, focus_style(selected)),
        ]);
        f.render_widget(Paragraph::new(line), inner);

        let control = match r.control {
            ControlState::Switch { on } => Span::styled(switch_label(on), switch_style(on)),
            ControlState::Disclosure => {
                Span::styled(DISCLOSURE_LABEL, Style::default().fg(Color::Gray))
            }
        };
        let control_area = mount.switch_rect(r.row);
        f.render_widget(
            Paragraph::new(Line::from(vec![control, Span::raw(" ")])).alignment(Alignment::Right),
            control_area,
        );
    }
}

pub(super) fn draw_status(f: &mut Frame, area: Rect, status: &str) {
    let text = if status.is_empty() { HINT } else { status };
    let p = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(p, area);
}
