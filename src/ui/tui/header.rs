use super::styles::separator_style;
use crate::screen::{BACK_LABEL, ListMount};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub(super) fn draw_header(f: &mut Frame, mount: &ListMount) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(separator_style());
    let inner = block.inner(mount.header);
    f.render_widget(block, mount.header);

    let title_line = Rect { height: 1, ..inner };
    f.render_widget(
        Paragraph::new("Settings")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        title_line,
    );

    let back = mount.back_rect();
    f.render_widget(
        Paragraph::new(format!(" {BACK_LABEL}")).style(Style::default().fg(Color::Cyan)),
        back,
    );
}
