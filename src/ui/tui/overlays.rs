use crate::error::MountError;
use ratatui::{
    Frame,
    layout::Alignment,
    prelude::Rect,
    text::{Line, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub(super) fn draw_help_overlay(f: &mut Frame, area: Rect) {
    let width = area.width.saturating_sub(4).min(60);
    let height = area.height.saturating_sub(2).min(13);
    let popup = centered_rect(area, width, height);

    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from("Help"),
        Line::from(""),
        Line::from("↑/↓ or k/j: Select row / Move wheel"),
        Line::from("Space: Flip switch"),
        Line::from("Enter: Open row / Done"),
        Line::from("Esc / Backspace / b: Back"),
        Line::from("Mouse: Click switch, row, Done; scroll wheel"),
        Line::from("q / Ctrl+C: Quit"),
        Line::from("? / Esc: Close help"),
    ];
    let help = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("帮助"))
        .wrap(Wrap { trim: false });
    f.render_widget(help, popup);
}

pub(super) fn draw_resize_hint(f: &mut Frame, area: Rect, err: &MountError) {
    let hint = Paragraph::new(err.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(hint, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}
