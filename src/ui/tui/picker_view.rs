use super::styles::separator_style;
use super::widgets::list_state;
use crate::app::PickerSnapshot;
use crate::screen::{DONE_LABEL, DurationPicker, SheetLayout};
use crate::settings::SettingRow;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

pub(super) fn draw_picker(f: &mut Frame, sheet: &SheetLayout, picker: PickerSnapshot) {
    f.render_widget(Clear, sheet.area);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(SettingRow::PomodoroTimer.title()),
        sheet.area,
    );

    f.render_widget(
        Paragraph::new("────")
            .alignment(Alignment::Center)
            .style(separator_style()),
        sheet.grabber,
    );
    f.render_widget(
        Paragraph::new(DONE_LABEL)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        sheet.done,
    );

    let items: Vec<ListItem> = DurationPicker::labels()
        .into_iter()
        .map(|label| ListItem::new(Line::from(label).alignment(Alignment::Center)))
        .collect();
    let wheel = List::new(items)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
    f.render_stateful_widget(wheel, sheet.wheel, &mut list_state(picker.highlighted));
}
