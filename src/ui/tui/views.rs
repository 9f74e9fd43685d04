use super::header::draw_header;
use super::overlays::{draw_help_overlay, draw_resize_hint};
use super::picker_view::draw_picker;
use super::settings_view::{draw_settings, draw_status};
use crate::app::AppSnapshot;
use crate::screen::ListMount;
use ratatui::Frame;

pub(super) fn draw_ui(f: &mut Frame, app: &AppSnapshot) {
    let size = f.area();

    // 构造之后终端被缩小：画提示而不是列表
    let mount = match ListMount::resolve(size) {
        Ok(m) => m,
        Err(e) => {
            draw_resize_hint(f, size, &e);
            return;
        }
    };

    draw_header(f, &mount);
    draw_settings(f, &mount, app);
    draw_status(f, mount.footer, &app.status);

    if let Some(picker) = app.picker {
        draw_picker(f, &mount.sheet(), picker);
    }

    if app.help_visible {
        draw_help_overlay(f, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::settings::SettingRow;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &AppSnapshot, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|f| draw_ui(f, app)).expect("draw");
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn draws_header_and_rows() {
        let text = screen_text(&AppSnapshot::from_app(&App::default()), 60, 16);
        assert!(text.contains("Settings"));
        assert!(text.contains("Back"));
        assert!(text.contains("Background Music"));
        assert!(text.contains("Bevo's Sound"));
        assert!(text.contains("Pomodoro Timer"));
        assert!(text.contains("OFF"));
    }

    #[test]
    fn draws_picker_sheet_when_open() {
        let mut app = App::default();
        app.list.on_row_activated(SettingRow::PomodoroTimer);
        let text = screen_text(&AppSnapshot::from_app(&app), 60, 16);
        assert!(text.contains("Done"));
        assert!(text.contains("15 min"));
        assert!(text.contains("60 min"));
    }

    #[test]
    fn too_small_terminal_shows_hint() {
        let text = screen_text(&AppSnapshot::from_app(&App::default()), 30, 6);
        assert!(!text.contains("Background Music"));
        assert!(text.contains("30x6"));
    }
}
