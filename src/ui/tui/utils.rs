use unicode_width::UnicodeWidthStr;

/// 图标占两列，保证标题左对齐
const ICON_CELL_WIDTH: usize = 2;

pub(super) fn icon_glyph(icon_name: &str) -> &'static str {
    match icon_name {
        "music.note" => "♪",
        "speaker.wave.2.fill" => "🔊",
        "clock" => "⏱",
        _ => "•",
    }
}

pub(super) fn icon_cell(icon_name: &str) -> String {
    let glyph = icon_glyph(icon_name);
    let pad = ICON_CELL_WIDTH.saturating_sub(glyph.width());
    format!("{glyph}{}", " ".repeat(pad))
}

pub(super) fn switch_label(on: bool) -> &'static str {
    if on { "[ ON ●]" } else { "[○ OFF]" }
}

pub(super) const DISCLOSURE_LABEL: &str = "›";
