//! Paper, a light palette for bright terminals

use ratatui::style::Color;

use super::{Theme, hex};

const SHEET: Color = hex(0xfaf8f2);
const SHEET_DIM: Color = hex(0xf0ece2);
const SHEET_SHADE: Color = hex(0xdcd6c6);
const INK: Color = hex(0x383a42);
const INK_DARK: Color = hex(0x282a30);
const INK_FADED: Color = hex(0x969184);
const BLUE: Color = hex(0x4078f2);
const MAGENTA: Color = hex(0xa626a4);
const GREEN: Color = hex(0x50a14f);
const OCHRE: Color = hex(0xc18401);
const RED: Color = hex(0xca1243);
const TEAL: Color = hex(0x0184bc);
const GRAY: Color = hex(0xa0a1a7);
const HIGHLIGHT: Color = hex(0xe5e5e6);

pub(super) fn build() -> Theme {
    Theme {
        name: "Paper".to_string(),
        bg_primary: SHEET,
        bg_secondary: SHEET_DIM,
        bg_tertiary: SHEET_SHADE,
        fg_primary: INK,
        fg_secondary: INK_DARK,
        fg_muted: INK_FADED,
        accent_primary: BLUE,
        accent_secondary: MAGENTA,
        success: GREEN,
        warning: OCHRE,
        error: RED,
        info: TEAL,
        syntax_keyword: MAGENTA,
        syntax_string: GREEN,
        syntax_number: OCHRE,
        syntax_comment: GRAY,
        syntax_function: BLUE,
        syntax_type: TEAL,
        syntax_operator: INK,
        border: SHEET_SHADE,
        border_focused: BLUE,
        selection: HIGHLIGHT,
        cursor: INK_DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paper_is_dark_on_light() {
        let theme = build();
        assert_eq!(theme.name, "Paper");
        assert_eq!(theme.bg_primary, Color::Rgb(250, 248, 242));
        assert_eq!(theme.fg_primary, Color::Rgb(56, 58, 66));
    }
}
