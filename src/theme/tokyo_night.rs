//! Tokyo Night, the default dark theme
//!
//! Palette values from the Tokyo Night editor scheme.

use ratatui::style::Color;

use super::{Theme, hex};

const NIGHT: Color = hex(0x1a1b26);
const STORM: Color = hex(0x24283b);
const TERMINAL_BLACK: Color = hex(0x414868);
const FG: Color = hex(0xa9b1d6);
const FG_BRIGHT: Color = hex(0xc0caf5);
const COMMENT: Color = hex(0x565f89);
const BLUE: Color = hex(0x7aa2f7);
const PURPLE: Color = hex(0xbb9af7);
const GREEN: Color = hex(0x9ece6a);
const YELLOW: Color = hex(0xe0af68);
const RED: Color = hex(0xf7768e);
const CYAN_BRIGHT: Color = hex(0x7dcfff);
const CYAN: Color = hex(0x2ac3de);
const BLUE_PALE: Color = hex(0x89ddff);
const ORANGE: Color = hex(0xff9e64);
const SELECTION_BLUE: Color = hex(0x283457);

pub(super) fn build() -> Theme {
    Theme {
        name: "Tokyo Night".to_string(),
        bg_primary: NIGHT,
        bg_secondary: STORM,
        bg_tertiary: TERMINAL_BLACK,
        fg_primary: FG,
        fg_secondary: FG_BRIGHT,
        fg_muted: COMMENT,
        accent_primary: BLUE,
        accent_secondary: PURPLE,
        success: GREEN,
        warning: YELLOW,
        error: RED,
        info: CYAN_BRIGHT,
        syntax_keyword: PURPLE,
        syntax_string: GREEN,
        syntax_number: ORANGE,
        syntax_comment: COMMENT,
        syntax_function: BLUE,
        syntax_type: CYAN,
        syntax_operator: BLUE_PALE,
        border: TERMINAL_BLACK,
        border_focused: BLUE,
        selection: SELECTION_BLUE,
        cursor: FG_BRIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_after_the_scheme() {
        assert_eq!(build().name, "Tokyo Night");
    }

    #[test]
    fn keyword_tint_matches_the_secondary_accent() {
        let theme = build();
        assert_eq!(theme.syntax_keyword, theme.accent_secondary);
        assert_eq!(theme.border_focused, theme.accent_primary);
    }
}
