//! Theming system for skillpath

mod paper;
mod tokyo_night;

use ratatui::style::Color;

/// Build a Color from a packed 0xRRGGBB value.
const fn hex(rgb: u32) -> Color {
    Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// A color theme for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Surfaces, from the app background up to raised panels
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_tertiary: Color,

    // Text
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Brand accents
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Semantic colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Code highlighting
    pub syntax_keyword: Color,
    pub syntax_string: Color,
    pub syntax_number: Color,
    pub syntax_comment: Color,
    pub syntax_function: Color,
    pub syntax_type: Color,
    pub syntax_operator: Color,

    // Chrome
    pub border: Color,
    pub border_focused: Color,
    pub selection: Color,
    pub cursor: Color,
}

impl Theme {
    pub fn tokyo_night() -> Self {
        tokyo_night::build()
    }

    pub fn paper() -> Self {
        paper::build()
    }

    /// Look up a theme by its config name. Unknown names fall back to the
    /// default so a stale config entry never breaks startup.
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "paper" => Theme::paper(),
            _ => Theme::tokyo_night(),
        }
    }

    /// Names accepted by [`Theme::by_name`].
    pub fn available() -> &'static [&'static str] {
        &["tokyo-night", "paper"]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::tokyo_night()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_unpacks_channels() {
        assert_eq!(hex(0x1a1b26), Color::Rgb(26, 27, 38));
        assert_eq!(hex(0xffffff), Color::Rgb(255, 255, 255));
        assert_eq!(hex(0x000000), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn default_theme_is_tokyo_night() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Tokyo Night");
    }

    #[test]
    fn by_name_finds_paper() {
        assert_eq!(Theme::by_name("paper").name, "Paper");
        assert_eq!(Theme::by_name("PAPER").name, "Paper");
    }

    #[test]
    fn by_name_falls_back_to_default() {
        assert_eq!(Theme::by_name("no-such-theme").name, "Tokyo Night");
    }
}
