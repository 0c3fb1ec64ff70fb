//! Home screen with the animated level-ladder logo

use once_cell::sync::Lazy;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::HomeAnimation;
use crate::theme::Theme;

/// Bar heights of the logo, one bar per ladder level
const BAR_HEIGHTS: [usize; 5] = [2, 4, 6, 8, 10];
const BAR_WIDTH: usize = 3;
const BAR_GAP: usize = 2;

const LOGO_ROWS: usize = 10;
const LOGO_COLS: usize = 2 + 5 * (BAR_WIDTH + BAR_GAP);

/// The complete logo for reference (what it looks like when fully drawn)
/// ```text
///                         ▓▓▓
///                         ███
///                    ▓▓▓  ███
///                    ███  ███
///               ▓▓▓  ███  ███
///               ███  ███  ███
///          ▓▓▓  ███  ███  ███
///          ███  ███  ███  ███
///     ▓▓▓  ███  ███  ███  ███
///     ███  ███  ███  ███  ███
/// ```
/// Logo cell path - (row, col, char) in drawing order, bar by bar from
/// the lowest to the tallest
static LOGO_PATH: Lazy<Vec<(usize, usize, char)>> = Lazy::new(|| {
    let mut path = Vec::new();
    for (bar, &height) in BAR_HEIGHTS.iter().enumerate() {
        let left = 2 + bar * (BAR_WIDTH + BAR_GAP);
        for step in 0..height {
            let row = LOGO_ROWS - 1 - step;
            let ch = if step == height - 1 { '▓' } else { '█' };
            for col in left..left + BAR_WIDTH {
                path.push((row, col, ch));
            }
        }
    }
    path
});

const TAGLINE: &str = "Master full stack development, one level at a time";
const BADGE: &str = "🚀 AI-Powered Learning Platform";
const STATS: &str = "10K+ Active Learners   50+ Lessons   95% Success Rate";
const FEATURES: &str = "📖 Structured Learning  📝 Smart Testing  🏆 Competitions  💼 Career Guidance";
const PROMPT: &str = "Press Enter to begin...";

/// Build the logo string based on animation progress
fn build_logo(progress: f32) -> String {
    let mut grid: Vec<Vec<char>> = vec![vec![' '; LOGO_COLS]; LOGO_ROWS];

    let segments_to_draw = ((LOGO_PATH.len() as f32) * progress) as usize;

    for (i, &(row, col, ch)) in LOGO_PATH.iter().enumerate() {
        if i < segments_to_draw && row < LOGO_ROWS && col < LOGO_COLS {
            grid[row][col] = ch;
        }
    }

    grid.iter().map(|row| row.iter().collect::<String>()).collect::<Vec<_>>().join("\n")
}

/// Draw the home screen with the logo animation
pub fn draw(frame: &mut Frame, animation: &HomeAnimation, theme: &Theme) {
    let area = frame.area();

    // Fill background
    let bg_style = Style::default().bg(theme.bg_primary);
    frame.render_widget(Paragraph::new("").style(bg_style), area);

    // Build and render the logo
    let logo_str = build_logo(animation.logo_progress());
    let logo_style = Style::default().fg(theme.accent_primary).bg(theme.bg_primary);

    // Center the logo vertically in upper portion
    let logo_y = (area.height / 5).min(area.height.saturating_sub(LOGO_ROWS as u16 + 12));
    let logo_area = Rect {
        x: area.x,
        y: logo_y,
        width: area.width,
        height: (LOGO_ROWS as u16).min(area.height.saturating_sub(logo_y)),
    };
    let logo = Paragraph::new(logo_str).style(logo_style).alignment(Alignment::Center);
    frame.render_widget(logo, logo_area);

    // Title - fade in character by character
    let title_chars = animation.title_chars();
    let title_len = HomeAnimation::TITLE.chars().count();
    if title_chars > 0 {
        let visible_title: String = HomeAnimation::TITLE.chars().take(title_chars).collect();
        // Pad with spaces to maintain centering
        let padding = " ".repeat(title_len - title_chars);
        let padded_title = format!("{}{}", visible_title, padding);

        let title_style = Style::default()
            .fg(theme.fg_primary)
            .bg(theme.bg_primary)
            .add_modifier(Modifier::BOLD);

        draw_centered_line(frame, area, logo_area.bottom() + 1, padded_title, title_style);
    }

    // Tagline and the hero body
    if animation.show_tagline() {
        let muted = Style::default().fg(theme.fg_muted).bg(theme.bg_primary);
        let secondary = Style::default().fg(theme.fg_secondary).bg(theme.bg_primary);
        let accent = Style::default().fg(theme.accent_secondary).bg(theme.bg_primary);

        let base_y = logo_area.bottom() + 3;
        draw_centered_line(frame, area, base_y, TAGLINE.to_string(), secondary);
        draw_centered_line(frame, area, base_y + 2, BADGE.to_string(), accent);
        draw_centered_line(frame, area, base_y + 4, STATS.to_string(), muted);
        draw_centered_line(frame, area, base_y + 5, FEATURES.to_string(), muted);
    }

    // Blinking prompt
    if animation.complete {
        let blink = (animation.start_time.elapsed().as_millis() / 500) % 2 == 0;
        if blink {
            let prompt_style = Style::default().fg(theme.fg_muted).bg(theme.bg_primary);
            draw_centered_line(frame, area, logo_area.bottom() + 11, PROMPT.to_string(), prompt_style);
        }
    }
}

/// Render one centered line at a fixed row, skipping rows off the bottom
fn draw_centered_line(frame: &mut Frame, area: Rect, y: u16, text: String, style: Style) {
    if y >= area.bottom() {
        return;
    }
    let line_area = Rect { x: area.x, y, width: area.width, height: 1 };
    let line = Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center);
    frame.render_widget(line, line_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_path_covers_all_bars() {
        let expected: usize = BAR_HEIGHTS.iter().map(|h| h * BAR_WIDTH).sum();
        assert_eq!(LOGO_PATH.len(), expected);
    }

    #[test]
    fn logo_path_stays_on_grid() {
        for &(row, col, _) in LOGO_PATH.iter() {
            assert!(row < LOGO_ROWS);
            assert!(col < LOGO_COLS);
        }
    }

    #[test]
    fn build_logo_empty_at_zero() {
        let logo = build_logo(0.0);
        let non_space: usize = logo.chars().filter(|c| !c.is_whitespace()).count();
        assert_eq!(non_space, 0);
    }

    #[test]
    fn build_logo_full_at_one() {
        let logo = build_logo(1.0);
        let non_space: usize = logo.chars().filter(|c| !c.is_whitespace()).count();
        assert_eq!(non_space, LOGO_PATH.len());
    }

    #[test]
    fn build_logo_partial() {
        let logo = build_logo(0.5);
        let non_space: usize = logo.chars().filter(|c| !c.is_whitespace()).count();
        assert!(non_space > 0);
        assert!(non_space < LOGO_PATH.len());
    }
}
