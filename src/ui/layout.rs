//! Layout utilities and common components

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::Theme;

/// Fill an area with the theme background
pub fn fill_background(frame: &mut Frame, area: Rect, theme: &Theme) {
    frame.render_widget(Paragraph::new("").style(Style::default().bg(theme.bg_primary)), area);
}

/// Create a centered rectangle with the given percentage of width and height
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

/// Draw a scrollbar indicator along the right edge of a panel
pub fn draw_scrollbar(
    frame: &mut Frame,
    x: u16,
    y: u16,
    height: u16,
    scroll_offset: usize,
    total_lines: usize,
    theme: &Theme,
) {
    if total_lines == 0 || height == 0 {
        return;
    }

    let height = height as usize;

    // Calculate thumb size and position
    let visible_ratio = (height as f64 / total_lines as f64).min(1.0);
    let thumb_height = ((height as f64 * visible_ratio).ceil() as usize).max(1);

    // Calculate max scroll position to avoid division by zero
    let max_scroll = total_lines.saturating_sub(height / 2);
    let scroll_ratio = if total_lines <= height || max_scroll == 0 {
        0.0
    } else {
        scroll_offset as f64 / max_scroll as f64
    };
    let thumb_top = ((height - thumb_height) as f64 * scroll_ratio).round() as usize;

    // Draw track and thumb
    for i in 0..height {
        let on_thumb = i >= thumb_top && i < thumb_top + thumb_height;
        let ch = if on_thumb { "█" } else { "░" };
        let style = if on_thumb {
            Style::default().fg(theme.accent_secondary)
        } else {
            Style::default().fg(theme.bg_tertiary)
        };

        frame.render_widget(
            Paragraph::new(ch).style(style),
            Rect { x, y: y.saturating_add(i as u16), width: 1, height: 1 },
        );
    }
}

/// Build a key-hint line, e.g. "[j/k] move  [Enter] select"
pub fn key_hints(pairs: &[(&str, &str)], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, desc) in pairs {
        spans.push(Span::styled(format!("[{key}]"), Style::default().fg(theme.fg_muted)));
        spans.push(Span::styled(format!(" {desc}  "), Style::default().fg(theme.fg_secondary)));
    }
    Line::from(spans)
}

/// Render a slice of pre-built lines with a scroll offset and a scrollbar.
///
/// Returns the number of lines actually shown.
pub fn render_scrolled(
    frame: &mut Frame,
    area: Rect,
    lines: Vec<Line<'static>>,
    offset: usize,
    theme: &Theme,
) -> usize {
    let total_lines = lines.len();
    let visible_height = area.height as usize;

    let text_area =
        Rect { x: area.x, y: area.y, width: area.width.saturating_sub(1), height: area.height };
    let scrollbar_x = area.x + area.width.saturating_sub(1);

    let end = (offset + visible_height).min(total_lines);
    let shown = end.saturating_sub(offset);
    let visible: Vec<Line> = lines.into_iter().skip(offset).take(shown).collect();

    frame.render_widget(Paragraph::new(visible), text_area);
    draw_scrollbar(frame, scrollbar_x, area.y, area.height, offset, total_lines, theme);
    shown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(70, 70, parent);
        assert!(rect.x >= parent.x);
        assert!(rect.y >= parent.y);
        assert!(rect.right() <= parent.right());
        assert!(rect.bottom() <= parent.bottom());
    }

    #[test]
    fn centered_rect_full_size() {
        let parent = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(100, 100, parent);
        assert_eq!(rect, parent);
    }

    #[test]
    fn key_hints_pairs_spans() {
        let theme = Theme::default();
        let line = key_hints(&[("j/k", "move"), ("Enter", "select")], &theme);
        assert_eq!(line.spans.len(), 4);
        assert_eq!(line.spans[0].content, "[j/k]");
    }
}
