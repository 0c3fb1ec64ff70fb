//! Learn tab: chapter browser beside the chapter reader

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppState, LearnPane};
use crate::catalog::{Chapter, CodeBlock, ContentBlock};
use crate::syntax;
use crate::theme::Theme;
use crate::ui::layout::draw_scrollbar;

/// Status indicators for chapters
const STATUS_NOT_STARTED: &str = "○";
const STATUS_COMPLETED: &str = "✓";

pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let columns =
        Layout::horizontal([Constraint::Length(38), Constraint::Min(40)]).split(area);

    let list_focused = state.curriculum.pane == LearnPane::Chapters;
    draw_chapter_list(frame, columns[0], state, theme, list_focused);
    draw_reader(frame, columns[1], state, theme, !list_focused);
}

fn draw_chapter_list(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, focused: bool) {
    let border_color = if focused { theme.border_focused } else { theme.border };
    // Every track serves the same curriculum; the title carries the choice.
    let title = match state.progress.track() {
        Some(track) => format!(" {track} Curriculum "),
        None => " Curriculum ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, chapter) in state.catalog.chapters().iter().enumerate() {
        let completed = state.progress.is_chapter_completed(&chapter.id);
        let status = if completed { STATUS_COMPLETED } else { STATUS_NOT_STARTED };
        let status_style = if completed {
            Style::default().fg(theme.success)
        } else {
            Style::default().fg(theme.fg_muted)
        };

        let selected = i == state.curriculum.selected;
        let title_style = if selected && focused {
            Style::default()
                .fg(theme.bg_primary)
                .bg(theme.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else if selected {
            Style::default().fg(theme.accent_secondary)
        } else {
            Style::default().fg(theme.fg_primary)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {status} "), status_style),
            Span::styled(
                format!("{:>2}. {} ({}m)", i + 1, chapter.title, chapter.estimated_minutes),
                title_style,
            ),
        ]));
    }

    // Keep the selection on screen when the list outgrows the panel
    let visible_height = inner.height as usize;
    let skip = state.curriculum.selected.saturating_sub(visible_height.saturating_sub(1));
    let visible: Vec<Line> = lines.into_iter().skip(skip).take(visible_height).collect();
    frame.render_widget(Paragraph::new(visible), inner);
}

fn draw_reader(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme, focused: bool) {
    let border_color = if focused { theme.border_focused } else { theme.border };

    let Some(chapter) = state.catalog.chapters().get(state.curriculum.selected) else {
        return;
    };
    let completed = state.progress.is_chapter_completed(&chapter.id);

    let block = Block::default()
        .title(format!(" {} ", chapter.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Reserve 1 column for the scrollbar
    let content_width = inner.width.saturating_sub(2) as usize;
    let content_area =
        Rect { x: inner.x, y: inner.y, width: inner.width.saturating_sub(1), height: inner.height };
    let scrollbar_x = inner.x + inner.width.saturating_sub(1);

    let lines = build_reader_lines(chapter, completed, theme, content_width);
    let total_lines = lines.len();
    let visible_height = inner.height as usize;

    // Update state with content metrics for scroll clamping
    state.curriculum.reader.total_lines = total_lines;
    state.curriculum.reader.visible_height = visible_height;
    state.curriculum.reader.clamp();

    let offset = state.curriculum.reader.offset;
    let end = (offset + visible_height).min(total_lines);
    let visible: Vec<Line> = lines.into_iter().skip(offset).take(end - offset).collect();

    frame.render_widget(Paragraph::new(visible), content_area);
    draw_scrollbar(frame, scrollbar_x, inner.y, inner.height, offset, total_lines, theme);
}

/// Assemble the full reader text: meta line, body blocks, key points
fn build_reader_lines(
    chapter: &Chapter,
    completed: bool,
    theme: &Theme,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    let status = if completed {
        Span::styled("✓ Chapter Completed", Style::default().fg(theme.success))
    } else {
        Span::styled("[m] Mark as Completed", Style::default().fg(theme.fg_muted))
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} min read   ", chapter.estimated_minutes),
            Style::default().fg(theme.fg_muted),
        ),
        status,
    ]));

    lines.extend(render_content_blocks(&chapter.body, theme, width));

    if !chapter.key_points.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Key Points",
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        for point in &chapter.key_points {
            render_list_item(&mut lines, point, theme, width);
        }
    }

    lines
}

/// Render content blocks to styled lines
pub fn render_content_blocks(
    blocks: &[ContentBlock],
    theme: &Theme,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    for block in blocks {
        match block {
            ContentBlock::Heading { level, text } => {
                render_heading(&mut lines, *level, text, theme);
            }
            ContentBlock::Paragraph(text) => {
                render_paragraph(&mut lines, text, theme, width);
            }
            ContentBlock::Code(code) => {
                render_code_block(&mut lines, code, theme);
            }
            ContentBlock::UnorderedList(items) => {
                for item in items {
                    render_list_item(&mut lines, item, theme, width);
                }
                lines.push(Line::from(""));
            }
            ContentBlock::OrderedList(items) => {
                render_ordered_list(&mut lines, items, theme, width);
            }
            ContentBlock::HorizontalRule => {
                let rule_width = width.saturating_sub(4).min(32);
                lines.push(Line::from(Span::styled(
                    "─".repeat(rule_width),
                    Style::default().fg(theme.border),
                )));
            }
        }
    }

    lines
}

fn render_heading(lines: &mut Vec<Line<'static>>, level: u8, text: &str, theme: &Theme) {
    let (base_style, code_color, prefix) = match level {
        1 => (
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            theme.syntax_keyword,
            "",
        ),
        2 => (
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
            theme.syntax_function,
            "",
        ),
        3 => (Style::default().fg(theme.info).add_modifier(Modifier::BOLD), theme.syntax_keyword, "  "),
        _ => (
            Style::default().fg(theme.fg_secondary).add_modifier(Modifier::BOLD),
            theme.syntax_keyword,
            "    ",
        ),
    };

    // Inline code inside a heading keeps its own color
    let mut spans: Vec<Span<'static>> = Vec::new();
    if !prefix.is_empty() {
        spans.push(Span::styled(prefix, base_style));
    }

    let mut in_code = false;
    let mut current = String::new();
    for c in text.chars() {
        if c == '`' {
            if !current.is_empty() {
                let style = if in_code {
                    Style::default().fg(code_color).add_modifier(Modifier::BOLD)
                } else {
                    base_style
                };
                spans.push(Span::styled(current.clone(), style));
                current.clear();
            }
            in_code = !in_code;
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        spans.push(Span::styled(current, base_style));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(spans));
    if level <= 2 {
        lines.push(Line::from(""));
    }
}

fn render_paragraph(lines: &mut Vec<Line<'static>>, text: &str, theme: &Theme, width: usize) {
    let spans = parse_inline_code(text, theme);
    let wrapped = wrap_spans(spans, width.saturating_sub(2));

    lines.extend(wrapped);
    lines.push(Line::from(""));
}

/// Split a paragraph into plain and `code` spans.
///
/// The markdown parser strips emphasis markers upstream, so backticks are
/// the only inline markup that reaches the renderer.
fn parse_inline_code(text: &str, theme: &Theme) -> Vec<Span<'static>> {
    let plain = Style::default().fg(theme.fg_primary);
    let code = Style::default().fg(theme.syntax_string).bg(theme.bg_secondary);

    let mut spans = Vec::new();
    let mut in_code = false;
    let mut current = String::new();

    for c in text.chars() {
        if c == '`' {
            if !current.is_empty() {
                let style = if in_code { code } else { plain };
                spans.push(Span::styled(current.clone(), style));
                current.clear();
            }
            in_code = !in_code;
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        // An unclosed backtick renders as plain text
        spans.push(Span::styled(current, plain));
    }

    if spans.is_empty() {
        spans.push(Span::raw(""));
    }

    spans
}

/// Wrap styled spans into lines while preserving formatting
fn wrap_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![Line::from(spans)];
    }

    let mut lines = Vec::new();
    let mut current_line: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0;

    for span in spans {
        let text = span.content.to_string();
        let style = span.style;

        for word in text.split_inclusive(char::is_whitespace) {
            let word_len = word.chars().count();

            if current_width + word_len > width && current_width > 0 {
                lines.push(Line::from(current_line.clone()));
                current_line.clear();
                current_width = 0;
            }

            current_line.push(Span::styled(word.to_string(), style));
            current_width += word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(Line::from(current_line));
    }

    if lines.is_empty() {
        lines.push(Line::from(""));
    }

    lines
}

fn render_code_block(lines: &mut Vec<Line<'static>>, code: &CodeBlock, theme: &Theme) {
    // Language label with box drawing
    let lang_label = code.language.as_deref().unwrap_or("code");
    lines.push(Line::from(vec![
        Span::styled("┌─ ", Style::default().fg(theme.border)),
        Span::styled(lang_label.to_string(), Style::default().fg(theme.info)),
        Span::styled(" ─".to_string(), Style::default().fg(theme.border)),
    ]));

    for line in code.code.lines() {
        let mut line_spans = vec![Span::styled("│ ", Style::default().fg(theme.border))];
        line_spans.extend(syntax::highlight_line(line, code.language.as_deref(), theme));
        lines.push(Line::from(line_spans));
    }

    lines.push(Line::from(Span::styled("└──────", Style::default().fg(theme.border))));
    lines.push(Line::from(""));
}

fn render_list_item(lines: &mut Vec<Line<'static>>, item: &str, theme: &Theme, width: usize) {
    let bullet = "  • ";
    let indent = "    "; // Same width as bullet for continuation lines
    let content_width = width.saturating_sub(4);

    let spans = parse_inline_code(item, theme);
    let wrapped = wrap_spans(spans, content_width);

    for (i, line) in wrapped.into_iter().enumerate() {
        let prefix = if i == 0 {
            Span::styled(bullet, Style::default().fg(theme.accent_secondary))
        } else {
            Span::raw(indent)
        };
        let mut line_spans = vec![prefix];
        line_spans.extend(line.spans);
        lines.push(Line::from(line_spans));
    }
}

fn render_ordered_list(lines: &mut Vec<Line<'static>>, items: &[String], theme: &Theme, width: usize) {
    let content_width = width.saturating_sub(6); // Account for "  X. " prefix

    for (i, item) in items.iter().enumerate() {
        let prefix = format!("  {}. ", i + 1);
        let indent = "     ";
        let spans = parse_inline_code(item, theme);
        let wrapped = wrap_spans(spans, content_width);

        for (j, line) in wrapped.into_iter().enumerate() {
            let prefix_span = if j == 0 {
                Span::styled(prefix.clone(), Style::default().fg(theme.accent_secondary))
            } else {
                Span::raw(indent)
            };
            let mut line_spans = vec![prefix_span];
            line_spans.extend(line.spans);
            lines.push(Line::from(line_spans));
        }
    }
    lines.push(Line::from(""));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn parse_inline_code_splits_on_backticks() {
        let theme = Theme::default();
        let spans = parse_inline_code("use `const` for constants", &theme);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].content, "use ");
        assert_eq!(spans[1].content, "const");
        assert_eq!(spans[2].content, " for constants");
    }

    #[test]
    fn parse_inline_code_plain_text() {
        let theme = Theme::default();
        let spans = parse_inline_code("no markup here", &theme);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "no markup here");
    }

    #[test]
    fn parse_inline_code_unclosed_backtick() {
        let theme = Theme::default();
        let spans = parse_inline_code("broken `code", &theme);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].content, "code");
    }

    #[test]
    fn wrap_spans_breaks_long_text() {
        let spans = vec![Span::raw("this is a longer text that needs wrapping")];
        let lines = wrap_spans(spans, 20);
        assert!(lines.len() > 1);
    }

    #[test]
    fn wrap_spans_zero_width_is_one_line() {
        let spans = vec![Span::raw("hello")];
        let lines = wrap_spans(spans, 0);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn render_content_blocks_empty() {
        let theme = Theme::default();
        let lines = render_content_blocks(&[], &theme, 80);
        assert!(lines.is_empty());
    }

    #[test]
    fn render_content_blocks_paragraph() {
        let theme = Theme::default();
        let blocks = vec![ContentBlock::Paragraph("Hello world".into())];
        let lines = render_content_blocks(&blocks, &theme, 80);
        assert!(!lines.is_empty());
    }

    #[test]
    fn render_content_blocks_heading() {
        let theme = Theme::default();
        let blocks = vec![ContentBlock::Heading { level: 1, text: "Title".into() }];
        let lines = render_content_blocks(&blocks, &theme, 80);
        assert!(!lines.is_empty());
    }

    #[test]
    fn render_content_blocks_code() {
        let theme = Theme::default();
        let blocks = vec![ContentBlock::Code(
            CodeBlock::new("const x = 5;").with_language("js"),
        )];
        let lines = render_content_blocks(&blocks, &theme, 80);
        // label + one code line + closing border + spacer
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn render_content_blocks_lists() {
        let theme = Theme::default();
        let blocks = vec![
            ContentBlock::UnorderedList(vec!["Item 1".into(), "Item 2".into()]),
            ContentBlock::OrderedList(vec!["First".into(), "Second".into()]),
        ];
        let lines = render_content_blocks(&blocks, &theme, 80);
        assert!(lines.len() >= 6);
    }

    #[test]
    fn render_content_blocks_rule() {
        let theme = Theme::default();
        let blocks = vec![ContentBlock::HorizontalRule];
        let lines = render_content_blocks(&blocks, &theme, 80);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn reader_lines_include_key_points() {
        let theme = Theme::default();
        let chapter = Chapter {
            id: "test".into(),
            title: "Test".into(),
            estimated_minutes: 5,
            key_points: vec!["Scope is lexical".into()],
            body: vec![ContentBlock::Paragraph("Body text.".into())],
        };
        let lines = build_reader_lines(&chapter, false, &theme, 80);
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.to_string())
            .collect();
        assert!(text.contains("Key Points"));
        assert!(text.contains("Scope is lexical"));
        assert!(text.contains("Mark as Completed"));
    }

    #[test]
    fn completed_chapter_shows_the_badge() {
        let theme = Theme::default();
        let chapter = Chapter {
            id: "test".into(),
            title: "Test".into(),
            estimated_minutes: 5,
            key_points: vec![],
            body: vec![ContentBlock::Paragraph("Body.".into())],
        };
        let lines = build_reader_lines(&chapter, true, &theme, 80);
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.to_string())
            .collect();
        assert!(text.contains("Chapter Completed"));
    }
}
