//! Bottom command line: status messages and `:` command input

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{CommandLineState, CommandMode};
use crate::theme::Theme;

const IDLE_HINT: &str = "Press : for commands";

/// Draw the command line strip.
pub fn draw(frame: &mut Frame, area: Rect, state: &CommandLineState, theme: &Theme) {
    let line = match state.mode {
        CommandMode::Command => prompt_line(&state.input.value, state.input.cursor, theme),
        CommandMode::Normal => status_line(state, theme),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(theme.bg_secondary));
    frame.render_widget(paragraph, area);
}

fn status_line(state: &CommandLineState, theme: &Theme) -> Line<'static> {
    match &state.message {
        Some(msg) if state.is_error => {
            Line::from(Span::styled(msg.clone(), Style::default().fg(theme.error)))
        }
        Some(msg) => Line::from(Span::styled(msg.clone(), Style::default().fg(theme.fg_muted))),
        None => Line::from(Span::styled(IDLE_HINT, Style::default().fg(theme.fg_muted))),
    }
}

/// The `:input` prompt with a block cursor over the character at the
/// edit position, or over a trailing space when the cursor sits at the
/// end. `cursor` is a char offset into `input`; the prefix adds one.
fn prompt_line(input: &str, cursor: usize, theme: &Theme) -> Line<'static> {
    let text = format!(":{input}");
    let body = Style::default().fg(theme.accent_primary);
    let block =
        Style::default().fg(theme.bg_primary).bg(theme.fg_primary).add_modifier(Modifier::BOLD);

    let split = byte_offset(&text, cursor + 1);
    let (head, rest) = text.split_at(split);

    let mut spans = Vec::with_capacity(3);
    if !head.is_empty() {
        spans.push(Span::styled(head.to_string(), body));
    }
    match rest.chars().next() {
        Some(at) => {
            spans.push(Span::styled(at.to_string(), block));
            let tail = &rest[at.len_utf8()..];
            if !tail.is_empty() {
                spans.push(Span::styled(tail.to_string(), body));
            }
        }
        None => spans.push(Span::styled(" ", block)),
    }
    Line::from(spans)
}

/// Byte offset of the `n`th character, clamped to the end.
fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices().nth(n).map_or(text.len(), |(idx, _)| idx)
}
