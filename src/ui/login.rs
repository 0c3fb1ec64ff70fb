//! Login screen with the email/password form

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{InputField, LoginField, LoginForm};
use crate::theme::Theme;
use crate::ui::layout::{centered_rect, fill_background, key_hints};

pub fn draw(frame: &mut Frame, form: &LoginForm, theme: &Theme) {
    let area = frame.area();
    fill_background(frame, area, theme);

    let card = centered_rect(50, 70, area);

    let block = Block::default()
        .title(" Sign In ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let rows = Layout::vertical([
        Constraint::Length(1), // spacer
        Constraint::Length(1), // title
        Constraint::Length(1), // subtitle
        Constraint::Length(1), // spacer
        Constraint::Length(3), // email
        Constraint::Length(3), // password
        Constraint::Length(1), // error
        Constraint::Length(1), // spacer
        Constraint::Length(1), // hints
        Constraint::Min(0),
    ])
    .split(inner);

    let title = Paragraph::new(Span::styled(
        "Welcome Back",
        Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[1]);

    let subtitle = Paragraph::new(Span::styled(
        "Login to continue your learning journey",
        Style::default().fg(theme.fg_muted),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, rows[2]);

    draw_field(frame, rows[4], " Email ", &form.email, form.focus == LoginField::Email, false, theme);
    draw_field(
        frame,
        rows[5],
        " Password ",
        &form.password,
        form.focus == LoginField::Password,
        true,
        theme,
    );

    if let Some(ref error) = form.error {
        let line = Paragraph::new(Span::styled(error.clone(), Style::default().fg(theme.error)))
            .alignment(Alignment::Center);
        frame.render_widget(line, rows[6]);
    }

    let hints = Paragraph::new(key_hints(
        &[("Tab", "switch field"), ("Enter", "sign in"), ("Esc", "back")],
        theme,
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hints, rows[8]);
}

/// Draw one bordered input field, masking the value when `masked`
fn draw_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    field: &InputField,
    focused: bool,
    masked: bool,
    theme: &Theme,
) {
    let border_color = if focused { theme.border_focused } else { theme.border };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let shown = display_value(field, masked);
    let line = if focused {
        line_with_cursor(&shown, field.cursor, theme)
    } else {
        Line::from(Span::styled(shown, Style::default().fg(theme.fg_primary)))
    };
    frame.render_widget(Paragraph::new(line), inner);
}

/// The text to display for a field; passwords render as dots
fn display_value(field: &InputField, masked: bool) -> String {
    if masked {
        "•".repeat(field.value.chars().count())
    } else {
        field.value.clone()
    }
}

/// Split the text around the cursor position and invert the cursor cell
fn line_with_cursor(text: &str, cursor: usize, theme: &Theme) -> Line<'static> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    let base = Style::default().fg(theme.fg_primary);

    if cursor > 0 {
        let before: String = chars.iter().take(cursor).collect();
        spans.push(Span::styled(before, base));
    }

    let cursor_char = chars.get(cursor).copied().unwrap_or(' ');
    spans.push(Span::styled(
        cursor_char.to_string(),
        Style::default().fg(theme.bg_primary).bg(theme.cursor),
    ));

    if cursor + 1 < chars.len() {
        let after: String = chars.iter().skip(cursor + 1).collect();
        spans.push(Span::styled(after, base));
    }

    Line::from(spans)
}
