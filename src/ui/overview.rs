//! Overview tab: standing at a glance plus the continue-learning banner

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::AppState;
use crate::catalog::Chapter;
use crate::theme::Theme;
use crate::ui::layout::key_hints;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let rows = Layout::vertical([
        Constraint::Length(5), // stat cards
        Constraint::Length(1),
        Constraint::Length(6), // continue banner
        Constraint::Min(0),
    ])
    .split(area);

    draw_stat_cards(frame, rows[0], state, theme);
    draw_continue_banner(frame, rows[2], state, theme);
}

fn draw_stat_cards(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let slots = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    let progress = &state.progress;
    stat_card(
        frame,
        slots[0],
        "📖 Chapters",
        &format!("{}/{}", progress.completed_chapter_count(), state.catalog.chapters().len()),
        "completed",
        theme,
    );
    stat_card(
        frame,
        slots[1],
        "🎯 Initial Assessment",
        &format!("{:.0}%", progress.assessment_score().unwrap_or(0.0)),
        "placement",
        theme,
    );
    stat_card(
        frame,
        slots[2],
        "📝 Tests Taken",
        &progress.tests_taken().to_string(),
        &format!("Avg {:.0}%", progress.average_score()),
        theme,
    );
}

/// One bordered stat card: big value over a muted caption
fn stat_card(frame: &mut Frame, area: Rect, title: &str, value: &str, caption: &str, theme: &Theme) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(caption.to_string(), Style::default().fg(theme.fg_muted))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn draw_continue_banner(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" Continue Learning ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let headline = match next_chapter(state) {
        Some(chapter) => format!("Next up: {} ({} min)", chapter.title, chapter.estimated_minutes),
        None => "All chapters complete - take a level test!".to_string(),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline,
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        key_hints(&[("Enter", "open the Learn tab")], theme),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// First chapter the user has not completed yet, in curriculum order
fn next_chapter(state: &AppState) -> Option<&Chapter> {
    state.catalog.chapters().iter().find(|c| !state.progress.is_chapter_completed(&c.id))
}
