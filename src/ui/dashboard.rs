//! Dashboard shell: sidebar, welcome header, and the active tab

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppState, DashboardTab, QuizKind};
use crate::theme::Theme;
use crate::ui::{career, competitions, learn, overview, progress, quiz, tests as tests_tab};

/// Minimum width for the sidebar
const SIDEBAR_WIDTH: u16 = 22;

pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let columns = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
        .split(area);

    draw_sidebar(frame, columns[0], state, theme);

    let rows = Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(columns[1]);
    draw_header(frame, rows[0], state, theme);

    match state.dashboard_tab {
        DashboardTab::Overview => overview::draw(frame, rows[1], state, theme),
        DashboardTab::Learn => learn::draw(frame, rows[1], state, theme),
        DashboardTab::Tests => tests_tab::draw(frame, rows[1], state, theme),
        DashboardTab::Progress => progress::draw(frame, rows[1], state, theme),
        DashboardTab::Career => career::draw(frame, rows[1], state, theme),
        DashboardTab::Competitions => competitions::draw(frame, rows[1], state, theme),
    }

    // A running level test floats above whatever tab is behind it.
    if let Some(QuizKind::LevelTest(level)) = state.quiz.as_ref().map(|quiz| quiz.kind) {
        quiz::draw_level_test(frame, area, state, level, theme);
    }
}

fn draw_sidebar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .title(" SkillPath ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    for (i, &tab) in DashboardTab::all().iter().enumerate() {
        let selected = tab == state.dashboard_tab;
        let style = if selected {
            Style::default()
                .fg(theme.bg_primary)
                .bg(theme.accent_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_secondary)
        };
        lines.push(Line::from(Span::styled(
            format!(" {} {} {:<12}", i + 1, tab.icon(), tab.label()),
            style,
        )));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);

    // Standing summary pinned to the sidebar bottom
    if inner.height > 2 {
        let footer_area =
            Rect { x: inner.x, y: inner.bottom().saturating_sub(1), width: inner.width, height: 1 };
        let footer = Paragraph::new(Span::styled(
            format!(" Level {} • {}", state.progress.unlocked_level(), state.progress.skill_tier()),
            Style::default().fg(theme.fg_muted),
        ));
        frame.render_widget(footer, footer_area);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let completed = state.progress.completed_chapter_count();
    let line = Line::from(vec![
        Span::styled(
            format!("Welcome, {}", state.progress.display_name()),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {completed} chapters completed • Keep building your skills"),
            Style::default().fg(theme.fg_muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}
