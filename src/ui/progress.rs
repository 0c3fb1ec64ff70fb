//! Progress tab: scores, skill chips, and what to do next

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::state::AppState;
use crate::progress::MAX_LEVEL;
use crate::theme::Theme;
use crate::ui::layout::render_scrolled;

const BAR_WIDTH: usize = 24;

pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let block = Block::default()
        .title(" Your Progress ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = build_lines(state, theme);

    state.progress_scroll.total_lines = lines.len();
    state.progress_scroll.visible_height = inner.height as usize;
    state.progress_scroll.clamp();

    render_scrolled(frame, inner, lines, state.progress_scroll.offset, theme);
}

fn build_lines(state: &AppState, theme: &Theme) -> Vec<Line<'static>> {
    let progress = &state.progress;
    let mut lines: Vec<Line<'static>> = Vec::new();

    let muted = Style::default().fg(theme.fg_muted);
    let primary = Style::default().fg(theme.fg_primary);
    let section = Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD);

    // Headline stats
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  Current Level  ", muted),
        Span::styled(
            format!("{} ({})", progress.unlocked_level(), progress.skill_tier()),
            primary,
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Average Score  ", muted),
        Span::styled(format!("{:.0}%", progress.average_score()), primary),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Tests Taken    ", muted),
        Span::styled(progress.tests_taken().to_string(), primary),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Chapters Done  ", muted),
        Span::styled(
            format!("{}/{}", progress.completed_chapter_count(), state.catalog.chapters().len()),
            primary,
        ),
    ]));
    if let Some(score) = progress.assessment_score() {
        lines.push(Line::from(vec![
            Span::styled("  Placement      ", muted),
            Span::styled(format!("{score:.0}%"), primary),
        ]));
    }

    // Per-level score chart
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Level Scores", section)));
    lines.push(Line::from(""));
    for spec in state.catalog.levels() {
        let score = progress.level_score(spec.level);
        let bar = score_bar(score, BAR_WIDTH);
        let bar_style = match score {
            Some(s) if s >= crate::progress::PASS_MARK => Style::default().fg(theme.success),
            Some(_) => Style::default().fg(theme.warning),
            None => Style::default().fg(theme.bg_tertiary),
        };
        let value = match score {
            Some(s) => format!("{s:.0}%"),
            None => "--".to_string(),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", format!("L{} {}", spec.level, spec.name)), primary),
            Span::styled(bar, bar_style),
            Span::styled(format!(" {value}"), muted),
        ]));
    }

    // Skill chips
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Your Strengths", section)));
    lines.push(chips_or_placeholder(
        &progress.skills().strengths,
        "Complete more tests to identify strengths",
        theme.success,
        theme,
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Focus Areas", section)));
    lines.push(chips_or_placeholder(
        &progress.skills().weak_areas,
        "Great job! No weak areas identified",
        theme.warning,
        theme,
    ));

    // Recommendations
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Recommended Next Steps", section)));
    lines.push(Line::from(""));
    for rec in recommendations(state) {
        lines.push(Line::from(Span::styled(format!("  {rec}"), primary)));
    }
    lines.push(Line::from(""));

    lines
}

/// Fixed-width score bar, empty track when the level is unattempted
fn score_bar(score: Option<f64>, width: usize) -> String {
    let filled = match score {
        Some(s) => ((s / 100.0) * width as f64).round() as usize,
        None => 0,
    }
    .min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn chips_or_placeholder(
    items: &[String],
    placeholder: &'static str,
    color: ratatui::style::Color,
    theme: &Theme,
) -> Line<'static> {
    if items.is_empty() {
        return Line::from(Span::styled(
            format!("  {placeholder}"),
            Style::default().fg(theme.fg_muted),
        ));
    }

    let mut spans = vec![Span::raw("  ")];
    for item in items {
        spans.push(Span::styled(
            format!(" {item} "),
            Style::default().fg(theme.bg_primary).bg(color),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Ordered suggestions derived from the current standing
fn recommendations(state: &AppState) -> Vec<String> {
    let progress = &state.progress;
    let mut recs = Vec::new();

    let unlocked = progress.unlocked_level();
    if unlocked < MAX_LEVEL || progress.level_score(unlocked).is_none() {
        let next = state
            .catalog
            .levels()
            .iter()
            .find(|spec| progress.is_level_unlocked(spec.level) && progress.level_score(spec.level).is_none());
        if let Some(spec) = next {
            recs.push(format!("📝 Take the Level {} test to advance", spec.level));
        }
    }

    let weak = &progress.skills().weak_areas;
    if !weak.is_empty() {
        recs.push(format!("🎯 Focus on: {}", weak.join(", ")));
    }

    let remaining = state.catalog.chapters().len() - progress.completed_chapter_count();
    if remaining > 0 {
        recs.push(format!("📖 {remaining} chapters left to complete"));
    }

    if recs.is_empty() {
        recs.push("🎉 Amazing! You've mastered everything. Keep practicing!".to_string());
    }

    recs
}
