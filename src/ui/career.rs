//! Career tab: the developer ladder, skills gauges, and milestones

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::app::state::AppState;
use crate::career::{
    CAREER_STAGES, NEXT_MILESTONES, REQUIRED_SKILLS, WEB_DEVELOPER_BENEFITS, career_stage_label,
    outlook_message, skill_progress_percent,
};
use crate::theme::Theme;
use crate::ui::layout::render_scrolled;

const GAUGE_WIDTH: usize = 20;

pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let block = Block::default()
        .title(" Career Path ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = build_lines(state.progress.unlocked_level(), theme);

    state.career_scroll.total_lines = lines.len();
    state.career_scroll.visible_height = inner.height as usize;
    state.career_scroll.clamp();

    render_scrolled(frame, inner, lines, state.career_scroll.offset, theme);
}

fn build_lines(unlocked: u8, theme: &Theme) -> Vec<Line<'static>> {
    let muted = Style::default().fg(theme.fg_muted);
    let primary = Style::default().fg(theme.fg_primary);
    let section = Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Your Career Path: Full Stack Web Developer",
        Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled("  Current Stage: ", muted),
        Span::styled(career_stage_label(unlocked).to_string(), primary),
    ]));
    lines.push(Line::from(Span::styled(format!("  {}", outlook_message(unlocked)), muted)));

    // Stage timeline
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Career Timeline", section)));
    lines.push(Line::from(""));
    let next_stage = next_stage_index(unlocked);
    for (index, stage) in CAREER_STAGES.iter().enumerate() {
        let reached = unlocked >= stage.level_required;
        let is_next = next_stage == Some(index);
        let (marker, marker_style) = if reached {
            ("✓", Style::default().fg(theme.success))
        } else if is_next {
            ("●", Style::default().fg(theme.accent_primary))
        } else {
            ("○", muted)
        };
        let title_style = if is_next {
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else if reached {
            Style::default().fg(theme.success)
        } else {
            primary
        };
        let mut title_spans = vec![
            Span::styled(format!("  {marker} "), marker_style),
            Span::styled(stage.title.to_string(), title_style),
            Span::styled(format!("   {}", stage.salary), muted),
        ];
        if is_next {
            title_spans.push(Span::styled(
                "   ← next goal",
                Style::default().fg(theme.accent_primary),
            ));
        }
        lines.push(Line::from(title_spans));
        lines.push(Line::from(Span::styled(
            format!("      Skills: {}", stage.skills.join(", ")),
            muted,
        )));
        lines.push(Line::from(Span::styled(
            format!("      Where: {}", stage.companies.join(", ")),
            muted,
        )));
        lines.push(Line::from(""));
    }

    // Benefits
    lines.push(Line::from(Span::styled("  Why Web Development?", section)));
    lines.push(Line::from(""));
    for benefit in &WEB_DEVELOPER_BENEFITS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", benefit.icon), primary),
            Span::styled(benefit.title.to_string(), Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(format!("     {}", benefit.description), muted)));
    }

    // Skill gauges
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Required Skills", section)));
    lines.push(Line::from(""));
    for skill in &REQUIRED_SKILLS {
        let pct = skill_progress_percent(unlocked, skill.target_level);
        let gauge_style = if pct >= 100 {
            Style::default().fg(theme.success)
        } else if pct > 0 {
            Style::default().fg(theme.accent_primary)
        } else {
            Style::default().fg(theme.bg_tertiary)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<24}", skill.name), primary),
            Span::styled(percent_bar(pct, GAUGE_WIDTH), gauge_style),
            Span::styled(format!(" {pct:>3}%"), muted),
        ]));
        lines.push(Line::from(Span::styled(format!("      {}", skill.description), muted)));
    }

    // Milestones
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Next Milestones", section)));
    lines.push(Line::from(""));
    let next_milestone = next_milestone_index(unlocked);
    for (index, milestone) in NEXT_MILESTONES.iter().enumerate() {
        let done = unlocked >= milestone.level;
        let is_next = next_milestone == Some(index);
        let (marker, style) = if done {
            ("✓", Style::default().fg(theme.success))
        } else if is_next {
            ("●", Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD))
        } else {
            ("○", muted)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {marker} "), style),
            Span::styled(format!("Level {}: {}", milestone.level, milestone.milestone), style),
        ]));
        lines.push(Line::from(Span::styled(format!("      {}", milestone.description), muted)));
    }
    lines.push(Line::from(""));

    lines
}

/// First stage the user has not reached yet
fn next_stage_index(unlocked: u8) -> Option<usize> {
    CAREER_STAGES.iter().position(|stage| stage.level_required > unlocked)
}

fn next_milestone_index(unlocked: u8) -> Option<usize> {
    NEXT_MILESTONES.iter().position(|milestone| milestone.level > unlocked)
}

fn percent_bar(pct: u16, width: usize) -> String {
    let filled = ((usize::from(pct) * width) / 100).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
