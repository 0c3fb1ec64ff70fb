//! Competitions tab: list, detail, active run, and leaderboard views

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{AppState, CompetitionResults, CompetitionView};
use crate::competition::{Competition, CompetitionStatus, format_time, performance_message};
use crate::theme::Theme;
use crate::ui::layout::key_hints;
use crate::ui::quiz;

/// Shown on the detail view; the runs themselves are mock sheets
const WHAT_YOULL_LEARN: [&str; 5] = [
    "Test your JavaScript knowledge under pressure",
    "Compare your skills with other developers",
    "Get ranked on the global leaderboard",
    "Earn badges and recognition",
    "Identify weak areas through competition",
];

const LEADERBOARD_ROWS: usize = 10;

pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    match state.competition.view {
        CompetitionView::List => draw_list(frame, area, state, theme),
        CompetitionView::Detail => draw_detail(frame, area, state, theme),
        CompetitionView::Participate => draw_participate(frame, area, state, theme),
        CompetitionView::Leaderboard => draw_leaderboard(frame, area, state, theme),
    }
}

fn draw_list(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(state.competitions.iter().map(|_| Constraint::Length(6)));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Weekly Competitions",
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Compete with other developers and test your skills",
            Style::default().fg(theme.fg_muted),
        )),
    ]);
    frame.render_widget(header, rows[0]);

    for (index, competition) in state.competitions.iter().enumerate() {
        draw_card(
            frame,
            rows[index + 1],
            competition,
            index == state.competition.selected,
            theme,
        );
    }

    let hints = key_hints(&[("j/k", "browse"), ("Enter", "view details")], theme);
    frame.render_widget(Paragraph::new(hints), rows[state.competitions.len() + 1]);
}

fn draw_card(
    frame: &mut Frame,
    area: Rect,
    competition: &Competition,
    selected: bool,
    theme: &Theme,
) {
    let border = if selected { theme.border_focused } else { theme.border };
    let block = Block::default()
        .title(format!(" {} ", competition.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut status_spans = vec![
        Span::styled(
            format!(" {} ", competition.status.label()),
            Style::default().fg(theme.bg_primary).bg(badge_color(competition.status, theme)),
        ),
        Span::styled(
            format!("  Difficulty: {}", competition.difficulty),
            Style::default().fg(theme.fg_primary),
        ),
    ];
    if let Some(remaining) = &competition.time_remaining {
        status_spans.push(Span::styled(
            format!("  ⏱ {remaining}"),
            Style::default().fg(theme.warning),
        ));
    }

    let lines = vec![
        Line::from(status_spans),
        Line::from(Span::styled(
            format!("{} - {}", competition.start_date, competition.end_date),
            Style::default().fg(theme.fg_muted),
        )),
        Line::from(Span::styled(
            format!(
                "{} participants   {} questions   Max Score: {}",
                competition.participants.len(),
                competition.question_count,
                competition.max_score
            ),
            Style::default().fg(theme.fg_secondary),
        )),
        Line::from(Span::styled(
            competition.description.clone(),
            Style::default().fg(theme.fg_muted),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn badge_color(status: CompetitionStatus, theme: &Theme) -> Color {
    match status {
        CompetitionStatus::Active => theme.success,
        CompetitionStatus::Upcoming => theme.info,
        CompetitionStatus::Completed => theme.fg_muted,
    }
}

fn draw_detail(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let Some(competition) = state.competitions.get(state.competition.selected) else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", competition.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.saturating_sub(4).max(20) as usize;
    let mut lines = detail_lines(competition, width, theme);

    lines.push(Line::from(""));
    let hints: &[(&str, &str)] = if competition.status == CompetitionStatus::Active {
        &[("Enter", "Start Competition"), ("Esc", "Back")]
    } else {
        &[("Esc", "Back")]
    };
    lines.push(key_hints(hints, theme));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn detail_lines(competition: &Competition, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let muted = Style::default().fg(theme.fg_muted);
    let primary = Style::default().fg(theme.fg_primary);
    let section = Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(""));
    for wrapped in textwrap::wrap(&competition.description, width) {
        lines.push(Line::from(Span::styled(format!("  {wrapped}"), muted)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Competition Details", section)));
    lines.push(Line::from(vec![
        Span::styled("  Difficulty: ", muted),
        Span::styled(competition.difficulty.to_string(), primary),
        Span::styled("    Status: ", muted),
        Span::styled(competition.status.label().to_string(), primary),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Total Questions: ", muted),
        Span::styled(competition.question_count.to_string(), primary),
        Span::styled("    Duration: ", muted),
        Span::styled("1 hour".to_string(), primary),
    ]));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {} - {}", competition.start_date, competition.end_date),
            muted,
        ),
        Span::styled("    Max Score: ", muted),
        Span::styled(competition.max_score.to_string(), primary),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  What You'll Learn", section)));
    for item in WHAT_YOULL_LEARN {
        lines.push(Line::from(vec![
            Span::styled("  ⚡ ".to_string(), Style::default().fg(theme.accent_primary)),
            Span::styled(item.to_string(), primary),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Prizes", section)));
    lines.push(Line::from(Span::styled("  🏆 1st Place Badge".to_string(), primary)));
    lines.push(Line::from(Span::styled("  🏅 Top 10 Recognition".to_string(), primary)));

    if !competition.participants.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("  Top Participants", section)));
        for (index, participant) in competition.participants.iter().take(3).enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}. ", index + 1), muted),
                Span::styled(format!("{:<16}", participant.username), primary),
                Span::styled(
                    format!("{}%", participant.score),
                    Style::default().fg(theme.accent_primary),
                ),
            ]));
        }
    }

    lines
}

fn draw_participate(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let Some(quiz) = state.quiz.as_ref() else {
        return;
    };
    let Some(competition) = state.competitions.get(state.competition.selected) else {
        return;
    };

    let rows = Layout::vertical([Constraint::Length(2), Constraint::Min(10)]).split(area);

    let remaining = state.competition.remaining_seconds();
    let time_style = if remaining < 300 {
        Style::default().fg(theme.error).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
    };
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            competition.name.clone(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Time Remaining ", Style::default().fg(theme.fg_muted)),
            Span::styled(format_time(remaining), time_style),
        ]),
    ]);
    frame.render_widget(header, rows[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(rows[1]);
    frame.render_widget(block, rows[1]);

    quiz::draw_sheet(
        frame,
        inner,
        quiz,
        &[
            ("j/k", "options"),
            ("h/l", "questions"),
            ("Enter", "answer"),
            ("s", "Submit Competition"),
            ("Esc", "Exit Competition"),
        ],
        theme,
    );
}

fn draw_leaderboard(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let Some(results) = state.competition.results.as_ref() else {
        return;
    };

    let block = Block::default()
        .title(" Competition Leaderboard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = leaderboard_lines(results, theme);
    lines.push(Line::from(""));
    lines.push(key_hints(&[("Enter", "Back to Competitions")], theme));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn leaderboard_lines(results: &CompetitionResults, theme: &Theme) -> Vec<Line<'static>> {
    let muted = Style::default().fg(theme.fg_muted);
    let section = Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Your Results", section)));
    lines.push(Line::from(vec![
        Span::styled("  Your Score  ", muted),
        Span::styled(
            format!("{}%", results.score),
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        ),
    ]));
    let rank_text = match results.rank {
        Some(rank) => format!("#{rank}"),
        None => "-".to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled("  Your Rank   ", muted),
        Span::styled(
            rank_text,
            Style::default().fg(theme.accent_secondary).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        format!("  {}", performance_message(results.score)),
        Style::default().fg(theme.fg_secondary),
    )));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Standings", section)));
    lines.push(Line::from(Span::styled(
        format!("  {:<5} {:<18} {:>6} {:>6} {:>7}", "Rank", "Player", "Score", "Level", "Time"),
        muted,
    )));
    for row in results.rows.iter().take(LEADERBOARD_ROWS) {
        let text = format!(
            "  {:<5} {:<18} {:>5}% {:>6} {:>7}",
            row.rank,
            row.participant.username,
            row.participant.score,
            format!("L{}", row.participant.level),
            format_time(u64::from(row.participant.completed_seconds)),
        );
        let style = if row.is_user {
            Style::default().fg(theme.bg_primary).bg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_primary)
        };
        let mut spans = vec![Span::styled(text, style)];
        if row.rank == 1 {
            spans.push(Span::styled(" 🏆", Style::default().fg(theme.warning)));
        }
        if row.is_user {
            spans.push(Span::styled(" (you)", Style::default().fg(theme.accent_primary)));
        }
        lines.push(Line::from(spans));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::competition::{Difficulty, Participant, build_leaderboard, user_rank};

    fn sample_competition() -> Competition {
        Competition {
            id: 1,
            name: "JavaScript Sprint".to_string(),
            start_date: "2024-01-15".to_string(),
            end_date: "2024-01-22".to_string(),
            status: CompetitionStatus::Active,
            time_remaining: Some("2 days".to_string()),
            difficulty: Difficulty::Medium,
            question_count: 10,
            max_score: 100,
            description: "A fast-paced JavaScript challenge.".to_string(),
            participants: vec![
                Participant {
                    username: "ada".to_string(),
                    score: 95,
                    level: 4,
                    completed_seconds: 2400,
                },
                Participant {
                    username: "grace".to_string(),
                    score: 90,
                    level: 3,
                    completed_seconds: 2520,
                },
                Participant {
                    username: "linus".to_string(),
                    score: 85,
                    level: 3,
                    completed_seconds: 2700,
                },
                Participant {
                    username: "ken".to_string(),
                    score: 80,
                    level: 2,
                    completed_seconds: 3000,
                },
            ],
        }
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn detail_covers_every_card() {
        let theme = Theme::default();
        let lines = detail_lines(&sample_competition(), 60, &theme);
        let text: Vec<String> = lines.iter().map(line_text).collect();

        for expected in [
            "Competition Details",
            "What You'll Learn",
            "1st Place Badge",
            "Top 10 Recognition",
            "Top Participants",
        ] {
            assert!(text.iter().any(|l| l.contains(expected)), "missing {expected}");
        }
    }

    #[test]
    fn detail_lists_at_most_three_participants() {
        let theme = Theme::default();
        let lines = detail_lines(&sample_competition(), 60, &theme);
        let text: Vec<String> = lines.iter().map(line_text).collect();

        assert!(text.iter().any(|l| l.contains("ada")));
        assert!(text.iter().any(|l| l.contains("linus")));
        assert!(!text.iter().any(|l| l.contains("ken")));
    }

    #[test]
    fn leaderboard_marks_the_user_row() {
        let theme = Theme::default();
        let competition = sample_competition();
        let rows = build_leaderboard(
            &competition.participants,
            Participant {
                username: "you".to_string(),
                score: 90,
                level: 2,
                completed_seconds: 1800,
            },
        );
        let rank = user_rank(&rows);
        let results = CompetitionResults {
            competition_id: competition.id,
            score: 90,
            rank,
            rows,
        };

        let lines = leaderboard_lines(&results, &theme);
        let text: Vec<String> = lines.iter().map(line_text).collect();

        assert!(text.iter().any(|l| l.contains("Your Score  90%")));
        // stable sort: the embedded 90 stays ahead, the user lands at rank 3
        assert!(text.iter().any(|l| l.contains("#3")));
        assert!(text.iter().any(|l| l.contains("you") && l.contains("(you)")));
        assert!(text.iter().any(|l| l.contains("ada") && l.contains("🏆")));
    }
}
