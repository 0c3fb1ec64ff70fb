//! Quiz sheet renderer shared by the assessment, level tests, and
//! competitions

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::state::{AppState, QuizPhase, QuizState};
use crate::progress::MAX_LEVEL;
use crate::theme::Theme;
use crate::ui::layout::{centered_rect, fill_background, key_hints};

/// Draw the placement assessment as a full screen
pub fn draw_assessment(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let area = frame.area();
    fill_background(frame, area, theme);

    let Some(quiz) = state.quiz.as_ref() else {
        return;
    };

    let card = centered_rect(70, 80, area);
    let title = match quiz.phase {
        QuizPhase::Answering => " Placement Assessment ",
        QuizPhase::Results => " Assessment Complete ",
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_primary));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    match quiz.phase {
        QuizPhase::Answering => {
            // The placement test cannot be abandoned, so no quit hint.
            draw_sheet(frame, inner, quiz, &[("j/k", "options"), ("h/l", "questions"), ("Enter", "answer")], theme);
        }
        QuizPhase::Results => draw_assessment_results(frame, inner, state, quiz, theme),
    }
}

/// Draw a level test as a centered overlay above the dashboard
pub fn draw_level_test(frame: &mut Frame, area: Rect, state: &AppState, level: u8, theme: &Theme) {
    let Some(quiz) = state.quiz.as_ref() else {
        return;
    };

    let overlay = centered_rect(70, 80, area);
    frame.render_widget(Clear, overlay);

    let level_name =
        state.catalog.level(level).map(|spec| spec.name.clone()).unwrap_or_default();
    let title = match quiz.phase {
        QuizPhase::Answering => format!(" Level {level}: {level_name} "),
        QuizPhase::Results => " Test Complete! ".to_string(),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    match quiz.phase {
        QuizPhase::Answering => draw_sheet(
            frame,
            inner,
            quiz,
            &[("j/k", "options"), ("h/l", "questions"), ("Enter", "answer"), ("Esc", "quit test")],
            theme,
        ),
        QuizPhase::Results => draw_level_results(frame, inner, quiz, level, &level_name, theme),
    }
}

/// Draw the question sheet: progress, prompt, options, hints
pub fn draw_sheet(
    frame: &mut Frame,
    area: Rect,
    quiz: &QuizState,
    hints: &[(&str, &str)],
    theme: &Theme,
) {
    let Some(question) = quiz.current_question() else {
        return;
    };

    let width = area.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            format!("Question {} of {}", quiz.current + 1, quiz.questions.len()),
            Style::default().fg(theme.fg_muted),
        ),
        Span::styled(
            format!("   {} answered", quiz.answered_count()),
            Style::default().fg(theme.fg_muted),
        ),
    ]));
    lines.push(Line::from(""));

    for wrapped in textwrap::wrap(&question.prompt, width.max(20)) {
        lines.push(Line::from(Span::styled(
            wrapped.to_string(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(""));

    for (i, option) in question.options.iter().enumerate() {
        lines.push(option_line(i, option, quiz, theme));
        lines.push(Line::from(""));
    }

    lines.push(key_hints(hints, theme));

    frame.render_widget(Paragraph::new(lines), area);
}

/// One option row with the cursor and the recorded answer marked
fn option_line(index: usize, option: &str, quiz: &QuizState, theme: &Theme) -> Line<'static> {
    let on_cursor = index == quiz.cursor;
    let is_answer = quiz.current_answer() == Some(index);

    let marker = if is_answer { "●" } else { "○" };
    let letter = (b'A' + index as u8) as char;

    let style = if on_cursor {
        Style::default().fg(theme.bg_primary).bg(theme.accent_primary).add_modifier(Modifier::BOLD)
    } else if is_answer {
        Style::default().fg(theme.accent_secondary)
    } else {
        Style::default().fg(theme.fg_secondary)
    };

    Line::from(Span::styled(format!("  {marker} {letter}) {option}  "), style))
}

fn draw_assessment_results(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    quiz: &QuizState,
    theme: &Theme,
) {
    let score = quiz.score();
    let skills = state.progress.skills();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Assessment Complete!",
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {score:.0}%"),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Starting Level: {}", state.progress.unlocked_level()),
            Style::default().fg(theme.fg_secondary),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("Your Strengths", Style::default().fg(theme.fg_muted))),
        chip_line(&skills.strengths, theme.success, theme),
        Line::from(""),
        Line::from(Span::styled("Focus Areas", Style::default().fg(theme.fg_muted))),
        chip_line(&skills.weak_areas, theme.warning, theme),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("[Enter] Start Learning", Style::default().fg(theme.fg_muted))),
    ];

    // Dot row mirroring the per-question outcome
    lines.insert(6, question_marks_line(quiz, theme));

    let para = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

fn draw_level_results(
    frame: &mut Frame,
    area: Rect,
    quiz: &QuizState,
    level: u8,
    level_name: &str,
    theme: &Theme,
) {
    let score = quiz.score();
    let passed = quiz.is_pass();

    let headline = if passed {
        Span::styled(
            format!("Great! You passed {level_name}!"),
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("Keep practicing {level_name} - you'll master it!"),
            Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
        )
    };

    let next_step = if passed && level < MAX_LEVEL {
        "Ready for the next level!"
    } else if passed {
        "You've completed all levels!"
    } else {
        "Review the material and try again"
    };

    let lines = vec![
        Line::from(""),
        Line::from(headline),
        Line::from(""),
        question_marks_line(quiz, theme),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {score:.0}%"),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Questions Correct: {}/{}", quiz.correct_count(), quiz.questions.len()),
            Style::default().fg(theme.fg_secondary),
        )),
        Line::from(Span::styled("Pass Threshold: 70%", Style::default().fg(theme.fg_muted))),
        Line::from(""),
        Line::from(Span::styled(next_step, Style::default().fg(theme.info))),
        Line::from(""),
        Line::from(Span::styled("[Enter] Close", Style::default().fg(theme.fg_muted))),
    ];

    let para = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

/// Per-question ✓/✗ row shown on result screens
fn question_marks_line(quiz: &QuizState, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, question) in quiz.questions.iter().enumerate() {
        let answer = quiz.answers.get(i).copied().flatten();
        let correct = question.is_correct(answer);
        let marker = if correct { "✓" } else { "✗" };
        let style = if correct {
            Style::default().fg(theme.success)
        } else {
            Style::default().fg(theme.error)
        };
        spans.push(Span::styled(format!("Q{}{} ", i + 1, marker), style));
    }
    Line::from(spans)
}

/// Render labels as filled chips on one line
fn chip_line(items: &[String], color: Color, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for item in items {
        spans.push(Span::styled(
            format!(" {item} "),
            Style::default().fg(theme.bg_primary).bg(color),
        ));
        spans.push(Span::raw("  "));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::QuizKind;
    use crate::catalog::Question;

    fn quiz_with_answers(answers: &[Option<usize>]) -> QuizState {
        let questions: Vec<Question> = (0..answers.len())
            .map(|i| Question {
                id: i as u32 + 1,
                prompt: format!("Q{}", i + 1),
                options: vec!["a".into(), "b".into()],
                answer: 0,
            })
            .collect();
        let mut quiz = QuizState::new(QuizKind::LevelTest(1), questions);
        quiz.answers = answers.to_vec();
        quiz
    }

    #[test]
    fn marks_line_flags_wrong_answers() {
        let theme = Theme::default();
        let quiz = quiz_with_answers(&[Some(0), Some(1), None]);
        let line = question_marks_line(&quiz, &theme);
        assert_eq!(line.spans.len(), 3);
        assert!(line.spans[0].content.contains('✓'));
        assert!(line.spans[1].content.contains('✗'));
        assert!(line.spans[2].content.contains('✗'));
    }

    #[test]
    fn chip_line_renders_each_label() {
        let theme = Theme::default();
        let line = chip_line(&["Async".to_string(), "DOM".to_string()], theme.success, &theme);
        // chip + spacer per label
        assert_eq!(line.spans.len(), 4);
        assert_eq!(line.spans[0].content, " Async ");
    }

    #[test]
    fn option_line_marks_cursor_and_answer() {
        let theme = Theme::default();
        let mut quiz = quiz_with_answers(&[Some(1)]);
        quiz.cursor = 0;
        let answered = option_line(1, "b", &quiz, &theme);
        assert!(answered.spans[0].content.contains('●'));
        let plain = option_line(0, "a", &quiz, &theme);
        assert!(plain.spans[0].content.contains('○'));
    }
}
