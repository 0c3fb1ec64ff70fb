//! Onboarding screens: experience level, then the study track

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::{OnboardingState, OnboardingStep};
use crate::progress::Track;
use crate::theme::Theme;
use crate::ui::layout::{centered_rect, fill_background, key_hints};

/// One selectable option card
struct Card {
    icon: &'static str,
    title: String,
    description: &'static str,
}

const EXPERIENCE_CARDS: [(&str, &str, &str); 2] = [
    ("👶", "I'm a Beginner", "I'm new to web development"),
    ("🚀", "I Have Some Experience", "I have some coding experience"),
];

fn track_icon(track: Track) -> &'static str {
    match track {
        Track::JavaScript => "⚡",
        Track::Java => "☕",
        Track::Python => "🐍",
    }
}

fn track_description(track: Track) -> &'static str {
    match track {
        Track::JavaScript => "The language of the web",
        Track::Java => "Enterprise and Android development",
        Track::Python => "Data, scripting and backends",
    }
}

fn cards_for(step: OnboardingStep) -> Vec<Card> {
    match step {
        OnboardingStep::Experience => EXPERIENCE_CARDS
            .iter()
            .map(|&(icon, title, description)| Card { icon, title: title.to_string(), description })
            .collect(),
        OnboardingStep::Track => Track::all()
            .iter()
            .map(|&track| Card {
                icon: track_icon(track),
                title: track.to_string(),
                description: track_description(track),
            })
            .collect(),
    }
}

fn headings(step: OnboardingStep) -> (&'static str, &'static str) {
    match step {
        OnboardingStep::Experience => {
            ("Let's Get Started", "Tell us about your experience level")
        }
        OnboardingStep::Track => {
            ("Choose Your Language", "Select the language you want to master")
        }
    }
}

pub fn draw(frame: &mut Frame, onboarding: &OnboardingState, theme: &Theme) {
    let area = frame.area();
    fill_background(frame, area, theme);

    let content = centered_rect(80, 70, area);
    let (title, subtitle) = headings(onboarding.step);
    let step_number = match onboarding.step {
        OnboardingStep::Experience => 1,
        OnboardingStep::Track => 2,
    };

    let rows = Layout::vertical([
        Constraint::Length(1), // step indicator
        Constraint::Length(2), // title
        Constraint::Length(2), // subtitle
        Constraint::Length(9), // cards
        Constraint::Length(2), // hints
        Constraint::Min(0),
    ])
    .split(content);

    let step_line = Paragraph::new(Span::styled(
        format!("Step {step_number} of 2"),
        Style::default().fg(theme.fg_muted),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(step_line, rows[0]);

    let title_line = Paragraph::new(Span::styled(
        title,
        Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title_line, rows[1]);

    let subtitle_line =
        Paragraph::new(Span::styled(subtitle, Style::default().fg(theme.fg_secondary)))
            .alignment(Alignment::Center);
    frame.render_widget(subtitle_line, rows[2]);

    let cards = cards_for(onboarding.step);
    draw_cards(frame, rows[3], &cards, onboarding.selected, theme);

    let mut hint_pairs = vec![("h/l", "choose"), ("Enter", "confirm")];
    if onboarding.step == OnboardingStep::Track {
        hint_pairs.push(("Esc", "back"));
    }
    let hints = Paragraph::new(key_hints(&hint_pairs, theme)).alignment(Alignment::Center);
    frame.render_widget(hints, rows[4]);
}

/// Lay the cards out horizontally with the selection highlighted
fn draw_cards(frame: &mut Frame, area: Rect, cards: &[Card], selected: usize, theme: &Theme) {
    let constraints: Vec<Constraint> =
        cards.iter().map(|_| Constraint::Ratio(1, cards.len() as u32)).collect();
    let slots = Layout::horizontal(constraints).split(area);

    for (i, card) in cards.iter().enumerate() {
        let is_selected = i == selected;
        let border_color = if is_selected { theme.border_focused } else { theme.border };
        let title_style = if is_selected {
            Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.fg_primary)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.bg_primary));
        let inner = block.inner(slots[i]);
        frame.render_widget(block, slots[i]);

        let body = vec![
            Line::from(""),
            Line::from(Span::raw(card.icon)).alignment(Alignment::Center),
            Line::from(""),
            Line::from(Span::styled(card.title.clone(), title_style)).alignment(Alignment::Center),
            Line::from(""),
            Line::from(Span::styled(card.description, Style::default().fg(theme.fg_muted)))
                .alignment(Alignment::Center),
        ];
        frame.render_widget(Paragraph::new(body), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_step_has_two_cards() {
        let cards = cards_for(OnboardingStep::Experience);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "I'm a Beginner");
    }

    #[test]
    fn track_step_lists_every_track() {
        let cards = cards_for(OnboardingStep::Track);
        assert_eq!(cards.len(), Track::all().len());
        assert_eq!(cards[0].title, "JavaScript");
        assert_eq!(cards[2].title, "Python");
    }

    #[test]
    fn headings_change_per_step() {
        assert_eq!(headings(OnboardingStep::Experience).0, "Let's Get Started");
        assert_eq!(headings(OnboardingStep::Track).0, "Choose Your Language");
    }
}
