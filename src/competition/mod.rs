//! Weekly competitions and leaderboards
//!
//! Competitions are mock events: the roster and standings ship with the
//! binary, questions are generated placeholders, and the participation
//! score counts answered questions rather than correct ones. The engine
//! is never involved; nothing here touches user progress.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;
use crate::catalog::model::Question;

const COMPETITIONS_JSON: &str = include_str!("../../content/competitions.json");

/// Time allotted per competition run. Display only; nothing is enforced
/// when it reaches zero.
pub const COMPETITION_SECONDS: u64 = 3600;

/// A competitor on a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub username: String,
    /// Integer percent score
    pub score: u32,
    /// Ladder level at completion time
    pub level: u8,
    /// Seconds the participant took
    pub completed_seconds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionStatus {
    Active,
    Upcoming,
    Completed,
}

impl CompetitionStatus {
    /// Badge text shown on the competition list.
    pub fn label(self) -> &'static str {
        match self {
            CompetitionStatus::Active => "Active Now",
            CompetitionStatus::Upcoming => "Coming Soon",
            CompetitionStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{name}")
    }
}

/// One scheduled competition with its embedded standings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competition {
    pub id: u32,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub status: CompetitionStatus,
    #[serde(default)]
    pub time_remaining: Option<String>,
    pub difficulty: Difficulty,
    /// Number of generated questions in a run
    #[serde(rename = "questions")]
    pub question_count: usize,
    pub max_score: u32,
    pub description: String,
    pub participants: Vec<Participant>,
}

/// Load the embedded competition roster.
pub fn load_competitions() -> Result<Vec<Competition>, CatalogError> {
    serde_json::from_str(COMPETITIONS_JSON)
        .map_err(|source| CatalogError::Parse { file: "competitions.json", source })
}

/// Generate the placeholder question sheet for a run.
///
/// The answer index is a dummy; competition scoring never consults it.
pub fn mock_questions(count: usize) -> Vec<Question> {
    (0..count)
        .map(|i| Question {
            id: i as u32 + 1,
            prompt: format!(
                "Competition Question {}: What concept would you like to test?",
                i + 1
            ),
            options: vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
                "Option D".to_string(),
            ],
            answer: 0,
        })
        .collect()
}

/// Participation score: percentage of questions answered, floored.
pub fn participation_score(answered: usize, total: usize) -> u32 {
    debug_assert!(total > 0, "competition has no questions");
    (answered * 100 / total) as u32
}

/// One row of a ranked leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    /// 1-based standing
    pub rank: usize,
    pub participant: Participant,
    pub is_user: bool,
}

/// Merge the user's run into the standings and rank everyone.
///
/// Sorted descending by score; the sort is stable, so on a tie the
/// embedded participants keep their position and the user slots in after
/// them.
pub fn build_leaderboard(participants: &[Participant], user: Participant) -> Vec<LeaderboardRow> {
    let user_name = user.username.clone();
    let mut merged: Vec<Participant> = participants.to_vec();
    merged.push(user);
    merged.sort_by(|a, b| b.score.cmp(&a.score));

    merged
        .into_iter()
        .enumerate()
        .map(|(index, participant)| LeaderboardRow {
            rank: index + 1,
            is_user: participant.username == user_name,
            participant,
        })
        .collect()
}

/// The user's 1-based rank within a built leaderboard.
pub fn user_rank(rows: &[LeaderboardRow]) -> Option<usize> {
    rows.iter().find(|row| row.is_user).map(|row| row.rank)
}

/// Countdown rendering, minutes:seconds with zero-padded seconds.
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Closing line on the results panel, banded by score.
pub fn performance_message(score: u32) -> &'static str {
    if score >= 80 {
        "Excellent performance! Keep competing."
    } else if score >= 60 {
        "Good effort! Practice more to improve."
    } else {
        "Keep practicing to master the concepts."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user(score: u32) -> Participant {
        Participant {
            username: "test_user".into(),
            score,
            level: 2,
            completed_seconds: 900,
        }
    }

    fn roster() -> Vec<Participant> {
        load_competitions().unwrap().remove(0).participants
    }

    #[test]
    fn embedded_roster_loads() {
        let competitions = load_competitions().unwrap();
        assert_eq!(competitions.len(), 3);
        assert_eq!(competitions[0].status, CompetitionStatus::Active);
        assert_eq!(competitions[0].participants.len(), 5);
        assert_eq!(competitions[1].difficulty, Difficulty::Hard);
        assert!(competitions[2].participants.is_empty());
    }

    #[test]
    fn leaderboard_ranks_descending() {
        let rows = build_leaderboard(&roster(), user(90));
        let scores: Vec<u32> = rows.iter().map(|r| r.participant.score).collect();
        assert_eq!(scores, vec![95, 92, 90, 88, 85, 82]);
        assert_eq!(user_rank(&rows), Some(3));
    }

    #[test]
    fn tie_keeps_existing_participants_ahead() {
        // mike_js also has 88; the user joined later so ranks below
        let rows = build_leaderboard(&roster(), user(88));
        assert_eq!(rows[2].participant.username, "mike_js");
        assert_eq!(rows[3].participant.username, "test_user");
        assert_eq!(user_rank(&rows), Some(4));
    }

    #[test]
    fn perfect_score_tops_the_board() {
        let rows = build_leaderboard(&roster(), user(100));
        assert_eq!(user_rank(&rows), Some(1));
        assert!(rows[0].is_user);
    }

    #[test]
    fn participation_score_floors() {
        assert_eq!(participation_score(7, 15), 46);
        assert_eq!(participation_score(15, 15), 100);
        assert_eq!(participation_score(0, 15), 0);
        assert_eq!(participation_score(9, 20), 45);
    }

    #[test]
    fn mock_questions_number_from_one() {
        let questions = mock_questions(15);
        assert_eq!(questions.len(), 15);
        assert!(questions[0].prompt.starts_with("Competition Question 1:"));
        assert!(questions[14].prompt.starts_with("Competition Question 15:"));
        assert_eq!(questions[0].options.len(), 4);
    }

    #[test]
    fn countdown_formatting() {
        assert_eq!(format_time(3600), "60:00");
        assert_eq!(format_time(300), "5:00");
        assert_eq!(format_time(61), "1:01");
        assert_eq!(format_time(59), "0:59");
        assert_eq!(format_time(0), "0:00");
    }

    #[test]
    fn performance_message_bands() {
        assert_eq!(performance_message(80), "Excellent performance! Keep competing.");
        assert_eq!(performance_message(79), "Good effort! Practice more to improve.");
        assert_eq!(performance_message(60), "Good effort! Practice more to improve.");
        assert_eq!(performance_message(59), "Keep practicing to master the concepts.");
    }

    #[test]
    fn status_labels() {
        assert_eq!(CompetitionStatus::Active.label(), "Active Now");
        assert_eq!(CompetitionStatus::Upcoming.label(), "Coming Soon");
    }
}
