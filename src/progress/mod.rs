//! User progress state engine
//!
//! Owns the per-session learning record and every rule that mutates it:
//! assessment placement, level unlocking, test-score recording, chapter
//! completion, and the derived metrics the dashboard reads. All operations
//! are synchronous and free of I/O; the record lives for exactly one app
//! session and is wiped on logout.

mod skills;

pub use skills::{derive_skills, SkillProfile};

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Minimum score that passes a test and unlocks the next level.
pub const PASS_MARK: f64 = 70.0;

/// Highest level in the test ladder.
pub const MAX_LEVEL: u8 = 5;

/// The programming language the user chose to study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    JavaScript,
    Java,
    Python,
}

impl Track {
    pub fn all() -> &'static [Track] {
        &[Track::JavaScript, Track::Java, Track::Python]
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Track::JavaScript => write!(f, "JavaScript"),
            Track::Java => write!(f, "Java"),
            Track::Python => write!(f, "Python"),
        }
    }
}

impl FromStr for Track {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "js" | "javascript" => Ok(Track::JavaScript),
            "java" => Ok(Track::Java),
            "py" | "python" => Ok(Track::Python),
            other => Err(format!("unknown track '{other}' (expected js, java or python)")),
        }
    }
}

/// Self-reported experience collected during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceTier {
    Beginner,
    Experienced,
}

impl fmt::Display for ExperienceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperienceTier::Beginner => write!(f, "Beginner"),
            ExperienceTier::Experienced => write!(f, "Experienced"),
        }
    }
}

/// Skill tier derived from the unlocked level, shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillTier::Beginner => write!(f, "Beginner"),
            SkillTier::Intermediate => write!(f, "Intermediate"),
            SkillTier::Advanced => write!(f, "Advanced"),
        }
    }
}

/// The per-session learning record.
///
/// Fields are private: reads go through the accessors and every write goes
/// through one of the named operations, so the unlocking rules cannot be
/// bypassed from the view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProgress {
    authenticated: bool,
    display_name: String,
    track: Option<Track>,
    experience: Option<ExperienceTier>,
    assessment_score: Option<f64>,
    completed_chapters: BTreeSet<String>,
    level_scores: BTreeMap<u8, f64>,
    unlocked_level: u8,
    skills: SkillProfile,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            authenticated: false,
            display_name: String::new(),
            track: None,
            experience: None,
            assessment_score: None,
            completed_chapters: BTreeSet::new(),
            level_scores: BTreeMap::new(),
            unlocked_level: 1,
            skills: SkillProfile::default(),
        }
    }
}

impl UserProgress {
    pub fn new() -> Self {
        Self::default()
    }

    // --- operations ---

    /// Mark the session authenticated under the given display name.
    /// Calling again simply overwrites the name; nothing else changes.
    pub fn authenticate(&mut self, display_name: &str) {
        self.authenticated = true;
        self.display_name = display_name.to_string();
    }

    /// Log out: the whole record returns to its initial defaults.
    pub fn deauthenticate(&mut self) {
        *self = Self::default();
    }

    pub fn set_experience_tier(&mut self, tier: ExperienceTier) {
        self.experience = Some(tier);
    }

    pub fn set_track(&mut self, track: Track) {
        self.track = Some(track);
    }

    /// Record the placement assessment. The unlocked level is OVERWRITTEN
    /// here (2 on a pass, 1 otherwise) because the assessment establishes
    /// the starting level rather than extending an existing frontier.
    pub fn record_initial_assessment(&mut self, score: f64, skills: SkillProfile) {
        debug_assert!((0.0..=100.0).contains(&score), "assessment score out of range: {score}");
        self.assessment_score = Some(score);
        self.skills = skills;
        self.unlocked_level = if score >= PASS_MARK { 2 } else { 1 };
    }

    /// Record a level-test score and, on a pass below the top level, advance
    /// the frontier. The advance is a monotonic max: re-passing an old level
    /// unlocks its successor, which is a no-op when already unlocked.
    pub fn submit_level_test(&mut self, level: u8, score: f64) {
        debug_assert!((1..=MAX_LEVEL).contains(&level), "level out of range: {level}");
        debug_assert!((0.0..=100.0).contains(&score), "test score out of range: {score}");
        self.level_scores.insert(level, score);
        if score >= PASS_MARK && level < MAX_LEVEL {
            self.unlocked_level = self.unlocked_level.max(level + 1);
        }
    }

    /// Mark a chapter completed. Set semantics: repeat calls are no-ops.
    pub fn complete_chapter(&mut self, chapter_id: &str) {
        self.completed_chapters.insert(chapter_id.to_string());
    }

    /// Clear the onboarding answers (track, experience, assessment) without
    /// touching authentication or accumulated test scores.
    pub fn reset_onboarding(&mut self) {
        self.track = None;
        self.experience = None;
        self.assessment_score = None;
    }

    // --- queries ---

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn track(&self) -> Option<Track> {
        self.track
    }

    pub fn experience(&self) -> Option<ExperienceTier> {
        self.experience
    }

    pub fn assessment_score(&self) -> Option<f64> {
        self.assessment_score
    }

    pub fn unlocked_level(&self) -> u8 {
        self.unlocked_level
    }

    pub fn skills(&self) -> &SkillProfile {
        &self.skills
    }

    pub fn level_score(&self, level: u8) -> Option<f64> {
        self.level_scores.get(&level).copied()
    }

    /// Number of level tests with a recorded score.
    pub fn tests_taken(&self) -> usize {
        self.level_scores.len()
    }

    pub fn completed_chapter_count(&self) -> usize {
        self.completed_chapters.len()
    }

    pub fn is_chapter_completed(&self, chapter_id: &str) -> bool {
        self.completed_chapters.contains(chapter_id)
    }

    pub fn is_level_unlocked(&self, level: u8) -> bool {
        level <= self.unlocked_level
    }

    /// Mean of the recorded level scores, falling back to the assessment
    /// score (0.0 when neither exists). Recomputed on every call.
    pub fn average_score(&self) -> f64 {
        if self.level_scores.is_empty() {
            return self.assessment_score.unwrap_or(0.0);
        }
        let sum: f64 = self.level_scores.values().sum();
        sum / self.level_scores.len() as f64
    }

    /// Coarse tier for display: Advanced at level 4+, Intermediate at 3.
    pub fn skill_tier(&self) -> SkillTier {
        match self.unlocked_level {
            l if l >= 4 => SkillTier::Advanced,
            3 => SkillTier::Intermediate,
            _ => SkillTier::Beginner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assessed(score: f64) -> UserProgress {
        let mut progress = UserProgress::new();
        progress.authenticate("dana");
        progress.record_initial_assessment(score, SkillProfile::default());
        progress
    }

    #[test]
    fn new_session_starts_locked_to_level_one() {
        let progress = UserProgress::new();
        assert!(!progress.is_authenticated());
        assert_eq!(progress.unlocked_level(), 1);
        assert_eq!(progress.completed_chapter_count(), 0);
        assert_eq!(progress.assessment_score(), None);
        assert!(progress.is_level_unlocked(1));
        assert!(!progress.is_level_unlocked(2));
    }

    #[test]
    fn authenticate_stores_name_and_nothing_else() {
        let mut progress = UserProgress::new();
        progress.complete_chapter("functions-and-scope");
        progress.authenticate("sam");
        assert!(progress.is_authenticated());
        assert_eq!(progress.display_name(), "sam");
        assert_eq!(progress.completed_chapter_count(), 1);

        // A second call just replaces the name.
        progress.authenticate("sam.w");
        assert_eq!(progress.display_name(), "sam.w");
    }

    #[test]
    fn deauthenticate_restores_defaults() {
        let mut progress = assessed(88.0);
        progress.set_track(Track::JavaScript);
        progress.submit_level_test(2, 90.0);
        progress.complete_chapter("dom-manipulation");

        progress.deauthenticate();
        assert_eq!(progress, UserProgress::default());
        assert_eq!(progress.unlocked_level(), 1);
        assert_eq!(progress.assessment_score(), None);
    }

    #[test]
    fn passing_assessment_places_at_level_two() {
        assert_eq!(assessed(70.0).unlocked_level(), 2);
        assert_eq!(assessed(100.0).unlocked_level(), 2);
    }

    #[test]
    fn failing_assessment_places_at_level_one() {
        assert_eq!(assessed(69.9).unlocked_level(), 1);
        assert_eq!(assessed(0.0).unlocked_level(), 1);
    }

    #[test]
    fn assessment_overwrites_the_frontier() {
        let mut progress = assessed(90.0);
        progress.submit_level_test(2, 95.0);
        assert_eq!(progress.unlocked_level(), 3);

        // Retaking the assessment with a failing score pulls the start back.
        progress.record_initial_assessment(40.0, SkillProfile::default());
        assert_eq!(progress.unlocked_level(), 1);
    }

    #[test]
    fn passing_a_level_unlocks_the_next() {
        let mut progress = assessed(80.0);
        progress.submit_level_test(2, 75.0);
        assert_eq!(progress.unlocked_level(), 3);
        assert!(progress.is_level_unlocked(3));
        assert!(!progress.is_level_unlocked(4));
    }

    #[test]
    fn failing_a_level_records_score_without_unlocking() {
        let mut progress = assessed(80.0);
        progress.submit_level_test(2, 50.0);
        assert_eq!(progress.level_score(2), Some(50.0));
        assert_eq!(progress.unlocked_level(), 2);
    }

    #[test]
    fn repassing_an_old_level_never_lowers_the_frontier() {
        let mut progress = assessed(80.0);
        progress.submit_level_test(2, 90.0);
        progress.submit_level_test(3, 90.0);
        assert_eq!(progress.unlocked_level(), 4);

        progress.submit_level_test(1, 100.0);
        assert_eq!(progress.unlocked_level(), 4);
    }

    #[test]
    fn level_five_is_terminal() {
        let mut progress = assessed(80.0);
        for level in 2..=4 {
            progress.submit_level_test(level, 100.0);
        }
        assert_eq!(progress.unlocked_level(), 5);

        progress.submit_level_test(5, 100.0);
        assert_eq!(progress.unlocked_level(), 5);
        assert_eq!(progress.level_score(5), Some(100.0));
    }

    #[test]
    fn retake_overwrites_previous_score() {
        let mut progress = assessed(80.0);
        progress.submit_level_test(2, 40.0);
        progress.submit_level_test(2, 85.0);
        assert_eq!(progress.level_score(2), Some(85.0));
        assert_eq!(progress.tests_taken(), 1);
    }

    #[test]
    fn completing_a_chapter_twice_counts_once() {
        let mut progress = UserProgress::new();
        progress.complete_chapter("arrays-and-objects");
        progress.complete_chapter("arrays-and-objects");
        assert_eq!(progress.completed_chapter_count(), 1);
        assert!(progress.is_chapter_completed("arrays-and-objects"));
    }

    #[test]
    fn average_falls_back_to_assessment_then_zero() {
        let mut progress = UserProgress::new();
        assert_eq!(progress.average_score(), 0.0);

        progress.record_initial_assessment(42.0, SkillProfile::default());
        assert_eq!(progress.average_score(), 42.0);

        progress.submit_level_test(1, 80.0);
        progress.submit_level_test(2, 60.0);
        assert_eq!(progress.average_score(), 70.0);
    }

    #[test]
    fn skill_tier_follows_the_frontier() {
        let mut progress = assessed(80.0);
        assert_eq!(progress.skill_tier(), SkillTier::Beginner);

        progress.submit_level_test(2, 80.0);
        assert_eq!(progress.skill_tier(), SkillTier::Intermediate);

        progress.submit_level_test(3, 80.0);
        assert_eq!(progress.skill_tier(), SkillTier::Advanced);
    }

    #[test]
    fn reset_onboarding_keeps_authentication_and_scores() {
        let mut progress = assessed(80.0);
        progress.set_track(Track::Python);
        progress.set_experience_tier(ExperienceTier::Beginner);
        progress.submit_level_test(2, 90.0);

        progress.reset_onboarding();
        assert!(progress.is_authenticated());
        assert_eq!(progress.track(), None);
        assert_eq!(progress.experience(), None);
        assert_eq!(progress.assessment_score(), None);
        assert_eq!(progress.level_score(2), Some(90.0));
    }

    #[test]
    fn track_parses_short_and_long_names() {
        assert_eq!("js".parse::<Track>(), Ok(Track::JavaScript));
        assert_eq!("JavaScript".parse::<Track>(), Ok(Track::JavaScript));
        assert_eq!("py".parse::<Track>(), Ok(Track::Python));
        assert_eq!("java".parse::<Track>(), Ok(Track::Java));
        assert!("ruby".parse::<Track>().is_err());
    }
}
