//! Application state definitions

use std::str::FromStr;
use std::time::Instant;

use crate::catalog::{Catalog, Question};
use crate::competition::{Competition, LeaderboardRow, COMPETITION_SECONDS};
use crate::progress::{UserProgress, PASS_MARK};

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Home,
    Login,
    Onboarding,
    Assessment,
    Dashboard,
}

/// Legal screen transitions. Anything not listed is a caller mistake and is
/// ignored at runtime instead of crashing the session.
const TRANSITIONS: &[(Screen, Screen)] = &[
    (Screen::Home, Screen::Login),
    (Screen::Login, Screen::Home),
    (Screen::Login, Screen::Onboarding),
    (Screen::Onboarding, Screen::Assessment),
    (Screen::Assessment, Screen::Dashboard),
    (Screen::Dashboard, Screen::Home),
];

impl Screen {
    pub fn can_transition_to(self, to: Screen) -> bool {
        TRANSITIONS.contains(&(self, to))
    }
}

/// Which onboarding question is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnboardingStep {
    #[default]
    Experience,
    Track,
}

/// State for the onboarding option cards
#[derive(Debug, Clone, Default)]
pub struct OnboardingState {
    pub step: OnboardingStep,
    /// Cursor within the current step's cards
    pub selected: usize,
}

/// Which dashboard tab is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Overview,
    Learn,
    Tests,
    Progress,
    Career,
    Competitions,
}

impl DashboardTab {
    pub fn all() -> &'static [DashboardTab] {
        &[
            DashboardTab::Overview,
            DashboardTab::Learn,
            DashboardTab::Tests,
            DashboardTab::Progress,
            DashboardTab::Career,
            DashboardTab::Competitions,
        ]
    }

    /// Sidebar label
    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Overview => "Dashboard",
            DashboardTab::Learn => "Learn",
            DashboardTab::Tests => "Tests",
            DashboardTab::Progress => "Progress",
            DashboardTab::Career => "Career Path",
            DashboardTab::Competitions => "Competitions",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            DashboardTab::Overview => "🏠",
            DashboardTab::Learn => "📖",
            DashboardTab::Tests => "📝",
            DashboardTab::Progress => "📈",
            DashboardTab::Career => "💼",
            DashboardTab::Competitions => "🏆",
        }
    }

    pub fn index(self) -> usize {
        Self::all().iter().position(|&t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

impl FromStr for DashboardTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overview" | "dashboard" => Ok(DashboardTab::Overview),
            "learn" => Ok(DashboardTab::Learn),
            "tests" => Ok(DashboardTab::Tests),
            "progress" => Ok(DashboardTab::Progress),
            "career" => Ok(DashboardTab::Career),
            "competitions" | "comp" => Ok(DashboardTab::Competitions),
            other => Err(format!("unknown tab '{other}'")),
        }
    }
}

/// A single-line text input with a character-accurate cursor
#[derive(Debug, Clone, Default)]
pub struct InputField {
    pub value: String,
    /// Cursor position as a character index
    pub cursor: usize,
}

impl InputField {
    /// Byte offset of the cursor within `value`
    fn cursor_byte(&self) -> usize {
        self.value.char_indices().nth(self.cursor).map_or(self.value.len(), |(idx, _)| idx)
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.cursor_byte();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.cursor_byte();
        self.value.remove(at);
    }

    /// Delete the character under the cursor
    pub fn delete_char_forward(&mut self) {
        let at = self.cursor_byte();
        if at < self.value.len() {
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Replace the contents, placing the cursor at the end
    pub fn set(&mut self, value: String) {
        self.cursor = value.chars().count();
        self.value = value;
    }
}

/// Which login field has focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// State for the login form
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: InputField,
    pub password: InputField,
    pub focus: LoginField,
    /// Validation message shown under the fields
    pub error: Option<String>,
}

impl LoginForm {
    pub fn focused_mut(&mut self) -> &mut InputField {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }
}

/// Display name shown on the dashboard: the part of the email before the '@'.
pub fn display_name_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// What the active quiz is for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKind {
    Assessment,
    LevelTest(u8),
    Competition(u32),
}

/// Whether the quiz is still being answered or showing results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuizPhase {
    #[default]
    Answering,
    Results,
}

/// One active quiz: the placement assessment, a level test, or a
/// competition sheet. Owns its question list for the duration.
#[derive(Debug, Clone)]
pub struct QuizState {
    pub kind: QuizKind,
    pub questions: Vec<Question>,
    pub phase: QuizPhase,
    /// Index of the question on screen
    pub current: usize,
    /// Highlight cursor within the current question's options
    pub cursor: usize,
    /// One slot per question; None until answered
    pub answers: Vec<Option<usize>>,
}

impl QuizState {
    pub fn new(kind: QuizKind, questions: Vec<Question>) -> Self {
        let answers = vec![None; questions.len()];
        Self { kind, questions, phase: QuizPhase::default(), current: 0, cursor: 0, answers }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    fn option_count(&self) -> usize {
        self.current_question().map(|q| q.options.len()).unwrap_or(0)
    }

    pub fn cursor_up(&mut self) {
        let n = self.option_count();
        if n > 0 {
            self.cursor = (self.cursor + n - 1) % n;
        }
    }

    pub fn cursor_down(&mut self) {
        let n = self.option_count();
        if n > 0 {
            self.cursor = (self.cursor + 1) % n;
        }
    }

    /// Record the highlighted option as the answer for the current question.
    /// Re-answering overwrites the previous selection.
    pub fn answer_current(&mut self) {
        if let Some(slot) = self.answers.get_mut(self.current) {
            *slot = Some(self.cursor);
        }
    }

    /// Selected answer for the current question, if any
    pub fn current_answer(&self) -> Option<usize> {
        self.answers.get(self.current).copied().flatten()
    }

    /// Place the cursor on the recorded answer (or the first option)
    fn sync_cursor(&mut self) {
        self.cursor = self.current_answer().unwrap_or(0);
    }

    pub fn next_question(&mut self) {
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.sync_cursor();
        }
    }

    pub fn prev_question(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.sync_cursor();
        }
    }

    /// Jump to the first unanswered question. Returns false when all are
    /// answered.
    pub fn jump_to_unanswered(&mut self) -> bool {
        match self.answers.iter().position(Option::is_none) {
            Some(i) => {
                self.current = i;
                self.sync_cursor();
                true
            }
            None => false,
        }
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.questions.len()
    }

    pub fn correct_count(&self) -> usize {
        self.questions.iter().zip(&self.answers).filter(|(q, a)| q.is_correct(**a)).count()
    }

    /// Score for this quiz. Graded quizzes (assessment, level tests) are
    /// percent correct; competitions score participation, the floored
    /// percent of questions answered.
    pub fn score(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        match self.kind {
            QuizKind::Assessment | QuizKind::LevelTest(_) => {
                (self.correct_count() as f64 / self.questions.len() as f64) * 100.0
            }
            QuizKind::Competition(_) => f64::from(crate::competition::participation_score(
                self.answered_count(),
                self.questions.len(),
            )),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.score() >= PASS_MARK
    }

    pub fn finish(&mut self) {
        self.phase = QuizPhase::Results;
    }
}

/// Scroll state for a full-height text view
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Current scroll position (lines from top)
    pub offset: usize,
    /// Total rendered lines (updated on render)
    pub total_lines: usize,
    /// Visible height in lines (updated on render)
    pub visible_height: usize,
}

impl ScrollState {
    /// Get the maximum allowed scroll offset
    pub fn max_scroll(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_height / 2)
    }

    /// Clamp scroll offset to valid range
    pub fn clamp(&mut self) {
        let max = self.max_scroll();
        if self.offset > max {
            self.offset = max;
        }
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines);
        self.clamp();
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_bottom(&mut self) {
        self.offset = self.max_scroll();
    }

    pub fn half_page(&self) -> usize {
        (self.visible_height / 2).max(1)
    }

    pub fn page(&self) -> usize {
        self.visible_height.max(1)
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

/// Which Learn pane has focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LearnPane {
    #[default]
    Chapters,
    Reader,
}

/// State for the Learn tab: the chapter list and the reader next to it
#[derive(Debug, Clone, Default)]
pub struct CurriculumState {
    /// Selected chapter index
    pub selected: usize,
    pub pane: LearnPane,
    pub reader: ScrollState,
}

impl CurriculumState {
    /// Move the chapter selection up; the reader follows the selection so
    /// its scroll resets.
    pub fn select_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.reader.reset();
        }
    }

    pub fn select_down(&mut self, chapter_count: usize) {
        if self.selected + 1 < chapter_count {
            self.selected += 1;
            self.reader.reset();
        }
    }
}

/// State for the Tests tab: cursor over the five level cards
#[derive(Debug, Clone, Default)]
pub struct TestsState {
    pub selected: usize,
}

/// Which competition view is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompetitionView {
    #[default]
    List,
    Detail,
    Participate,
    Leaderboard,
}

/// Snapshot shown on the leaderboard view after submitting
#[derive(Debug, Clone)]
pub struct CompetitionResults {
    pub competition_id: u32,
    pub score: u32,
    pub rank: Option<usize>,
    pub rows: Vec<LeaderboardRow>,
}

/// State for the Competitions tab
#[derive(Debug, Clone, Default)]
pub struct CompetitionState {
    pub view: CompetitionView,
    /// Selected competition in the list
    pub selected: usize,
    /// Wall-clock start of the active attempt; drives the display countdown
    /// and nothing else
    pub started_at: Option<Instant>,
    pub results: Option<CompetitionResults>,
}

impl CompetitionState {
    /// Seconds left on the decorative countdown
    pub fn remaining_seconds(&self) -> u64 {
        match self.started_at {
            Some(start) => COMPETITION_SECONDS.saturating_sub(start.elapsed().as_secs()),
            None => COMPETITION_SECONDS,
        }
    }
}

/// Command line mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommandMode {
    /// Command line hidden or showing status
    #[default]
    Normal,
    /// Accepting : commands
    Command,
}

/// State for the command line input
#[derive(Debug, Clone, Default)]
pub struct CommandLineState {
    pub mode: CommandMode,
    pub input: InputField,
    /// Status/error message to display (when not in input mode)
    pub message: Option<String>,
    /// Whether message is an error
    pub is_error: bool,
    /// Command history
    pub history: Vec<String>,
    /// Current history index when navigating
    pub history_index: Option<usize>,
}

impl CommandLineState {
    /// Maximum number of history entries to keep
    const MAX_HISTORY: usize = 1000;

    /// Start command mode
    pub fn enter_command_mode(&mut self) {
        self.mode = CommandMode::Command;
        self.input.clear();
        self.message = None;
        self.history_index = None;
    }

    /// Exit input mode
    pub fn exit_input_mode(&mut self) {
        self.mode = CommandMode::Normal;
        self.input.clear();
    }

    /// Set a status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    /// Check if we're in input mode
    pub fn is_input_mode(&self) -> bool {
        self.mode == CommandMode::Command
    }

    /// Record a submitted command, skipping blanks and repeats
    pub fn add_to_history(&mut self, cmd: String) {
        if cmd.is_empty() || self.history.last() == Some(&cmd) {
            return;
        }
        if self.history.len() >= Self::MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push(cmd);
    }

    /// Step back through command history
    pub fn history_up(&mut self) {
        let next = match self.history_index {
            None if !self.history.is_empty() => self.history.len() - 1,
            Some(i) if i > 0 => i - 1,
            _ => return,
        };
        self.history_index = Some(next);
        if let Some(entry) = self.history.get(next) {
            self.input.set(entry.clone());
        }
    }

    /// Step forward through history, clearing past the newest entry
    pub fn history_down(&mut self) {
        let Some(i) = self.history_index else {
            return;
        };
        if let Some(entry) = self.history.get(i + 1) {
            self.history_index = Some(i + 1);
            self.input.set(entry.clone());
        } else {
            self.history_index = None;
            self.input.clear();
        }
    }
}

/// State for the home screen animation
#[derive(Debug, Clone)]
pub struct HomeAnimation {
    /// When the animation started
    pub start_time: Instant,

    /// Current animation frame (50ms per frame)
    pub current_frame: usize,

    /// Whether animation is complete (ready for input)
    pub complete: bool,
}

impl Default for HomeAnimation {
    fn default() -> Self {
        Self { start_time: Instant::now(), current_frame: 0, complete: false }
    }
}

impl HomeAnimation {
    /// Frame timing constants
    pub const MS_PER_FRAME: u128 = 50;
    pub const LOGO_END_FRAME: usize = 24;
    pub const PAUSE_END_FRAME: usize = 32;
    pub const TEXT_END_FRAME: usize = 50;
    pub const TAGLINE_END_FRAME: usize = 60;

    /// Title drawn letter by letter
    pub const TITLE: &'static str = "SKILLPATH";

    /// Skip straight to the final frame (animation disabled in config)
    pub fn finished() -> Self {
        Self { start_time: Instant::now(), current_frame: Self::TAGLINE_END_FRAME, complete: true }
    }

    /// Advance the animation based on elapsed time
    pub fn tick(&mut self) {
        if self.complete {
            return;
        }
        let elapsed_ms = self.start_time.elapsed().as_millis();
        self.current_frame = (elapsed_ms / Self::MS_PER_FRAME) as usize;
        self.complete = self.current_frame >= Self::TAGLINE_END_FRAME;
    }

    /// How much of the logo should be drawn (0.0 to 1.0)
    pub fn logo_progress(&self) -> f32 {
        if self.current_frame >= Self::LOGO_END_FRAME {
            1.0
        } else {
            self.current_frame as f32 / Self::LOGO_END_FRAME as f32
        }
    }

    /// How many characters of the title to show
    pub fn title_chars(&self) -> usize {
        let len = Self::TITLE.chars().count();
        if self.current_frame < Self::PAUSE_END_FRAME {
            0
        } else if self.current_frame >= Self::TEXT_END_FRAME {
            len
        } else {
            let text_frame = self.current_frame - Self::PAUSE_END_FRAME;
            let span = Self::TEXT_END_FRAME - Self::PAUSE_END_FRAME;
            (text_frame * len / span).min(len)
        }
    }

    /// Whether to show the tagline and page body
    pub fn show_tagline(&self) -> bool {
        self.current_frame >= Self::TEXT_END_FRAME
    }
}

/// Full application state
#[derive(Debug)]
pub struct AppState {
    /// Embedded curriculum, quiz banks, and level specs
    pub catalog: Catalog,

    /// Embedded competition roster
    pub competitions: Vec<Competition>,

    /// The per-session learning record
    pub progress: UserProgress,

    /// Current screen
    pub screen: Screen,

    /// Home screen animation state
    pub home_animation: HomeAnimation,

    /// Login form state
    pub login: LoginForm,

    /// Onboarding card state
    pub onboarding: OnboardingState,

    /// Active dashboard tab
    pub dashboard_tab: DashboardTab,

    /// The active quiz, if any (assessment, level test, or competition)
    pub quiz: Option<QuizState>,

    /// Learn tab state
    pub curriculum: CurriculumState,

    /// Tests tab state
    pub tests: TestsState,

    /// Competitions tab state
    pub competition: CompetitionState,

    /// Progress tab scroll
    pub progress_scroll: ScrollState,

    /// Career tab scroll
    pub career_scroll: ScrollState,

    /// Command line state
    pub command_line: CommandLineState,
}

impl AppState {
    pub fn new(catalog: Catalog, competitions: Vec<Competition>) -> Self {
        Self {
            catalog,
            competitions,
            progress: UserProgress::new(),
            screen: Screen::default(),
            home_animation: HomeAnimation::default(),
            login: LoginForm::default(),
            onboarding: OnboardingState::default(),
            dashboard_tab: DashboardTab::default(),
            quiz: None,
            curriculum: CurriculumState::default(),
            tests: TestsState::default(),
            competition: CompetitionState::default(),
            progress_scroll: ScrollState::default(),
            career_scroll: ScrollState::default(),
            command_line: CommandLineState::default(),
        }
    }

    /// Move to another screen if the transition table allows it. Illegal
    /// jumps are logged and dropped.
    pub fn navigate(&mut self, to: Screen) {
        if self.screen.can_transition_to(to) {
            tracing::debug!(from = ?self.screen, to = ?to, "screen transition");
            self.screen = to;
        } else {
            tracing::debug!(from = ?self.screen, to = ?to, "ignoring illegal screen transition");
        }
    }

    /// Clear every view state that belongs to an authenticated session.
    /// Called on logout alongside the engine reset.
    pub fn reset_session_views(&mut self) {
        self.login = LoginForm::default();
        self.onboarding = OnboardingState::default();
        self.dashboard_tab = DashboardTab::default();
        self.quiz = None;
        self.curriculum = CurriculumState::default();
        self.tests = TestsState::default();
        self.competition = CompetitionState::default();
        self.progress_scroll = ScrollState::default();
        self.career_scroll = ScrollState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| Question {
                id: i as u32 + 1,
                prompt: format!("Question {}", i + 1),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                answer: 1,
            })
            .collect()
    }

    fn test_state() -> AppState {
        let catalog = Catalog::load().unwrap();
        let competitions = crate::competition::load_competitions().unwrap();
        AppState::new(catalog, competitions)
    }

    #[test]
    fn legal_transitions_follow_the_table() {
        assert!(Screen::Home.can_transition_to(Screen::Login));
        assert!(Screen::Login.can_transition_to(Screen::Home));
        assert!(Screen::Login.can_transition_to(Screen::Onboarding));
        assert!(Screen::Onboarding.can_transition_to(Screen::Assessment));
        assert!(Screen::Assessment.can_transition_to(Screen::Dashboard));
        assert!(Screen::Dashboard.can_transition_to(Screen::Home));
    }

    #[test]
    fn illegal_transitions_are_rejected() {
        assert!(!Screen::Home.can_transition_to(Screen::Dashboard));
        assert!(!Screen::Assessment.can_transition_to(Screen::Onboarding));
        assert!(!Screen::Dashboard.can_transition_to(Screen::Login));
        assert!(!Screen::Home.can_transition_to(Screen::Home));
    }

    #[test]
    fn navigate_ignores_illegal_jumps() {
        let mut state = test_state();
        state.navigate(Screen::Dashboard);
        assert_eq!(state.screen, Screen::Home);

        state.navigate(Screen::Login);
        assert_eq!(state.screen, Screen::Login);
    }

    #[test]
    fn display_name_is_the_email_local_part() {
        assert_eq!(display_name_from_email("sam@example.com"), "sam");
        assert_eq!(display_name_from_email("no-at-sign"), "no-at-sign");
    }

    #[test]
    fn input_field_edits_at_char_boundaries() {
        let mut field = InputField::default();
        for c in "héllo".chars() {
            field.insert_char(c);
        }
        field.move_left();
        field.move_left();
        field.insert_char('x');
        assert_eq!(field.value, "hélxlo");

        field.delete_char();
        assert_eq!(field.value, "héllo");

        field.move_start();
        field.delete_char_forward();
        assert_eq!(field.value, "éllo");
    }

    #[test]
    fn login_focus_cycles_between_fields() {
        let mut form = LoginForm::default();
        assert_eq!(form.focus, LoginField::Email);
        form.cycle_focus();
        assert_eq!(form.focus, LoginField::Password);
        form.cycle_focus();
        assert_eq!(form.focus, LoginField::Email);
    }

    #[test]
    fn quiz_records_answers_and_counts_correct() {
        let mut quiz = QuizState::new(QuizKind::LevelTest(1), sample_questions(3));
        quiz.cursor_down(); // option 1, the correct one
        quiz.answer_current();
        quiz.next_question();
        quiz.answer_current(); // option 0, wrong
        assert_eq!(quiz.answered_count(), 2);
        assert!(!quiz.is_complete());
        assert_eq!(quiz.correct_count(), 1);
    }

    #[test]
    fn quiz_cursor_wraps_around_options() {
        let mut quiz = QuizState::new(QuizKind::Assessment, sample_questions(1));
        quiz.cursor_up();
        assert_eq!(quiz.cursor, 3);
        quiz.cursor_down();
        assert_eq!(quiz.cursor, 0);
    }

    #[test]
    fn cursor_follows_recorded_answer_when_revisiting() {
        let mut quiz = QuizState::new(QuizKind::Assessment, sample_questions(2));
        quiz.cursor_down();
        quiz.cursor_down();
        quiz.answer_current();
        quiz.next_question();
        assert_eq!(quiz.cursor, 0);
        quiz.prev_question();
        assert_eq!(quiz.cursor, 2);
    }

    #[test]
    fn graded_score_is_percent_correct() {
        let mut quiz = QuizState::new(QuizKind::LevelTest(2), sample_questions(10));
        for i in 0..10 {
            quiz.current = i;
            quiz.cursor = if i < 7 { 1 } else { 0 };
            quiz.answer_current();
        }
        assert_eq!(quiz.score(), 70.0);
        assert!(quiz.is_pass());
    }

    #[test]
    fn competition_score_is_floored_participation() {
        let mut quiz = QuizState::new(QuizKind::Competition(1), sample_questions(15));
        for i in 0..7 {
            quiz.current = i;
            quiz.answer_current();
        }
        // 7 of 15 answered: floor(46.66) = 46
        assert_eq!(quiz.score(), 46.0);
    }

    #[test]
    fn jump_to_unanswered_finds_the_first_gap() {
        let mut quiz = QuizState::new(QuizKind::Assessment, sample_questions(3));
        quiz.answer_current();
        quiz.current = 2;
        quiz.answer_current();

        assert!(quiz.jump_to_unanswered());
        assert_eq!(quiz.current, 1);

        quiz.answer_current();
        assert!(!quiz.jump_to_unanswered());
        assert!(quiz.is_complete());
    }

    #[test]
    fn dashboard_tabs_cycle_in_order() {
        assert_eq!(DashboardTab::Overview.next(), DashboardTab::Learn);
        assert_eq!(DashboardTab::Competitions.next(), DashboardTab::Overview);
        assert_eq!(DashboardTab::Overview.prev(), DashboardTab::Competitions);
    }

    #[test]
    fn dashboard_tab_parses_names() {
        assert_eq!("learn".parse::<DashboardTab>(), Ok(DashboardTab::Learn));
        assert_eq!("Career".parse::<DashboardTab>(), Ok(DashboardTab::Career));
        assert_eq!("comp".parse::<DashboardTab>(), Ok(DashboardTab::Competitions));
        assert!("settings".parse::<DashboardTab>().is_err());
    }

    #[test]
    fn scroll_clamps_to_content() {
        let mut scroll = ScrollState { offset: 0, total_lines: 100, visible_height: 20 };
        scroll.scroll_down(500);
        assert_eq!(scroll.offset, scroll.max_scroll());
        scroll.scroll_up(500);
        assert_eq!(scroll.offset, 0);
    }

    #[test]
    fn chapter_selection_resets_reader_scroll() {
        let mut curriculum = CurriculumState::default();
        curriculum.reader.total_lines = 100;
        curriculum.reader.visible_height = 20;
        curriculum.reader.scroll_down(30);

        curriculum.select_down(10);
        assert_eq!(curriculum.selected, 1);
        assert_eq!(curriculum.reader.offset, 0);

        curriculum.selected = 9;
        curriculum.select_down(10);
        assert_eq!(curriculum.selected, 9);
    }

    #[test]
    fn countdown_starts_full_and_counts_from_start_instant() {
        let competition = CompetitionState::default();
        assert_eq!(competition.remaining_seconds(), COMPETITION_SECONDS);

        let started = CompetitionState { started_at: Some(Instant::now()), ..Default::default() };
        assert!(started.remaining_seconds() <= COMPETITION_SECONDS);
        assert!(started.remaining_seconds() > COMPETITION_SECONDS - 5);
    }

    #[test]
    fn command_history_navigates_latest_first() {
        let mut cl = CommandLineState::default();
        cl.add_to_history("learn".to_string());
        cl.add_to_history("quit".to_string());
        // Duplicate of the latest entry is dropped.
        cl.add_to_history("quit".to_string());
        assert_eq!(cl.history.len(), 2);

        cl.history_up();
        assert_eq!(cl.input.value, "quit");
        cl.history_up();
        assert_eq!(cl.input.value, "learn");
        cl.history_down();
        assert_eq!(cl.input.value, "quit");
        cl.history_down();
        assert_eq!(cl.input.value, "");
    }

    #[test]
    fn finished_animation_shows_everything() {
        let anim = HomeAnimation::finished();
        assert!(anim.complete);
        assert_eq!(anim.title_chars(), HomeAnimation::TITLE.chars().count());
        assert!(anim.show_tagline());
        assert_eq!(anim.logo_progress(), 1.0);
    }

    #[test]
    fn title_reveals_letter_by_letter() {
        let mut anim = HomeAnimation::default();
        anim.current_frame = HomeAnimation::PAUSE_END_FRAME;
        assert_eq!(anim.title_chars(), 0);
        anim.current_frame = HomeAnimation::PAUSE_END_FRAME + 9;
        assert_eq!(anim.title_chars(), 4);
        anim.current_frame = HomeAnimation::TEXT_END_FRAME;
        assert_eq!(anim.title_chars(), 9);
    }

    #[test]
    fn logout_reset_clears_session_views() {
        let mut state = test_state();
        state.dashboard_tab = DashboardTab::Career;
        state.quiz = Some(QuizState::new(QuizKind::Assessment, sample_questions(2)));
        state.competition.view = CompetitionView::Detail;

        state.reset_session_views();
        assert_eq!(state.dashboard_tab, DashboardTab::Overview);
        assert!(state.quiz.is_none());
        assert_eq!(state.competition.view, CompetitionView::List);
    }
}
