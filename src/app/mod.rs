//! Application runtime and event handling

pub mod command;
pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info, warn};

use crate::catalog::{self, Catalog};
use crate::competition::{self, COMPETITION_SECONDS, Participant, mock_questions, user_rank};
use crate::config::Config;
use crate::progress::{ExperienceTier, Track, derive_skills};
use crate::theme::Theme;
use crate::ui;
use command::{Command, ParseResult, parse_command};
use input::{Action, key_with_modifier_to_action};
use state::{
    AppState, CompetitionResults, CompetitionView, DashboardTab, HomeAnimation, LearnPane,
    LoginForm, OnboardingState, OnboardingStep, QuizKind, QuizPhase, QuizState, Screen,
    display_name_from_email,
};

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Current application state
    state: AppState,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

/// What a quiz keypress asks the surrounding screen to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuizSignal {
    None,
    /// Every question answered and confirmed
    Submit,
    /// Esc pressed while answering
    Exit,
}

/// Shared quiz-runner keys: cursor over options, Enter records the
/// highlighted option and moves to the next unanswered question.
fn drive_quiz(quiz: &mut QuizState, action: Action) -> QuizSignal {
    match action {
        Action::Up => quiz.cursor_up(),
        Action::Down => quiz.cursor_down(),
        Action::Left | Action::PageUp => quiz.prev_question(),
        Action::Right | Action::PageDown => quiz.next_question(),
        Action::Back => return QuizSignal::Exit,
        Action::Select => {
            quiz.answer_current();
            if quiz.is_complete() {
                return QuizSignal::Submit;
            }
            quiz.jump_to_unanswered();
        }
        _ => {}
    }
    QuizSignal::None
}

/// Apply a navigation action to a plain scrolling view
fn scroll_with(scroll: &mut state::ScrollState, action: Action) {
    match action {
        Action::Up => scroll.scroll_up(1),
        Action::Down => scroll.scroll_down(1),
        Action::PageUp => scroll.scroll_up(scroll.page()),
        Action::PageDown => scroll.scroll_down(scroll.page()),
        Action::HalfPageUp => scroll.scroll_up(scroll.half_page()),
        Action::HalfPageDown => scroll.scroll_down(scroll.half_page()),
        Action::Top => scroll.scroll_top(),
        Action::Bottom => scroll.scroll_bottom(),
        _ => {}
    }
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Result<Self> {
        let catalog = Catalog::load().context("Failed to load embedded curriculum")?;
        let competitions =
            competition::load_competitions().context("Failed to load competition roster")?;

        let mut state = AppState::new(catalog, competitions);
        if !config.animation {
            state.home_animation = HomeAnimation::finished();
        }

        let terminal = Self::setup_terminal()?;

        Ok(Self { config, state, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            // Draw UI
            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state, &self.config);
            })?;

            // Handle events
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match self.handle_key(key) {
                            Ok(true) => break, // Exit requested
                            Ok(false) => {}    // Continue
                            Err(e) => {
                                tracing::error!("Error handling key: {}", e);
                            }
                        }
                    }
                }
            }

            self.tick();
        }

        self.restore_terminal()?;
        Ok(())
    }

    /// Per-frame updates between key events
    fn tick(&mut self) {
        if self.state.screen == Screen::Home {
            self.state.home_animation.tick();
        }

        // An exhausted competition countdown submits whatever was answered.
        if self.state.screen == Screen::Dashboard
            && self.state.competition.view == CompetitionView::Participate
            && self.state.competition.remaining_seconds() == 0
        {
            self.submit_competition();
        }
    }

    /// Handle a key press, returns true if should exit
    fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        // Command mode captures everything while active.
        if self.state.command_line.is_input_mode() {
            return self.handle_command_line_key(key.code);
        }

        // ':' enters command mode anywhere except the login form, where it
        // is a plain character.
        if key.code == KeyCode::Char(':') && self.state.screen != Screen::Login {
            self.state.command_line.enter_command_mode();
            return Ok(false);
        }

        match self.state.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::Login => {
                self.handle_login_key(key.code);
                Ok(false)
            }
            Screen::Onboarding => {
                self.handle_onboarding_key(key);
                Ok(false)
            }
            Screen::Assessment => {
                self.handle_assessment_key(key);
                Ok(false)
            }
            Screen::Dashboard => self.handle_dashboard_key(key),
        }
    }

    // --- home ---

    fn handle_home_key(&mut self, key: KeyEvent) -> Result<bool> {
        // Any key while the animation is playing just completes it.
        if !self.state.home_animation.complete {
            self.state.home_animation = HomeAnimation::finished();
            return Ok(false);
        }

        match key_with_modifier_to_action(key.code, key.modifiers) {
            Some(Action::Quit) | Some(Action::Back) => return Ok(true),
            Some(Action::Select) => self.state.navigate(Screen::Login),
            _ => {}
        }
        Ok(false)
    }

    // --- login ---

    fn handle_login_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.state.login = LoginForm::default();
                self.state.navigate(Screen::Home);
            }
            KeyCode::Enter => self.try_login(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.state.login.cycle_focus();
            }
            KeyCode::Left => self.state.login.focused_mut().move_left(),
            KeyCode::Right => self.state.login.focused_mut().move_right(),
            KeyCode::Home => self.state.login.focused_mut().move_start(),
            KeyCode::End => self.state.login.focused_mut().move_end(),
            KeyCode::Backspace => self.state.login.focused_mut().delete_char(),
            KeyCode::Delete => self.state.login.focused_mut().delete_char_forward(),
            KeyCode::Char(c) => {
                self.state.login.error = None;
                self.state.login.focused_mut().insert_char(c);
            }
            _ => {}
        }
    }

    fn try_login(&mut self) {
        let email = self.state.login.email.value.trim().to_string();
        let password = self.state.login.password.value.clone();

        if email.is_empty() || password.is_empty() {
            self.state.login.error = Some("Please fill in all fields".to_string());
            return;
        }

        let name = display_name_from_email(&email).to_string();
        self.state.progress.authenticate(&name);
        info!(user = %name, "logged in");

        self.state.login = LoginForm::default();
        self.state.onboarding = OnboardingState::default();
        self.state.navigate(Screen::Onboarding);
    }

    // --- onboarding ---

    fn handle_onboarding_key(&mut self, key: KeyEvent) {
        let Some(action) = key_with_modifier_to_action(key.code, key.modifiers) else {
            return;
        };

        let card_count = match self.state.onboarding.step {
            OnboardingStep::Experience => 2,
            OnboardingStep::Track => Track::all().len(),
        };

        match action {
            Action::Up | Action::Left => {
                let selected = &mut self.state.onboarding.selected;
                *selected = (*selected + card_count - 1) % card_count;
            }
            Action::Down | Action::Right => {
                let selected = &mut self.state.onboarding.selected;
                *selected = (*selected + 1) % card_count;
            }
            Action::Back => {
                if self.state.onboarding.step == OnboardingStep::Track {
                    self.state.onboarding.step = OnboardingStep::Experience;
                    self.state.onboarding.selected = 0;
                }
            }
            Action::Select => self.advance_onboarding(),
            _ => {}
        }
    }

    fn advance_onboarding(&mut self) {
        match self.state.onboarding.step {
            OnboardingStep::Experience => {
                let tier = if self.state.onboarding.selected == 0 {
                    ExperienceTier::Beginner
                } else {
                    ExperienceTier::Experienced
                };
                self.state.progress.set_experience_tier(tier);
                self.state.onboarding.step = OnboardingStep::Track;
                // Honor the configured track preselect, if any.
                self.state.onboarding.selected = self
                    .config
                    .default_track
                    .and_then(|track| Track::all().iter().position(|&t| t == track))
                    .unwrap_or(0);
            }
            OnboardingStep::Track => {
                let tracks = Track::all();
                let track = tracks[self.state.onboarding.selected.min(tracks.len() - 1)];
                self.state.progress.set_track(track);
                info!(%track, "track selected");
                self.start_assessment();
            }
        }
    }

    fn start_assessment(&mut self) {
        let questions = self.state.catalog.assessment().to_vec();
        self.state.quiz = Some(QuizState::new(QuizKind::Assessment, questions));
        self.state.navigate(Screen::Assessment);
    }

    // --- assessment ---

    fn handle_assessment_key(&mut self, key: KeyEvent) {
        let Some(action) = key_with_modifier_to_action(key.code, key.modifiers) else {
            return;
        };

        let phase = match self.state.quiz.as_ref() {
            Some(quiz) => quiz.phase,
            None => return,
        };

        match phase {
            QuizPhase::Answering => {
                let signal = match self.state.quiz.as_mut() {
                    Some(quiz) => drive_quiz(quiz, action),
                    None => return,
                };
                // The placement test cannot be abandoned, so Exit is ignored.
                if signal == QuizSignal::Submit {
                    self.finish_assessment();
                }
            }
            QuizPhase::Results => {
                if action == Action::Select {
                    self.state.quiz = None;
                    self.state.navigate(Screen::Dashboard);
                }
            }
        }
    }

    fn finish_assessment(&mut self) {
        let (score, skills) = match self.state.quiz.as_mut() {
            Some(quiz) => {
                let score = quiz.score();
                let key = catalog::answer_key(&quiz.questions);
                let skills = derive_skills(&quiz.answers, &key).with_fallbacks();
                quiz.finish();
                (score, skills)
            }
            None => return,
        };

        self.state.progress.record_initial_assessment(score, skills);
        info!(
            score,
            placed_level = self.state.progress.unlocked_level(),
            "assessment recorded"
        );
    }

    // --- dashboard ---

    fn handle_dashboard_key(&mut self, key: KeyEvent) -> Result<bool> {
        let Some(action) = key_with_modifier_to_action(key.code, key.modifiers) else {
            return Ok(false);
        };

        // An active quiz (level test or competition) captures input first.
        if self.state.quiz.is_some() {
            self.handle_dashboard_quiz_key(action);
            return Ok(false);
        }

        match action {
            Action::Quit => return Ok(true),
            Action::NextTab => self.switch_tab(self.state.dashboard_tab.next()),
            Action::PrevTab => self.switch_tab(self.state.dashboard_tab.prev()),
            Action::JumpTab(index) => {
                if let Some(&tab) = DashboardTab::all().get(index) {
                    self.switch_tab(tab);
                }
            }
            _ => match self.state.dashboard_tab {
                DashboardTab::Overview => self.handle_overview_key(action),
                DashboardTab::Learn => self.handle_learn_key(action),
                DashboardTab::Tests => self.handle_tests_key(action),
                DashboardTab::Progress => scroll_with(&mut self.state.progress_scroll, action),
                DashboardTab::Career => scroll_with(&mut self.state.career_scroll, action),
                DashboardTab::Competitions => self.handle_competitions_key(action),
            },
        }
        Ok(false)
    }

    fn switch_tab(&mut self, tab: DashboardTab) {
        if self.state.dashboard_tab != tab {
            debug!(?tab, "dashboard tab switch");
            self.state.dashboard_tab = tab;
        }
    }

    fn handle_overview_key(&mut self, action: Action) {
        // The continue-learning banner is the only actionable element.
        if action == Action::Select {
            self.switch_tab(DashboardTab::Learn);
        }
    }

    fn handle_learn_key(&mut self, action: Action) {
        match action {
            Action::Left => self.state.curriculum.pane = LearnPane::Chapters,
            Action::Right => self.state.curriculum.pane = LearnPane::Reader,
            Action::Back => self.state.curriculum.pane = LearnPane::Chapters,
            Action::MarkComplete => self.mark_current_chapter(),
            Action::Select => {
                if self.state.curriculum.pane == LearnPane::Chapters {
                    self.state.curriculum.pane = LearnPane::Reader;
                    self.state.curriculum.reader.reset();
                }
            }
            _ => match self.state.curriculum.pane {
                LearnPane::Chapters => match action {
                    Action::Up => self.state.curriculum.select_up(),
                    Action::Down => {
                        let count = self.state.catalog.chapters().len();
                        self.state.curriculum.select_down(count);
                    }
                    _ => {}
                },
                LearnPane::Reader => scroll_with(&mut self.state.curriculum.reader, action),
            },
        }
    }

    fn mark_current_chapter(&mut self) {
        let selected = self.state.curriculum.selected;
        let Some((id, title)) = self
            .state
            .catalog
            .chapters()
            .get(selected)
            .map(|chapter| (chapter.id.clone(), chapter.title.clone()))
        else {
            return;
        };

        self.state.progress.complete_chapter(&id);
        info!(chapter = %id, "chapter completed");
        self.state.command_line.set_message(format!("Completed: {title}"));
    }

    fn handle_tests_key(&mut self, action: Action) {
        match action {
            Action::Up => {
                self.state.tests.selected = self.state.tests.selected.saturating_sub(1);
            }
            Action::Down => {
                let count = self.state.catalog.levels().len();
                if self.state.tests.selected + 1 < count {
                    self.state.tests.selected += 1;
                }
            }
            Action::Select => self.start_level_test(),
            _ => {}
        }
    }

    fn start_level_test(&mut self) {
        let level = self.state.tests.selected as u8 + 1;
        if !self.state.progress.is_level_unlocked(level) {
            self.state
                .command_line
                .set_error(format!("Score 70% on Level {} to unlock this test", level - 1));
            return;
        }

        let Some(spec) = self.state.catalog.level(level) else {
            return;
        };
        let questions = spec.questions.clone();
        debug!(level, "level test started");
        self.state.quiz = Some(QuizState::new(QuizKind::LevelTest(level), questions));
    }

    fn finish_level_test(&mut self, level: u8) {
        let score = match self.state.quiz.as_mut() {
            Some(quiz) => {
                quiz.finish();
                quiz.score()
            }
            None => return,
        };

        let before = self.state.progress.unlocked_level();
        self.state.progress.submit_level_test(level, score);
        let unlocked = self.state.progress.unlocked_level();
        info!(level, score, unlocked, "level test submitted");
        if unlocked > before {
            debug!(unlocked, "new level unlocked");
        }
    }

    /// Keys while a level test or competition sheet is on screen
    fn handle_dashboard_quiz_key(&mut self, action: Action) {
        let (kind, phase) = match self.state.quiz.as_ref() {
            Some(quiz) => (quiz.kind, quiz.phase),
            None => return,
        };

        match kind {
            QuizKind::LevelTest(level) => match phase {
                QuizPhase::Answering => {
                    let signal = match self.state.quiz.as_mut() {
                        Some(quiz) => drive_quiz(quiz, action),
                        None => return,
                    };
                    match signal {
                        QuizSignal::Submit => self.finish_level_test(level),
                        // Abandoning records no score.
                        QuizSignal::Exit => self.state.quiz = None,
                        QuizSignal::None => {}
                    }
                }
                QuizPhase::Results => {
                    if matches!(action, Action::Select | Action::Back) {
                        self.state.quiz = None;
                    }
                }
            },
            QuizKind::Competition(_) => {
                // Competitions accept a partial sheet at any time.
                if action == Action::Submit {
                    self.submit_competition();
                    return;
                }
                let signal = match self.state.quiz.as_mut() {
                    Some(quiz) => drive_quiz(quiz, action),
                    None => return,
                };
                match signal {
                    QuizSignal::Submit => self.submit_competition(),
                    QuizSignal::Exit => {
                        self.state.quiz = None;
                        self.state.competition.started_at = None;
                        self.state.competition.view = CompetitionView::Detail;
                    }
                    QuizSignal::None => {}
                }
            }
            QuizKind::Assessment => {
                debug_assert!(false, "assessment quiz active on the dashboard");
            }
        }
    }

    fn handle_competitions_key(&mut self, action: Action) {
        match self.state.competition.view {
            CompetitionView::List => match action {
                Action::Up => {
                    self.state.competition.selected =
                        self.state.competition.selected.saturating_sub(1);
                }
                Action::Down => {
                    let count = self.state.competitions.len();
                    if self.state.competition.selected + 1 < count {
                        self.state.competition.selected += 1;
                    }
                }
                Action::Select => {
                    if !self.state.competitions.is_empty() {
                        self.state.competition.view = CompetitionView::Detail;
                    }
                }
                _ => {}
            },
            CompetitionView::Detail => match action {
                Action::Back => self.state.competition.view = CompetitionView::List,
                Action::Select => self.start_competition(),
                _ => {}
            },
            // Input is routed through the active quiz while participating.
            CompetitionView::Participate => {}
            CompetitionView::Leaderboard => {
                if matches!(action, Action::Select | Action::Back) {
                    self.state.competition.view = CompetitionView::List;
                    self.state.competition.results = None;
                }
            }
        }
    }

    fn start_competition(&mut self) {
        let Some(comp) = self.state.competitions.get(self.state.competition.selected) else {
            return;
        };
        let id = comp.id;
        let questions = mock_questions(comp.question_count);
        info!(competition = %comp.name, "competition started");

        self.state.quiz = Some(QuizState::new(QuizKind::Competition(id), questions));
        self.state.competition.started_at = Some(Instant::now());
        self.state.competition.view = CompetitionView::Participate;
    }

    fn submit_competition(&mut self) {
        let (competition_id, score) = match self.state.quiz.as_ref() {
            Some(quiz) => match quiz.kind {
                QuizKind::Competition(id) => (id, quiz.score() as u32),
                _ => return,
            },
            None => return,
        };

        let elapsed = COMPETITION_SECONDS - self.state.competition.remaining_seconds();
        let user = Participant {
            username: self.state.progress.display_name().to_string(),
            score,
            level: self.state.progress.unlocked_level(),
            completed_seconds: elapsed as u32,
        };

        let roster: Vec<Participant> = self
            .state
            .competitions
            .iter()
            .find(|c| c.id == competition_id)
            .map(|c| c.participants.clone())
            .unwrap_or_default();

        let rows = competition::build_leaderboard(&roster, user);
        let rank = user_rank(&rows);
        info!(competition_id, score, rank = ?rank, "competition submitted");

        self.state.competition.results =
            Some(CompetitionResults { competition_id, score, rank, rows });
        self.state.quiz = None;
        self.state.competition.started_at = None;
        self.state.competition.view = CompetitionView::Leaderboard;
    }

    // --- command line ---

    fn handle_command_line_key(&mut self, key: KeyCode) -> Result<bool> {
        match key {
            KeyCode::Esc => self.state.command_line.exit_input_mode(),
            KeyCode::Enter => {
                let input = self.state.command_line.input.value.clone();
                self.state.command_line.add_to_history(input.clone());
                self.state.command_line.exit_input_mode();
                return self.execute_command(&input);
            }
            KeyCode::Char(c) => self.state.command_line.input.insert_char(c),
            KeyCode::Backspace => self.state.command_line.input.delete_char(),
            KeyCode::Delete => self.state.command_line.input.delete_char_forward(),
            KeyCode::Left => self.state.command_line.input.move_left(),
            KeyCode::Right => self.state.command_line.input.move_right(),
            KeyCode::Home => self.state.command_line.input.move_start(),
            KeyCode::End => self.state.command_line.input.move_end(),
            KeyCode::Up => self.state.command_line.history_up(),
            KeyCode::Down => self.state.command_line.history_down(),
            _ => {}
        }
        Ok(false)
    }

    fn execute_command(&mut self, input: &str) -> Result<bool> {
        match parse_command(input) {
            ParseResult::Ok(Command::Quit) => return Ok(true),
            ParseResult::Ok(Command::Logout) => {
                if self.state.screen == Screen::Dashboard {
                    self.logout();
                } else {
                    self.state.command_line.set_error("Not signed in to a dashboard session");
                }
            }
            ParseResult::Ok(Command::Home) => match self.state.screen {
                // Leaving the dashboard for home IS logging out.
                Screen::Dashboard => self.logout(),
                _ => self.state.navigate(Screen::Home),
            },
            ParseResult::Ok(Command::Tab(tab)) => {
                if self.state.screen == Screen::Dashboard && self.state.quiz.is_none() {
                    self.switch_tab(tab);
                } else {
                    self.state.command_line.set_error("Tabs are available from the dashboard");
                }
            }
            ParseResult::Ok(Command::Theme(name)) => self.set_theme(&name),
            ParseResult::Ok(Command::Help) => {
                self.state.command_line.set_message(
                    "j/k move | Enter select | Esc back | Tab cycle tabs | 1-6 jump | :quit exit",
                );
            }
            ParseResult::Ok(Command::Nop) => {}
            ParseResult::UnknownCommand(cmd) => {
                self.state.command_line.set_error(format!("Unknown command: {cmd}"));
            }
            ParseResult::MissingArgument(cmd) => {
                self.state.command_line.set_error(format!("{cmd} requires an argument"));
            }
        }
        Ok(false)
    }

    fn set_theme(&mut self, name: &str) {
        let normalized = name.to_lowercase();
        if !Theme::available().contains(&normalized.as_str()) {
            self.state.command_line.set_error(format!(
                "Unknown theme '{name}' (available: {})",
                Theme::available().join(", ")
            ));
            return;
        }

        self.config.theme = normalized;
        if let Err(e) = self.config.save() {
            warn!("Failed to save config: {e:#}");
        }
        self.state.command_line.set_message(format!("Theme set to {}", self.config.theme));
    }

    fn logout(&mut self) {
        let name = self.state.progress.display_name().to_string();
        self.state.progress.deauthenticate();
        self.state.reset_session_views();
        self.state.navigate(Screen::Home);
        self.state.home_animation =
            if self.config.animation { HomeAnimation::default() } else { HomeAnimation::finished() };
        info!(user = %name, "logged out");
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
