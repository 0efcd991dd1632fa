//! Main TUI application.
//!
//! Handles:
//! - Terminal setup and teardown
//! - Input event handling
//! - Prediction on explicit submission
//!
//! The loop is single-threaded: a submission runs the classifier and the
//! explainer to completion before the next frame is drawn.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::adapters::logistic::{LinearExplainer, LogisticModel};
use crate::application::{PredictionOutcome, PredictionService};
use crate::ports::{Classifier, Explainer};

use super::ui::{
    form::{render_feature_form, FeatureFormState},
    render_controls, render_disclaimer, render_header,
    result::{render_result_panel, ScreenState},
};

/// Terminal window title.
pub const WINDOW_TITLE: &str = "Surgical Risk System";

/// Default model artifact location.
pub const DEFAULT_MODEL_PATH: &str = "models/model.json";

/// Main application state
pub struct App<C = LogisticModel, E = LinearExplainer>
where
    C: Classifier,
    E: Explainer,
{
    /// Whether the app should quit
    should_quit: bool,

    /// Classifier and explainer, built once at startup
    service: PredictionService<C, E>,

    /// Stepper values
    form_state: FeatureFormState,

    /// Awaiting submission or showing the last result
    screen_state: ScreenState,
}

impl App {
    /// Create a new application with the model from `REOPRISK_MODEL_PATH`.
    ///
    /// The explainer is built here, next to the model, so a submission only
    /// pays for the per-record attribution.
    ///
    /// # Errors
    /// Returns error if the model cannot be loaded.
    pub fn new() -> Result<Self> {
        let model_path = std::env::var("REOPRISK_MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH));

        // Refuse to start without a usable model.
        let service = PredictionService::from_model_path(&model_path).map_err(|e| {
            anyhow!(
                "Failed to load model from {:?}: {}. Set REOPRISK_MODEL_PATH to a model.json file or a directory containing one.",
                model_path,
                e
            )
        })?;

        Ok(Self::with_service(service))
    }
}

impl<C, E> App<C, E>
where
    C: Classifier,
    E: Explainer,
{
    /// Create application with an injected service.
    pub fn with_service(service: PredictionService<C, E>) -> Self {
        Self {
            should_quit: false,
            service,
            form_state: FeatureFormState::default(),
            screen_state: ScreenState::AwaitingSubmission,
        }
    }

    #[must_use]
    pub fn screen_state(&self) -> &ScreenState {
        &self.screen_state
    }

    #[must_use]
    pub fn form_state(&self) -> &FeatureFormState {
        &self.form_state
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, SetTitle(WINDOW_TITLE))?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Draw the whole screen.
    pub fn draw(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Header
                Constraint::Min(0),    // Form and result
                Constraint::Length(2), // Controls
                Constraint::Length(2), // Disclaimer
            ])
            .split(f.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[1]);

        render_header(f, chunks[0]);
        render_feature_form(f, body[0], &self.form_state);
        render_result_panel(f, body[1], &self.screen_state);
        render_controls(f, chunks[2]);
        render_disclaimer(f, chunks[3]);
    }

    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let changed = match key {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
                false
            }
            KeyCode::Enter => {
                self.submit();
                false
            }
            KeyCode::Down | KeyCode::Tab => {
                self.form_state.next_field();
                false
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.form_state.prev_field();
                false
            }
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.form_state.increment()
            }
            KeyCode::Left | KeyCode::Char('-') => self.form_state.decrement(),
            KeyCode::Home => self.form_state.set_min(),
            KeyCode::End => self.form_state.set_max(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.form_state.reset(),
            KeyCode::Char(c) => self.form_state.input_char(c),
            _ => false,
        };

        // Editing any input hides the previous result.
        if changed {
            self.screen_state = ScreenState::AwaitingSubmission;
        }
    }

    fn submit(&mut self) {
        let outcome = match self.form_state.to_record() {
            Ok(record) => self.service.run(&record),
            Err(e) => {
                tracing::error!("Could not assemble record: {}", e);
                PredictionOutcome::Failed {
                    message: e.to_string(),
                }
            }
        };

        self.screen_state = ScreenState::ShowingResult(outcome);
    }
}
