//! Main TUI application.

use std::io;

use chrono::Local;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::error::AttendanceError;
use crate::model::Status;
use crate::session::{Command, Outcome, Session};

use super::event::{Event, next_event};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::{AppState, InputMode, NoticeKind};

/// Main TUI application.
pub struct App {
    session: Session,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App over an opened session.
    pub fn new(session: Session) -> Self {
        let state = AppState::new(session.table().len());
        Self {
            session,
            state,
            should_quit: false,
        }
    }

    /// Shows `err` as the first notification, e.g. a roster that failed to load.
    pub fn with_startup_error(mut self, err: Option<AttendanceError>) -> Self {
        if let Some(e) = err {
            self.state
                .notify(NoticeKind::Error, format!("Error loading student names: {}", e));
        }
        self
    }

    /// Runs the TUI application.
    pub fn run(mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Restore terminal even if the loop failed
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        info!(students = self.session.table().len(), "attendance session started");
        while !self.should_quit {
            let today = Local::now().date_naive();
            terminal.draw(|frame| render(frame, &mut self.state, self.session.table(), today))?;

            match next_event()? {
                Event::Key(key) => {
                    let action = handle_key(&mut self.state, key);
                    self.dispatch(action);
                }
                Event::Resize => {}
            }
        }
        info!("attendance session closed");
        Ok(())
    }

    /// Turns a key action into a session command and reports its outcome.
    fn dispatch(&mut self, action: KeyAction) {
        let command = match action {
            KeyAction::None => return,
            KeyAction::Quit => {
                self.should_quit = true;
                return;
            }
            KeyAction::AddStudent => Command::AddStudent(self.state.name_input.clone()),
            KeyAction::MarkPresent => Command::Mark(Status::Present),
            KeyAction::MarkAbsent => Command::Mark(Status::Absent),
            KeyAction::Save => Command::Save,
        };

        match self.session.execute(command, &self.state.selected) {
            Ok(outcome) => self.apply_outcome(outcome),
            Err(e) => self.state.notify(NoticeKind::Error, e.to_string()),
        }
    }

    fn apply_outcome(&mut self, outcome: Outcome) {
        match &outcome {
            Outcome::Added(_) => {
                self.state.name_input.clear();
                self.state.input_mode = InputMode::Normal;
                self.state.set_row_count(self.session.table().len());
                self.state.end();
                self.state.status_message = Some(outcome.message());
            }
            Outcome::Marked { .. } => {
                self.state.status_message = Some(outcome.message());
            }
            Outcome::Saved { .. } => {
                self.state.notify(NoticeKind::Info, outcome.message());
            }
        }
    }
}
