//! Presenter application: owns the tick schedule and the terminal loop.
//!
//! Each monitored patient has a fully independent session; the presenter
//! guarantees at most one tick pipeline runs at a time by being the only
//! caller, on a single thread.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::adapters::{export, SyntheticVitals};
use crate::application::MonitorSession;
use crate::config::MonitorConfig;

use super::ui;

const PATIENT_LABELS: [&str; 3] = ["Patient A", "Patient B", "Patient C"];

/// Main application state.
pub struct App {
    sessions: Vec<MonitorSession<SyntheticVitals>>,
    selected: usize,
    paused: bool,
    tick_every: Duration,
    last_tick: Option<Instant>,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    /// Create the application with one session per monitored patient.
    ///
    /// # Errors
    /// Returns error if the configuration is invalid.
    pub fn new(config: &MonitorConfig) -> Result<Self> {
        config.validate()?;

        let sessions = PATIENT_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let source = match config.source_seed {
                    Some(seed) => SyntheticVitals::with_seed(seed.wrapping_add(i as u64)),
                    None => SyntheticVitals::from_entropy(),
                };
                MonitorSession::new(*label, source, config)
            })
            .collect();

        Ok(Self {
            sessions,
            selected: 0,
            paused: false,
            tick_every: Duration::from_millis(config.tick_interval_ms),
            last_tick: None,
            status: None,
            should_quit: false,
        })
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            if self.tick_due() {
                self.tick_all();
            }

            terminal.draw(|f| ui::render(f, self))?;

            // Short poll to stay responsive between ticks.
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

    fn tick_due(&self) -> bool {
        if self.paused {
            return false;
        }
        match self.last_tick {
            Some(at) => at.elapsed() >= self.tick_every,
            None => true,
        }
    }

    fn tick_all(&mut self) {
        for session in &mut self.sessions {
            if let Err(e) = session.tick() {
                tracing::warn!(patient = session.label(), "tick failed: {e}");
                self.status = Some(format!("{}: tick failed ({e})", session.label()));
            }
        }
        self.last_tick = Some(Instant::now());
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Right => {
                self.selected = (self.selected + 1) % self.sessions.len();
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.selected = (self.selected + self.sessions.len() - 1) % self.sessions.len();
            }
            KeyCode::Char('p') | KeyCode::Char(' ') => {
                self.paused = !self.paused;
                self.status = Some(if self.paused {
                    "Monitoring paused".to_string()
                } else {
                    "Monitoring resumed".to_string()
                });
            }
            KeyCode::Char('r') => {
                self.tick_all();
                self.status = Some("Refreshed".to_string());
            }
            KeyCode::Char('e') => self.export_selected(),
            _ => {}
        }
    }

    fn export_selected(&mut self) {
        let session = &self.sessions[self.selected];
        let file = PathBuf::from(format!(
            "{}.csv",
            session.label().to_lowercase().replace(' ', "_")
        ));

        self.status = Some(match export::export_to_file(session.store(), &file) {
            Ok(()) => format!("Exported {} ticks to {}", session.store().len(), file.display()),
            Err(e) => format!("Export failed: {e}"),
        });
    }

    /// All sessions, for the patient tab bar.
    pub(super) fn sessions(&self) -> &[MonitorSession<SyntheticVitals>] {
        &self.sessions
    }

    /// The session currently on screen.
    pub(super) fn selected_session(&self) -> &MonitorSession<SyntheticVitals> {
        &self.sessions[self.selected]
    }

    pub(super) fn selected_index(&self) -> usize {
        self.selected
    }

    pub(super) fn is_paused(&self) -> bool {
        self.paused
    }

    pub(super) fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
