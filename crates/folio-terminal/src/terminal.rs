//! The terminal: dispatcher, editor and theme binding over one session.

use std::sync::Arc;

use time::OffsetDateTime;

use folio_skin::Theme;
use folio_types::input::Key;

use crate::cells::{CellSpawner, CellState, CellTable, CellUpdate};
use crate::editor::{self, KeyOutcome};
use crate::interpreter::{CommandOutput, CommandRegistry, Environment, normalize};
use crate::session::{LineContent, LineId, LineKind, Session};

/// Names handled by the dispatcher itself, before registry lookup.
const CLEAR_ALIASES: [&str; 2] = ["clear", "cls"];

fn local_now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// The single terminal instance.
pub struct Terminal {
    registry: Arc<CommandRegistry>,
    session: Session,
    cells: CellTable,
    theme: Theme,
    user: String,
    spawner: Box<dyn CellSpawner>,
    clock: fn() -> OffsetDateTime,
}

impl Terminal {
    /// Create a terminal showing `theme`'s welcome banner.
    pub fn new(
        registry: Arc<CommandRegistry>,
        theme: Theme,
        user: impl Into<String>,
        spawner: Box<dyn CellSpawner>,
    ) -> Self {
        let mut session = Session::new();
        session.reset(&theme.welcome);
        Self {
            registry,
            session,
            cells: CellTable::default(),
            theme,
            user: user.into(),
            spawner,
            clock: local_now,
        }
    }

    /// Replace the wall clock used for command environments.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> OffsetDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// State of a mounted cell.
    pub fn cell(&self, id: LineId) -> Option<&CellState> {
        self.cells.get(id)
    }

    /// Number of cells currently mounted.
    pub fn mounted_cells(&self) -> usize {
        self.cells.len()
    }

    /// Run a raw line as if typed at the prompt.
    pub fn submit(&mut self, raw: &str) {
        self.session.push_text(LineKind::Input, raw);

        let command = normalize(raw);
        if command.is_empty() {
            return;
        }
        log::debug!("submit '{command}'");
        self.session.record_history(command.clone());

        if CLEAR_ALIASES.contains(&command.as_str()) {
            self.clear_screen();
            return;
        }

        let Some(cmd) = self.registry.lookup(&command) else {
            self.session.push_text(
                LineKind::Error,
                format!("Command not found: {command}. Type 'help' for available commands."),
            );
            return;
        };

        let env = Environment {
            registry: &self.registry,
            user: &self.user,
            now: (self.clock)(),
        };
        match cmd.execute(&env) {
            Ok(CommandOutput::Text(text)) => {
                self.session.push_text(LineKind::Output, text);
            }
            Ok(CommandOutput::Rich(block)) => {
                self.session.push(LineKind::Output, LineContent::Rich(block));
            }
            Ok(CommandOutput::Async(kind)) => {
                let cell = self.session.push(LineKind::Output, LineContent::Cell);
                self.cells.mount(cell, kind);
                self.spawner.spawn(cell, kind);
            }
            Ok(CommandOutput::Clear) => self.clear_screen(),
            Err(e) => {
                log::debug!("'{command}' failed: {e}");
                self.session.push_text(LineKind::Error, e.to_string());
            }
        }
    }

    /// Feed one key press to the input editor.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Char(ch) => editor::insert_char(&mut self.session, ch),
            Key::Backspace => editor::backspace(&mut self.session),
            Key::Up => editor::history_up(&mut self.session),
            Key::Down => editor::history_down(&mut self.session),
            Key::Tab => editor::tab_complete(&mut self.session, &self.registry),
            Key::CtrlL => {
                self.clear_screen();
                KeyOutcome::Cleared
            }
            Key::Enter => {
                let line = editor::take_input(&mut self.session);
                self.submit(&line);
                KeyOutcome::Submitted
            }
        }
    }

    /// Wipe the scrollback and unmount every cell. History is kept.
    pub fn clear_screen(&mut self) {
        self.session.clear_scrollback();
        self.cells.unmount_all();
    }

    /// Switch theme and reset the scrollback to its welcome banner.
    /// Selecting the active preset again changes nothing.
    pub fn set_theme(&mut self, theme: Theme) {
        if theme.preset == self.theme.preset {
            log::debug!("Theme {} already active", theme.preset);
            return;
        }
        log::info!("Theme set to {}", theme.preset);
        self.theme = theme;
        self.cells.unmount_all();
        self.session.reset(&self.theme.welcome);
    }

    /// Apply a finished fetch. Returns false if the update was stale.
    pub fn apply_cell_update(&mut self, update: CellUpdate) -> bool {
        self.cells.settle(update)
    }
}
