//! The desktop: the terminal window, its window manager and the icons that
//! drive it from outside.

use folio_skin::{ThemePreset, resolve_theme};
use folio_terminal::{CellUpdate, Terminal};
use folio_types::error::{FolioError, Result};
use folio_types::geometry::Point;
use folio_types::input::{InputEvent, Key};
use folio_wm::{WindowManager, WindowMode, WmEvent, WmOutcome};

use crate::meta::{HostInput, META_HELP, MetaCommand};

/// A desktop shortcut that runs a terminal command on double-click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopIcon {
    pub label: &'static str,
    pub command: &'static str,
}

pub const ICONS: [DesktopIcon; 6] = [
    DesktopIcon {
        label: "About Me",
        command: "about",
    },
    DesktopIcon {
        label: "Projects",
        command: "projects",
    },
    DesktopIcon {
        label: "Skills",
        command: "skills",
    },
    DesktopIcon {
        label: "Experience",
        command: "experience",
    },
    DesktopIcon {
        label: "Education",
        command: "education",
    },
    DesktopIcon {
        label: "Recycle Bin",
        command: "clear",
    },
];

/// Find an icon by label or by the command it runs.
pub fn find_icon(name: &str) -> Option<&'static DesktopIcon> {
    let name = name.trim();
    ICONS
        .iter()
        .find(|i| i.label.eq_ignore_ascii_case(name) || i.command.eq_ignore_ascii_case(name))
}

/// What the host should do after handling a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Redraw,
    /// Redraw and show a host message under the window.
    Notice(String),
    Quit,
}

pub struct Desktop {
    pub terminal: Terminal,
    pub wm: WindowManager,
    /// Whether the terminal's input field has keyboard focus.
    pub focused: bool,
}

impl Desktop {
    pub fn new(terminal: Terminal, wm: WindowManager) -> Self {
        Self {
            terminal,
            wm,
            focused: true,
        }
    }

    /// Label of the taskbar button shown while minimized.
    pub fn minimized_label(&self) -> String {
        format!("Terminal ({}@Portfolio)", self.terminal.user())
    }

    /// Run a command on behalf of something outside the terminal (an icon).
    /// Restores a minimized window first and gives the input focus back.
    pub fn invoke_external(&mut self, command: &str) {
        if self.wm.restore() == WmOutcome::Changed {
            log::debug!("Restored terminal for external command");
        }
        self.terminal.submit(command);
        self.focused = true;
    }

    pub fn apply_cell_update(&mut self, update: CellUpdate) -> bool {
        self.terminal.apply_cell_update(update)
    }

    pub fn handle(&mut self, input: HostInput) -> Result<Reply> {
        match input {
            HostInput::Line(text) => self.type_line(&text),
            HostInput::Meta(cmd) => self.meta(cmd),
        }
    }

    fn ensure_interactive(&self) -> Result<()> {
        if self.wm.is_interactive() {
            Ok(())
        } else {
            Err(FolioError::Wm(format!(
                "{} is minimized (:restore to reopen)",
                self.minimized_label()
            )))
        }
    }

    /// Type `text` over the current input buffer and press Enter.
    fn type_line(&mut self, text: &str) -> Result<Reply> {
        self.ensure_interactive()?;
        if !text.is_empty() {
            while !self.terminal.session().input().is_empty() {
                self.terminal.handle_key(Key::Backspace);
            }
            for ch in text.chars() {
                self.terminal.handle_key(Key::Char(ch));
            }
        }
        self.terminal.handle_key(Key::Enter);
        Ok(Reply::Redraw)
    }

    fn key(&mut self, key: Key) -> Result<Reply> {
        self.ensure_interactive()?;
        self.terminal.handle_key(key);
        Ok(Reply::Redraw)
    }

    fn gesture(&mut self, start: WmEvent, to: Point, end: WmEvent) -> Result<Reply> {
        let started = self.wm.apply(start);
        let moved = match start {
            WmEvent::DragStart(_) => self.wm.apply(WmEvent::DragMove(to)),
            _ => self.wm.apply(WmEvent::ResizeMove(to)),
        };
        self.wm.apply(end);
        if started == WmOutcome::Ignored && moved == WmOutcome::Ignored {
            return Ok(Reply::Notice(format!(
                "Window is {:?}; drag and resize need a normal window",
                self.wm.mode()
            )));
        }
        Ok(Reply::Redraw)
    }

    fn meta(&mut self, cmd: MetaCommand) -> Result<Reply> {
        match cmd {
            MetaCommand::Theme(id) => {
                let theme = resolve_theme(&id)?;
                self.terminal.set_theme(theme);
                Ok(Reply::Redraw)
            }
            MetaCommand::Themes => {
                let ids: Vec<&str> = ThemePreset::ALL.iter().map(|p| p.id()).collect();
                Ok(Reply::Notice(format!(
                    "Themes: {} (current: {})",
                    ids.join(", "),
                    self.terminal.theme().preset
                )))
            }
            MetaCommand::Minimize => {
                self.wm.minimize();
                self.focused = false;
                Ok(Reply::Redraw)
            }
            MetaCommand::Restore => {
                self.wm.restore();
                self.focused = true;
                Ok(Reply::Redraw)
            }
            MetaCommand::Maximize => {
                if self.wm.toggle_maximize() == WmOutcome::Ignored {
                    return Ok(Reply::Notice("Restore the window first".to_string()));
                }
                Ok(Reply::Redraw)
            }
            MetaCommand::Drag(from, to) => {
                self.gesture(WmEvent::DragStart(from), to, WmEvent::DragEnd)
            }
            MetaCommand::Resize(from, to) => {
                self.gesture(WmEvent::ResizeStart(from), to, WmEvent::ResizeEnd)
            }
            MetaCommand::Click(at) => {
                let was = self.wm.mode();
                self.wm.handle_input(&InputEvent::PointerDown(at));
                self.wm.handle_input(&InputEvent::PointerUp);
                if was == WindowMode::Minimized && self.wm.mode() == WindowMode::Normal {
                    self.focused = true;
                }
                Ok(Reply::Redraw)
            }
            MetaCommand::Icons => {
                let icons: Vec<String> = ICONS
                    .iter()
                    .map(|i| format!("  {:<12} -> {}", i.label, i.command))
                    .collect();
                Ok(Reply::Notice(format!("Desktop icons:\n{}", icons.join("\n"))))
            }
            MetaCommand::Open(name) => {
                let icon = find_icon(&name)
                    .ok_or_else(|| FolioError::Command(format!("no desktop icon '{name}'")))?;
                self.invoke_external(icon.command);
                Ok(Reply::Redraw)
            }
            MetaCommand::Window => Ok(Reply::Notice(self.window_summary())),
            MetaCommand::Up => self.key(Key::Up),
            MetaCommand::Down => self.key(Key::Down),
            MetaCommand::Tab(prefix) => {
                self.ensure_interactive()?;
                for ch in prefix.chars() {
                    self.terminal.handle_key(Key::Char(ch));
                }
                self.key(Key::Tab)
            }
            MetaCommand::Cls => self.key(Key::CtrlL),
            MetaCommand::Help => Ok(Reply::Notice(META_HELP.to_string())),
            MetaCommand::Quit => Ok(Reply::Quit),
        }
    }

    pub fn window_summary(&self) -> String {
        let pos = self.wm.position();
        let size = self.wm.size();
        let mode = match self.wm.mode() {
            WindowMode::Normal => "normal",
            WindowMode::Minimized => "minimized",
            WindowMode::Maximized => "maximized",
        };
        format!(
            "Window {mode} at ({}, {}) size {}x{}",
            pos.x, pos.y, size.width, size.height
        )
    }
}
