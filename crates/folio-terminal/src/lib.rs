//! Terminal core.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. `Terminal::submit` echoes the
//! raw line, records history, resolves the command and appends its output
//! to the session scrollback. Commands whose output comes from the network
//! mount a live cell that occupies its scrollback slot immediately and
//! resolves later.

pub mod cells;
mod commands;
mod editor;
mod fun_commands;
mod interpreter;
pub mod rich;
pub mod session;
mod terminal;

/// Live cell lifecycle, payloads and the spawner seam.
pub use cells::{CellPayload, CellSpawner, CellState, CellUpdate, FetchKind, Joke, TokioCellSpawner};
/// Register the portfolio command set into a registry.
pub use commands::register_builtins;
/// Outcome of a key press.
pub use editor::KeyOutcome;
/// Register network-backed commands (joke, waifu).
pub use fun_commands::register_fun_commands;
/// A single executable command.
pub use interpreter::Command;
/// Output produced by a command (text, rich block, live cell, clear).
pub use interpreter::CommandOutput;
/// Registry of available commands.
pub use interpreter::CommandRegistry;
/// Read-only context passed to every command.
pub use interpreter::Environment;
/// Structured command output.
pub use rich::{Emphasis, RichBlock, Span};
/// Scrollback and input-line state.
pub use session::{LineContent, LineId, LineKind, ScrollbackLine, Session};
/// Dispatcher + editor + theme binding over one session.
pub use terminal::Terminal;
