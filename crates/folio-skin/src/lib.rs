//! Theme presets -- the visual personality of the terminal window.
//!
//! A theme is a TOML document naming the window header, the prompt string,
//! the welcome banner and a palette. The set of presets is closed: hosts
//! select one by id and the terminal consumes it read-only.

pub mod color;
pub mod preset;
pub mod theme;

pub use color::{Color, parse_hex_color};
pub use preset::ThemePreset;
pub use theme::{Palette, Theme};

/// Banner shown by presets that don't define their own.
pub const DEFAULT_WELCOME: &str = include_str!("../../../content/welcome.txt");

/// Resolve a preset id (case-insensitive) and load its theme.
pub fn resolve_theme(id: &str) -> folio_types::error::Result<Theme> {
    let preset: ThemePreset = id.parse()?;
    preset.load()
}
