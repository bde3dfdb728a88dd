//! Error types for folio-os.

use std::io;

/// Errors produced by the folio crates.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("theme error: {0}")]
    Theme(String),

    #[error("command error: {0}")]
    Command(String),

    #[error("fetch error: {0}")]
    Fetch(String),

    #[error("window manager error: {0}")]
    Wm(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
