//! Runtime configuration, loaded from an optional TOML file.
//!
//! Every field has a default so an empty file (or no file at all) yields a
//! working desktop.

use std::path::Path;

use serde::Deserialize;

use crate::error::{FolioError, Result};
use crate::geometry::{Point, Size};

/// Smallest window the window manager will honor.
pub const MIN_WINDOW_SIZE: Size = Size::new(400, 300);

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Theme preset id selected at start-up.
    pub theme: String,
    /// Login name shown by `whoami` and on the minimized affordance.
    pub user: String,
    /// Initial terminal window geometry.
    pub window: WindowConfig,
    /// Screen area a maximized window fills.
    pub viewport: ViewportConfig,
    /// Live command endpoints.
    pub fetch: FetchConfig,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            theme: "powershell".to_string(),
            user: "siddharth".to_string(),
            window: WindowConfig::default(),
            viewport: ViewportConfig::default(),
            fetch: FetchConfig::default(),
        }
    }
}

/// Initial window placement.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 800,
            height: 500,
        }
    }
}

impl WindowConfig {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Configured size, clamped to [`MIN_WINDOW_SIZE`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height).at_least(MIN_WINDOW_SIZE)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl ViewportConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// HTTP settings for commands whose output comes from the network.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    pub joke_url: String,
    pub waifu_url: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            joke_url: "https://v2.jokeapi.dev/joke/Any".to_string(),
            waifu_url: "https://api.waifu.pics/sfw/waifu".to_string(),
        }
    }
}

impl FolioConfig {
    /// Parse a configuration document.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)?;
        if config.fetch.timeout_secs == 0 {
            return Err(FolioError::Config(
                "fetch.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = FolioConfig::from_toml("").unwrap();
        assert_eq!(cfg.theme, "powershell");
        assert_eq!(cfg.user, "siddharth");
        assert_eq!(cfg.window.size(), Size::new(800, 500));
        assert_eq!(cfg.window.position(), Point::new(0, 0));
        assert_eq!(cfg.viewport.size(), Size::new(1280, 720));
        assert_eq!(cfg.fetch.timeout_secs, 10);
        assert!(cfg.fetch.joke_url.contains("jokeapi"));
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let cfg = FolioConfig::from_toml(
            r#"
theme = "matrix"

[window]
width = 1024

[fetch]
timeout_secs = 3
"#,
        )
        .unwrap();
        assert_eq!(cfg.theme, "matrix");
        assert_eq!(cfg.window.width, 1024);
        assert_eq!(cfg.window.height, 500);
        assert_eq!(cfg.fetch.timeout_secs, 3);
        assert!(cfg.fetch.waifu_url.contains("waifu.pics"));
    }

    #[test]
    fn undersized_window_is_clamped() {
        let cfg = FolioConfig::from_toml("[window]\nwidth = 10\nheight = 10\n").unwrap();
        assert_eq!(cfg.window.size(), MIN_WINDOW_SIZE);
    }

    #[test]
    fn invalid_document_is_parse_error() {
        let err = FolioConfig::from_toml("theme = [").unwrap_err();
        assert!(matches!(err, FolioError::TomlParse(_)));
        assert!(format!("{err}").starts_with("TOML parse error"));
    }

    #[test]
    fn zero_timeout_is_config_error() {
        let err = FolioConfig::from_toml("[fetch]\ntimeout_secs = 0\n").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
        assert!(format!("{err}").contains("timeout_secs"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = FolioConfig::load(Path::new("/nonexistent/folio.toml")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
