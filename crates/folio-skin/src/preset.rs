//! The closed set of built-in theme presets.

use std::fmt;
use std::str::FromStr;

use folio_types::error::{FolioError, Result};

use crate::theme::Theme;

/// A named built-in theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    #[default]
    PowerShell,
    Cmd,
    Matrix,
    Ubuntu,
    Dracula,
}

impl ThemePreset {
    /// All presets, in the order the theme picker lists them.
    pub const ALL: [ThemePreset; 5] = [
        ThemePreset::PowerShell,
        ThemePreset::Cmd,
        ThemePreset::Matrix,
        ThemePreset::Ubuntu,
        ThemePreset::Dracula,
    ];

    /// Stable identifier used by selectors and config files.
    pub fn id(self) -> &'static str {
        match self {
            ThemePreset::PowerShell => "powershell",
            ThemePreset::Cmd => "cmd",
            ThemePreset::Matrix => "matrix",
            ThemePreset::Ubuntu => "ubuntu",
            ThemePreset::Dracula => "dracula",
        }
    }

    fn source(self) -> &'static str {
        match self {
            ThemePreset::PowerShell => include_str!("../../../skins/powershell.toml"),
            ThemePreset::Cmd => include_str!("../../../skins/cmd.toml"),
            ThemePreset::Matrix => include_str!("../../../skins/matrix.toml"),
            ThemePreset::Ubuntu => include_str!("../../../skins/ubuntu.toml"),
            ThemePreset::Dracula => include_str!("../../../skins/dracula.toml"),
        }
    }

    /// Parse the embedded TOML for this preset.
    pub fn load(self) -> Result<Theme> {
        log::debug!("Loading theme preset '{}'", self.id());
        Theme::from_toml(self, self.source())
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ThemePreset {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ThemePreset::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let known: Vec<&str> = ThemePreset::ALL.iter().map(|p| p.id()).collect();
                FolioError::Theme(format!(
                    "unknown preset '{wanted}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}
