//! Theme -- prompt, banner and color scheme for the terminal window.

use serde::Deserialize;

use folio_types::error::{FolioError, Result};

use crate::DEFAULT_WELCOME;
use crate::color::{Color, parse_hex_color};
use crate::preset::ThemePreset;

/// Resolved, read-only theme consumed by the terminal and renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Which preset this theme was loaded from.
    pub preset: ThemePreset,
    /// Human-readable preset name shown in the theme picker.
    pub name: String,
    /// Window title bar text.
    pub header: String,
    /// Prompt printed before every input line.
    pub prompt: String,
    /// Banner the scrollback is reset to when the theme is applied.
    pub welcome: String,
    pub palette: Palette,
}

/// Colors used when rendering scrollback lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    /// Input echo and plain output.
    pub text: Color,
    pub caret: Color,
    pub error: Color,
    pub success: Color,
    pub info: Color,
    /// Titles and accented spans in rich blocks.
    pub accent: Color,
    pub highlight: Color,
    /// Footers and loading affordances.
    pub muted: Color,
}

#[derive(Deserialize)]
struct ThemeFile {
    name: String,
    header: String,
    prompt: String,
    #[serde(default)]
    welcome: Option<String>,
    palette: PaletteFile,
}

#[derive(Deserialize)]
struct PaletteFile {
    background: String,
    text: String,
    caret: String,
    error: String,
    success: String,
    info: String,
    accent: String,
    highlight: String,
    muted: String,
}

impl PaletteFile {
    fn resolve(&self) -> Result<Palette> {
        Ok(Palette {
            background: color_field("background", &self.background)?,
            text: color_field("text", &self.text)?,
            caret: color_field("caret", &self.caret)?,
            error: color_field("error", &self.error)?,
            success: color_field("success", &self.success)?,
            info: color_field("info", &self.info)?,
            accent: color_field("accent", &self.accent)?,
            highlight: color_field("highlight", &self.highlight)?,
            muted: color_field("muted", &self.muted)?,
        })
    }
}

fn color_field(field: &str, value: &str) -> Result<Color> {
    parse_hex_color(value)
        .ok_or_else(|| FolioError::Theme(format!("palette.{field}: invalid color '{value}'")))
}

impl Theme {
    /// Parse a theme document for `preset`.
    pub fn from_toml(preset: ThemePreset, toml_str: &str) -> Result<Self> {
        let file: ThemeFile = toml::from_str(toml_str)
            .map_err(|e| FolioError::Theme(format!("{}.toml: {e}", preset.id())))?;
        let palette = file.palette.resolve()?;
        let welcome = file
            .welcome
            .unwrap_or_else(|| DEFAULT_WELCOME.to_string())
            .trim_end()
            .to_string();
        Ok(Self {
            preset,
            name: file.name,
            header: file.header,
            prompt: file.prompt,
            welcome,
            palette,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            preset: ThemePreset::PowerShell,
            name: "PowerShell".to_string(),
            header: "Windows PowerShell".to_string(),
            prompt: r"PS C:\Users\siddharth>".to_string(),
            welcome: DEFAULT_WELCOME.trim_end().to_string(),
            palette: Palette {
                background: Color::rgb(0x01, 0x24, 0x56),
                text: Color::WHITE,
                caret: Color::WHITE,
                error: Color::rgb(0xff, 0x55, 0x55),
                success: Color::rgb(0x50, 0xfa, 0x7b),
                info: Color::rgb(0x8b, 0xe9, 0xfd),
                accent: Color::rgb(0x8b, 0xe9, 0xfd),
                highlight: Color::rgb(0xf1, 0xfa, 0x8c),
                muted: Color::rgb(0x9a, 0xa5, 0xb8),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
name = "Test"
header = "Test Terminal"
prompt = "$"

[palette]
background = "#000000"
text = "#ffffff"
caret = "#ffffff"
error = "#ff0000"
success = "#00ff00"
info = "#00ffff"
accent = "#00ffff"
highlight = "#ffff00"
muted = "#808080"
"##;

    #[test]
    fn missing_welcome_uses_default_banner() {
        let theme = Theme::from_toml(ThemePreset::Cmd, MINIMAL).unwrap();
        assert_eq!(theme.welcome, DEFAULT_WELCOME.trim_end());
        assert_eq!(theme.palette.error, Color::rgb(255, 0, 0));
    }

    #[test]
    fn bad_color_names_the_field() {
        let doc = MINIMAL.replace("\"#ff0000\"", "\"red\"");
        let err = Theme::from_toml(ThemePreset::Cmd, &doc).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("palette.error"));
        assert!(msg.contains("red"));
    }

    #[test]
    fn missing_palette_is_error() {
        let err = Theme::from_toml(ThemePreset::Cmd, "name = \"x\"\nheader = \"x\"\nprompt = \"x\"")
            .unwrap_err();
        assert!(format!("{err}").contains("cmd.toml"));
    }

    #[test]
    fn matrix_has_custom_welcome() {
        let theme = ThemePreset::Matrix.load().unwrap();
        assert!(theme.welcome.starts_with("Wake up, Neo..."));
        assert_eq!(theme.palette.text, Color::rgb(0, 255, 0x41));
    }

    #[test]
    fn powershell_preset_matches_default() {
        let loaded = ThemePreset::PowerShell.load().unwrap();
        assert_eq!(loaded, Theme::default());
    }

    #[test]
    fn dracula_caret_differs_from_text() {
        let theme = ThemePreset::Dracula.load().unwrap();
        assert_eq!(theme.palette.caret, Color::rgb(0xbd, 0x93, 0xf9));
        assert_ne!(theme.palette.caret, theme.palette.text);
    }
}
