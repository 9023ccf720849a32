//! Editor configuration.
//!
//! Every section is `#[serde(default)]`, so a config file only needs the
//! keys it wants to change and a missing file is simply the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main editor configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Main window geometry and title
    pub window: WindowConfig,

    /// Editing widget settings applied to every tab
    pub editor: EditorConfig,

    /// File handling settings
    pub files: FileConfig,
}

impl Config {
    /// Loads config from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults; an unreadable or malformed one
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Ok(path) => path,
                Err(ConfigError::NoConfigDir) => return Ok(Self::default()),
                Err(e) => return Err(e),
            },
        };

        if path.exists() {
            Self::load_from(&path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("quillpad").join("config.toml"))
    }
}

/// Main window configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    /// Initial position of the top-left corner
    pub x: f32,
    pub y: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Code Editor".to_string(),
            width: 800.0,
            height: 600.0,
            x: 100.0,
            y: 100.0,
        }
    }
}

/// Editing widget configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Lexer used for new, untitled tabs
    pub default_language: String,

    /// Font size in points
    pub font_size: f32,

    /// Show the line-number gutter
    pub line_numbers: bool,

    /// Gutter width in pixels
    pub gutter_width: f32,

    /// Caret colour as 0xRRGGBB
    pub caret_color: u32,
}

impl EditorConfig {
    /// Splits `caret_color` into its red, green and blue bytes.
    pub fn caret_rgb(&self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.caret_color.to_be_bytes();
        (r, g, b)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_language: "python".to_string(),
            font_size: 14.0,
            line_numbers: true,
            gutter_width: 50.0,
            caret_color: 0x00FF00,
        }
    }
}

/// File handling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Extension appended to saved files that lack it (without the dot)
    pub save_extension: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            save_extension: "py".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.window.title, "Code Editor");
        assert_eq!(config.editor.default_language, "python");
        assert_eq!(config.files.save_extension, "py");
        assert_eq!(config.editor.caret_rgb(), (0x00, 0xFF, 0x00));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[editor]\ncaret_color = 0x336699\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.editor.caret_rgb(), (0x33, 0x66, 0x99));
        assert_eq!(config.editor.gutter_width, 50.0);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[editor\nfont_size = ").unwrap();

        assert!(matches!(Config::load(Some(&path)), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, config);
    }
}
