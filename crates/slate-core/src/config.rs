//! Notepad configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! Serde is Rust's standard for serialization/deserialization.
//! The `#[derive(Serialize, Deserialize)]` macro generates
//! code to convert structs to/from JSON, TOML, etc.
//!
//! `#[serde(default)]` uses Default::default() for missing fields,
//! so a config file only needs the keys it wants to change.
//!
//! The file is read once at startup and never written back; the theme
//! toggled from the settings page lasts for the session only.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::theme::ThemeMode;

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Editor behavior settings
    pub editor: EditorConfig,

    /// UI appearance settings
    pub ui: UiConfig,

    /// Search settings
    pub search: SearchConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config: {}", e);
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses config from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config.sanitized())
    }

    /// Loads from the default config path.
    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("slate").join("config.toml"))
    }

    /// Clamps out-of-range values to something usable.
    fn sanitized(mut self) -> Self {
        if !self.editor.font_size.is_finite() || self.editor.font_size < 1.0 {
            self.editor.font_size = EditorConfig::default().font_size;
        }
        if !self.editor.line_height.is_finite() || self.editor.line_height < 1.0 {
            self.editor.line_height = EditorConfig::default().line_height;
        }
        self.editor.undo_limit = self.editor.undo_limit.max(1);
        if !self.ui.gutter_padding.is_finite() || self.ui.gutter_padding < 0.0 {
            self.ui.gutter_padding = UiConfig::default().gutter_padding;
        }
        self
    }
}

/// Editor behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Font size in pixels at 100% zoom
    pub font_size: f32,

    /// Line height as a multiple of font size
    pub line_height: f32,

    /// Enable word wrapping
    pub word_wrap: bool,

    /// Open documents read-only
    pub read_only: bool,

    /// Undo history limit
    pub undo_limit: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_size: 15.0,
            line_height: 1.3,
            word_wrap: true,
            read_only: false,
            undo_limit: 100,
        }
    }
}

/// UI appearance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial theme mode
    pub theme: ThemeMode,

    /// Fixed horizontal padding of the gutter, in pixels
    pub gutter_padding: f32,

    /// Highlight the block containing the caret
    pub highlight_current_line: bool,

    /// How long notifications stay up, in milliseconds (0 keeps them until closed)
    pub notification_ms: u64,

    /// Initial window size
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            gutter_padding: 24.0,
            highlight_current_line: true,
            notification_ms: 3000,
            window_width: 900.0,
            window_height: 650.0,
        }
    }
}

/// Search configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Match letter case exactly
    pub case_sensitive: bool,
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

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.editor.font_size, 15.0);
        assert!(config.editor.word_wrap);
        assert!(!config.editor.read_only);
        assert_eq!(config.editor.undo_limit, 100);
        assert_eq!(config.ui.gutter_padding, 24.0);
        assert_eq!(config.ui.notification_ms, 3000);
        assert_eq!(config.ui.theme, ThemeMode::Light);
        assert!(!config.search.case_sensitive);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed = Config::parse(&toml).unwrap();
        assert_eq!(parsed.editor.font_size, config.editor.font_size);
        assert_eq!(parsed.ui.theme, config.ui.theme);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::parse(
            r#"
            [ui]
            theme = "dark"

            [search]
            case_sensitive = true
            "#,
        )
        .unwrap();

        assert_eq!(config.ui.theme, ThemeMode::Dark);
        assert!(config.search.case_sensitive);
        assert_eq!(config.ui.gutter_padding, 24.0);
        assert!(config.editor.word_wrap);
    }

    #[test]
    fn test_out_of_range_values_are_sanitized() {
        let config = Config::parse(
            r#"
            [editor]
            font_size = -3.0
            undo_limit = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.editor.font_size, 15.0);
        assert_eq!(config.editor.undo_limit, 1);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[editor]\nread_only = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.editor.read_only);

        assert!(matches!(
            Config::load_from(dir.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        assert!(matches!(
            Config::parse("editor = ["),
            Err(ConfigError::Parse(_))
        ));
    }
}
