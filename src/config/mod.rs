//! Configuration module for kaomoji
//!
//! Manages application configuration: the catalog data file, clipboard
//! strategy chain, and layout threshold. Configuration is stored in the
//! user's config directory (`~/.config/kaomoji/config.toml` on Linux).

use crate::clipboard::ClipboardCommand;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Terminal width at or below which the compact layout is used
pub const DEFAULT_COMPACT_WIDTH: u16 = 100;

const fn default_true() -> bool {
    true
}

const fn default_compact_width() -> u16 {
    DEFAULT_COMPACT_WIDTH
}

/// Clipboard strategy chain settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClipboardSettings {
    /// Try the native system clipboard first
    #[serde(default = "default_true")]
    pub native: bool,

    /// External copy tools, in order (platform defaults when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<ClipboardCommand>>,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            native: true,
            commands: None,
        }
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct KaomojiConfig {
    /// Catalog JSON file (embedded catalog when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Width threshold for the compact (stacked) layout
    #[serde(default = "default_compact_width")]
    pub compact_width: u16,

    /// Clipboard chain
    #[serde(default)]
    pub clipboard: ClipboardSettings,
}

impl Default for KaomojiConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            quiet: false,
            compact_width: DEFAULT_COMPACT_WIDTH,
            clipboard: ClipboardSettings::default(),
        }
    }
}

impl KaomojiConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("kaomoji").join("config.toml"))
    }

    /// Load configuration from the user config file, creating a default one
    /// if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Override the data file (e.g. from `--data`)
    #[must_use]
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if data_file.is_some() {
            self.data_file = data_file;
        }
        self
    }

    /// Where the interactive session writes its log
    #[must_use]
    pub fn log_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|dir| dir.join("kaomoji").join("kaomoji.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KaomojiConfig::default();
        assert!(config.data_file.is_none());
        assert!(!config.quiet);
        assert_eq!(config.compact_width, DEFAULT_COMPACT_WIDTH);
        assert!(config.clipboard.native);
        assert!(config.clipboard.commands.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = KaomojiConfig {
            data_file: Some(PathBuf::from("/srv/kaomoji.json")),
            quiet: true,
            compact_width: 80,
            clipboard: ClipboardSettings {
                native: false,
                commands: Some(vec![ClipboardCommand::new("xclip", &["-selection", "clipboard"])]),
            },
        };
        config.save_to(&path).unwrap();

        let loaded = KaomojiConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = true\n").unwrap();

        let loaded = KaomojiConfig::load_from(&path).unwrap();
        assert!(loaded.quiet);
        assert_eq!(loaded.compact_width, DEFAULT_COMPACT_WIDTH);
        assert!(loaded.clipboard.native);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "compact_width = \"wide\"\n").unwrap();

        assert!(KaomojiConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_with_data_file_override() {
        let config = KaomojiConfig {
            data_file: Some(PathBuf::from("a.json")),
            ..KaomojiConfig::default()
        };

        let kept = config.clone().with_data_file(None);
        assert_eq!(kept.data_file, Some(PathBuf::from("a.json")));

        let replaced = config.with_data_file(Some(PathBuf::from("b.json")));
        assert_eq!(replaced.data_file, Some(PathBuf::from("b.json")));
    }
}
