//! Editor configuration, persisted as TOML.

use std::path::{Path, PathBuf};

use lif_model::Layout;
use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};

/// Editor configuration.
///
/// Every section falls back to its defaults when missing from the file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Undo/redo settings.
    pub history: HistorySettings,

    /// Layout created for a new, empty document.
    pub default_layout: DefaultLayoutSettings,

    /// Export settings.
    pub export: ExportSettings,
}

impl EditorConfig {
    /// Load the config from the default path, falling back to defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load the config from a specific path.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(EditorError::ConfigIo {
                    operation: "read",
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content).map_err(|source| EditorError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save the config to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| EditorError::ConfigIo {
                operation: "create directory for",
                path: path.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|source| EditorError::ConfigSerialize { source })?;
        std::fs::write(path, content).map_err(|source| EditorError::ConfigIo {
            operation: "write",
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "vda5050", "lif-studio")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("lif-studio.toml"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of snapshots kept for undo.
    pub capacity: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            capacity: crate::history::DEFAULT_HISTORY_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultLayoutSettings {
    pub id: String,
    pub name: String,
    pub version: String,
    pub level_id: String,
}

impl Default for DefaultLayoutSettings {
    fn default() -> Self {
        Self {
            id: "entry".to_string(),
            name: "Entry".to_string(),
            version: "1.0.0".to_string(),
            level_id: "1".to_string(),
        }
    }
}

impl DefaultLayoutSettings {
    pub fn to_layout(&self) -> Layout {
        let mut layout = Layout::new(self.id.clone(), self.name.clone());
        layout.layout_version = self.version.clone();
        layout.layout_level_id = self.level_id.clone();
        layout
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Include background images in LIF exports.
    pub include_background: bool,

    /// Stamp `exportTimestamp` with the current time on export.
    pub touch_timestamp: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            include_background: true,
            touch_timestamp: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.history.capacity, 50);
        assert_eq!(config.default_layout.id, "entry");
        assert!(config.export.include_background);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: EditorConfig = toml::from_str(
            r##"
            [history]
            capacity = 10

            [export]
            touch_timestamp = true
            "##,
        )
        .expect("parse config");
        assert_eq!(config.history.capacity, 10);
        assert!(config.export.touch_timestamp);
        assert!(config.export.include_background);
        assert_eq!(config.default_layout.name, "Entry");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = EditorConfig::load_from(&dir.path().join("absent.toml")).expect("load");
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let mut config = EditorConfig::default();
        config.history.capacity = 7;
        config.export.touch_timestamp = true;

        config.save_to(&path).expect("save");
        let loaded = EditorConfig::load_from(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "history = [").expect("write");
        let error = EditorConfig::load_from(&path).expect_err("malformed");
        assert_eq!(error.kind(), crate::ErrorKind::Config);
    }
}
