use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellSettings {
    /// Program and arguments that start the application core.
    #[serde(default = "default_core_command")]
    pub core_command: Vec<String>,

    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,

    /// Filter pattern for the open dialog.
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,

    #[serde(default = "default_remember_last_directory")]
    pub remember_last_directory: bool,

    #[serde(default)]
    pub last_directory: Option<String>,
}

fn default_core_command() -> Vec<String> {
    vec!["deckset-core".to_string()]
}

fn default_window_width() -> i32 {
    1024
}

fn default_window_height() -> i32 {
    768
}

fn default_file_pattern() -> String {
    "*.{md,markdown}".to_string()
}

fn default_remember_last_directory() -> bool {
    true
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            core_command: default_core_command(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            file_pattern: default_file_pattern(),
            remember_last_directory: default_remember_last_directory(),
            last_directory: None,
        }
    }
}

impl ShellSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(path = %config_path.display(), "failed to parse settings: {}; using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                let default = Self::default();
                if let Err(e) = default.save_to(config_path) {
                    tracing::debug!("could not write default settings: {}", e);
                }
                default
            }
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), AppError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("deckset-shell");
        path.push("settings.json");
        path
    }

    /// Starting directory for file dialogs, if one should be used.
    pub fn dialog_directory(&self) -> Option<PathBuf> {
        if !self.remember_last_directory {
            return None;
        }
        self.last_directory.as_ref().map(PathBuf::from)
    }

    /// Remember the parent directory of a path the user just opened or saved.
    pub fn remember_directory_of(&mut self, path: &Path) {
        if !self.remember_last_directory {
            return;
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_directory = Some(parent.to_string_lossy().to_string());
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.core_command.first().map_or(true, |program| program.trim().is_empty()) {
            return Err(AppError::Settings("core_command must name a program".to_string()));
        }
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(AppError::Settings(format!(
                "invalid window size {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ShellSettings::default();
        assert_eq!(settings.core_command, vec!["deckset-core".to_string()]);
        assert_eq!(settings.window_width, 1024);
        assert_eq!(settings.window_height, 768);
        assert_eq!(settings.file_pattern, "*.{md,markdown}");
        assert!(settings.remember_last_directory);
        assert!(settings.last_directory.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_config() {
        // Older config files only carried the core command
        let json = r#"{"core_command": ["node", "core.js"]}"#;
        let settings: ShellSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.core_command, vec!["node".to_string(), "core.js".to_string()]);
        assert_eq!(settings.window_width, 1024);
        assert!(settings.remember_last_directory);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = ShellSettings {
            window_width: 1280,
            last_directory: Some("/tmp/decks".to_string()),
            ..Default::default()
        };
        settings.save_to(&path).unwrap();

        assert_eq!(ShellSettings::load_from(&path), settings);
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = ShellSettings::load_from(&path);
        assert_eq!(settings, ShellSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(ShellSettings::load_from(&path), ShellSettings::default());
    }

    #[test]
    fn test_remember_directory() {
        let mut settings = ShellSettings::default();
        settings.remember_directory_of(Path::new("/tmp/decks/talk.md"));
        assert_eq!(settings.dialog_directory(), Some(PathBuf::from("/tmp/decks")));

        settings.remember_directory_of(Path::new("bare.md"));
        assert_eq!(settings.dialog_directory(), Some(PathBuf::from("/tmp/decks")));

        settings.remember_last_directory = false;
        assert_eq!(settings.dialog_directory(), None);
    }

    #[test]
    fn test_validate_rejects_empty_command() {
        let settings = ShellSettings {
            core_command: vec![],
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(AppError::Settings(_))));

        let settings = ShellSettings {
            window_height: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
