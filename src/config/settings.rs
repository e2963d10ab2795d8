// src/config/settings.rs
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use config::{Config, Environment, File, FileFormat};
use serde::{Serialize, Deserialize};

/// Application-level settings, layered from defaults, an optional
/// `settings.toml` and `CORK_ANALYTICS__*` style environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub window_width: f32,
    pub window_height: f32,
    pub log_filter: String,
    pub restore_last_session: bool,
    pub scenario_dir: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            window_width: 1024.0,
            window_height: 768.0,
            log_filter: "cork_analytics=info".to_string(),
            restore_last_session: true,
            scenario_dir: None,
        }
    }
}

impl AppSettings {
    pub const ENV_PREFIX: &'static str = "CORK_ANALYTICS";

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cork-analytics").join("settings.toml"))
    }

    /// Loads from the platform config directory, or from the environment alone
    /// when the platform has none.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Config::builder()
                .add_source(Environment::with_prefix(Self::ENV_PREFIX).separator("__"))
                .build()?
                .try_deserialize()
                .context("Failed to parse settings"),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix(Self::ENV_PREFIX).separator("__"))
            .build()
            .with_context(|| format!("Failed to read settings from {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }

    /// Where file dialogs start: the configured directory, else the user's documents.
    pub fn start_dir(&self) -> Option<PathBuf> {
        self.scenario_dir.clone().or_else(dirs::document_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load_from(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "window_width = 1280.0\nrestore_last_session = false\nscenario_dir = \"/tmp/cork\"\n").unwrap();

        let settings = AppSettings::load_from(&path).unwrap();
        assert_eq!(settings.window_width, 1280.0);
        assert_eq!(settings.window_height, 768.0);
        assert!(!settings.restore_last_session);
        assert_eq!(settings.scenario_dir, Some(PathBuf::from("/tmp/cork")));
        assert_eq!(settings.start_dir(), Some(PathBuf::from("/tmp/cork")));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "window_width = [").unwrap();
        assert!(AppSettings::load_from(&path).is_err());
    }
}
