use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::Settings;

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Reads and writes [`Settings`] as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the platform configuration directory, falling back to
    /// the working directory when none can be resolved.
    pub fn for_user() -> Self {
        Self::new(resolve_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        let settings: Settings = toml::from_str(&data).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(settings.normalized())
    }

    /// Load settings, logging and falling back to defaults on any error.
    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load settings: {}, using defaults", e);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let data = toml::to_string_pretty(settings)?;
        fs::write(&self.path, data).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

fn resolve_settings_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "MyPump", "MyPump") {
        dirs.config_dir().join(SETTINGS_FILE)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from(SETTINGS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("absent.toml"));
        assert_eq!(service.load().unwrap(), Settings::default());
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempdir().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join(SETTINGS_FILE));
        let settings = Settings {
            timer_duration_seconds: 600.0,
            activation_delay_seconds: 0.0,
            ..Settings::default()
        };

        service.save(&settings).unwrap();
        assert_eq!(service.load().unwrap(), settings);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "timer_duration_seconds = 5000.0\n").unwrap();

        let settings = SettingsService::new(&path).load().unwrap();
        assert_eq!(settings.timer_duration_seconds, 1800.0);
        assert_eq!(settings.starting_protein, 65);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "timer_duration_seconds = \"soon\"").unwrap();

        let service = SettingsService::new(&path);
        assert!(matches!(service.load(), Err(SettingsError::Parse { .. })));
        assert_eq!(service.load_or_default(), Settings::default());
    }
}
