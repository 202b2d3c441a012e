//! Application configuration.

use crate::consts::cli_consts::{APP_DIR, CONFIG_FILE, STORAGE_FILE};
use crate::museum::ModalPolicy;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Whether audio cues are played.
    pub sound_enabled: bool,
    /// Whether the TUI paints its own background color.
    pub with_background_color: bool,
    /// Close the active modal before opening another one.
    pub exclusive_modals: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            with_background_color: true,
            exclusive_modals: false,
        }
    }
}

impl Config {
    pub fn modal_policy(&self) -> ModalPolicy {
        if self.exclusive_modals {
            ModalPolicy::Exclusive
        } else {
            ModalPolicy::Stack
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration if the file exists, falling back to defaults otherwise.
    ///
    /// A file that exists but cannot be parsed is reported and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }
}

fn app_dir() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine the home directory",
        )
    })?;
    Ok(home.join(APP_DIR))
}

/// Path of the configuration file, `$HOME/.museum/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    Ok(app_dir()?.join(CONFIG_FILE))
}

/// Path of the planner storage file, `$HOME/.museum/storage.json`.
pub fn get_storage_path() -> Result<PathBuf, std::io::Error> {
    Ok(app_dir()?.join(STORAGE_FILE))
}
