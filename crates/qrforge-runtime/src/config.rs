use crate::{Error, Result};
use qrforge_types::{
    AppearanceSettings, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, DEFAULT_MARGIN, DEFAULT_SIZE,
    ErrorCorrectionLevel, clamp_margin, clamp_size, is_hex_color,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::external::DEFAULT_GEOLOCATION_TIMEOUT;
use crate::history::DEFAULT_HISTORY_CAPACITY;

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. QRFORGE_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.qrforge
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("QRFORGE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("qrforge"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".qrforge"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// Base appearance a fresh session starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceDefaults {
    pub foreground: String,
    pub background: String,
    pub size: u32,
    pub error_correction: ErrorCorrectionLevel,
    pub margin: u32,
}

impl Default for AppearanceDefaults {
    fn default() -> Self {
        Self {
            foreground: DEFAULT_FOREGROUND.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            size: DEFAULT_SIZE,
            error_correction: ErrorCorrectionLevel::default(),
            margin: DEFAULT_MARGIN,
        }
    }
}

impl AppearanceDefaults {
    pub fn to_settings(&self) -> Result<AppearanceSettings> {
        for (name, color) in [("foreground", &self.foreground), ("background", &self.background)]
        {
            if !is_hex_color(color) {
                return Err(Error::Config(format!(
                    "appearance.{} must be #rgb or #rrggbb, got '{}'",
                    name, color
                )));
            }
        }

        Ok(AppearanceSettings {
            foreground_color: self.foreground.to_ascii_lowercase(),
            background_color: self.background.to_ascii_lowercase(),
            size: clamp_size(self.size),
            error_correction: self.error_correction,
            margin: clamp_margin(self.margin),
            ..AppearanceSettings::default()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeolocationConfig {
    pub timeout_secs: u64,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_GEOLOCATION_TIMEOUT.as_secs(),
        }
    }
}

impl GeolocationConfig {
    /// Lookup deadline used by `Workspace::fill_location`; never below one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub appearance: AppearanceDefaults,
    #[serde(default)]
    pub geolocation: GeolocationConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }
}
