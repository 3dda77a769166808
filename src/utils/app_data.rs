use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "strand";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the app data directory
///
/// Command-line flags override these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hex-encode file contents before searching
    #[serde(default)]
    pub hex: bool,

    /// Files larger than this are skipped (bytes)
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// How many bytes of the strand to show in text output
    #[serde(default = "default_preview_bytes")]
    pub preview_bytes: usize,

    /// Include hidden files when walking directories
    #[serde(default)]
    pub include_hidden: bool,
}

fn default_max_file_size() -> u64 {
    64 * 1024 * 1024 // 64MB
}

fn default_preview_bytes() -> usize {
    64
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hex: false,
            max_file_size: default_max_file_size(),
            preview_bytes: default_preview_bytes(),
            include_hidden: false,
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            Self::from_json(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config JSON, filling missing fields with defaults
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse config file")
    }

    /// Save config to the app data directory
    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(&config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    let app_dir = base.join(APP_NAME);

    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}
