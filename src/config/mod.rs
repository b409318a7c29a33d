//! Configuration for profile-settings.
//!
//! The config is a small TOML file stored at `~/.profile-settings/config.toml`.
//! It is read once at start-up, merged with the CLI arguments and then stored
//! in a global cell so the rest of the program can read it.
//! ```rust
//! use profile_settings::config::get_config;
//! // Without a call to set_global_config the defaults are returned
//! let config = get_config();
//! assert_eq!(config.status_message_timeout, 5);
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

/// Name of the directory in the user's home holding our files.
const CONFIG_DIR_NAME: &str = ".profile-settings";

/// Name of the config file inside [`CONFIG_DIR_NAME`].
const CONFIG_FILE_NAME: &str = "config.toml";

/// Program-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// A level of verbosity to determine
    /// how much we print in logs.
    pub verbose: u8,
    /// Colour roles ("informational", "warning", "success", "error",
    /// "question") mapped to "r,g,b" strings.
    pub colourscheme: HashMap<String, String>,
    /// Where the console submit handler writes submitted profiles.
    /// `None` means stderr.
    pub submit_output: Option<PathBuf>,
    /// Seconds before status messages auto-clear (0 = never)
    pub status_message_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            verbose: 0,
            colourscheme: default_colourscheme(),
            submit_output: None,
            status_message_timeout: 5,
        }
    }
}

/// The built-in colour scheme.
fn default_colourscheme() -> HashMap<String, String> {
    [
        ("informational", "255,215,0"),
        ("warning", "255,165,0"),
        ("success", "0,255,0"),
        ("error", "255,0,0"),
        ("question", "255,215,0"),
    ]
    .into_iter()
    .map(|(role, rgb)| (role.to_string(), rgb.to_string()))
    .collect()
}

/// Cell for storing global Config
static CONFIG: OnceCell<Config> = OnceCell::new();

/// To initialize global config with custom values
pub fn set_global_config(config: Config) {
    CONFIG.set(config).ok(); // first writer wins, later calls are ignored
}

/// Get the global config.
/// This will return default config if the config isn't initialized
pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

/// Returns the default location of the config file.
///
/// # Errors
///
/// Returns [`SettingsError::HomeNotFound`] when the home directory cannot be
/// determined.
pub fn get_config_file_path() -> Result<PathBuf, SettingsError> {
    let mut path = dirs::home_dir().ok_or(SettingsError::HomeNotFound)?;
    path.push(CONFIG_DIR_NAME);
    path.push(CONFIG_FILE_NAME);
    Ok(path)
}

/// Reads a config from the given TOML file.
///
/// Missing keys fall back to their defaults.
pub fn load_config_from(path: &Path) -> Result<Config, SettingsError> {
    trace!("Reading config from {}", path.display());
    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}

/// Writes the config to the given TOML file, creating parent directories.
pub fn save_config_to(config: &Config, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    debug!("Saved config to {}", path.display());
    Ok(())
}

/// Loads the config at `path` (or the default location), writing a default
/// config there first if none exists.
pub fn load_or_create_config(path: Option<&Path>) -> Result<Config, SettingsError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => get_config_file_path()?,
    };

    if path.exists() {
        load_config_from(&path)
    } else {
        debug!("No config at {}, writing defaults", path.display());
        let config = Config::default();
        save_config_to(&config, &path)?;
        Ok(config)
    }
}
