//! Configuration loading
//!
//! Reads `~/.config/moviedeck/config.toml`. A missing file means defaults; a
//! broken one means defaults plus a warning for the help line.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::MovieDeckError;

pub use types::{AnimationConfig, Config, SearchConfig};

const CONFIG_DIR: &str = "moviedeck";
const CONFIG_FILE: &str = "config.toml";

/// Loaded config plus any problem worth telling the user about
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult::default(),
    }
}

/// Load from an explicit path, falling back to defaults on any error
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    match read_config(path) {
        Ok(Some(config)) => ConfigResult {
            config,
            warning: None,
        },
        Ok(None) => ConfigResult::default(),
        Err(e) => {
            log::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

/// Read and parse a config file; Ok(None) if it does not exist
pub fn read_config(path: &Path) -> Result<Option<Config>, MovieDeckError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    parse_config(&contents).map(Some)
}

pub fn parse_config(contents: &str) -> Result<Config, MovieDeckError> {
    toml::from_str(contents).map_err(|e| MovieDeckError::Config(e.message().to_string()))
}
