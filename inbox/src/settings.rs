use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Config, File};
use log::debug;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Pin keys used when neither the command line nor the inbox file has any
    pub pinned: Vec<String>,
    pub default_filter: Option<String>,
}

const CONFIG_FILE_NAME: &str = env!("CARGO_PKG_NAME");

// Function to get the XDG_CONFIG_HOME path
fn get_xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg_config));
    }

    // If XDG_CONFIG_HOME is not set, fall back to $HOME/.config
    if let Ok(home) = env::var("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }

    None
}

pub fn load_settings() -> anyhow::Result<Settings> {
    match get_xdg_config_path() {
        Some(xdg_config) => {
            load_settings_from(&xdg_config.join(CONFIG_FILE_NAME).join("config.toml"))
        }
        None => Ok(Settings::default()),
    }
}

pub fn load_settings_from(config_path: &Path) -> anyhow::Result<Settings> {
    if !config_path.exists() {
        debug!("no config file at {}", config_path.display());
        return Ok(Settings::default());
    }

    let settings: Settings = Config::builder()
        .add_source(File::from(config_path.to_path_buf()).required(false))
        .build()
        .with_context(|| format!("Failed to read config file {}", config_path.display()))?
        .try_deserialize()
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to deserialize config file {}: {}",
                config_path.display(),
                e
            )
        })?;

    debug!("loaded settings from {}: {:?}", config_path.display(), settings);

    Ok(settings)
}
