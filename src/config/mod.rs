use std::{fs::read_to_string, path::PathBuf};

use derive_getters::Getters;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_LOCATION: &str = "/root/clawd/config/agentmail.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config not found at {}", .0.display())]
    NotFound(PathBuf),
    #[error("cannot read config at {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("config at {} is not valid JSON: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize, Getters)]
pub struct Config {
    api_key: String,
    inbox_id: String,
}

impl Config {
    pub fn load_from_file(file: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config_file = file.unwrap_or_else(default_location);
        if !config_file.exists() {
            return Err(ConfigError::NotFound(config_file));
        }
        let contents = read_to_string(&config_file).map_err(|source| ConfigError::Unreadable {
            path: config_file.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Invalid {
            path: config_file,
            source,
        })
    }
}

fn default_location() -> PathBuf {
    PathBuf::from(DEFAULT_LOCATION)
}
