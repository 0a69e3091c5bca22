//! Error types for odoodev

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config file not found: {0}. Run 'odoodev init' first.")]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration has no 'repos' mapping")]
    MissingRepos,

    #[error("Repository '{0}' not found in 'repos'")]
    RepoNotFound(String),

    #[error("Repository '{0}' must map to a single path, not a list")]
    RepoNotSinglePath(String),

    #[error("Settings file {0} does not contain a JSON object")]
    SettingsNotObject(PathBuf),

    #[error("Command '{0}' not found on PATH")]
    CommandNotFound(String),

    #[error("Command '{command}' failed with {status}")]
    CommandFailed { command: String, status: String },
}

pub type Result<T> = std::result::Result<T, Error>;
