//! Configuration schema definitions

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the repository that receives special-cased path handling.
pub const ODOO_REPO: &str = "odoo";

/// Suffix appended to the Odoo checkout to reach its bundled addons.
pub const ADDONS_SUFFIX: &str = "addons";

/// Python version used for the virtualenv when `python` is not set.
pub const DEFAULT_PYTHON_VERSION: &str = "3.10";

/// Main configuration structure, read from `config.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Repository name to checkout path(s). Iteration order is the order
    /// the entries appear in the file.
    #[serde(default)]
    pub repos: Option<IndexMap<String, RepoPaths>>,

    #[serde(default)]
    pub python: Option<String>,
}

/// A `repos` entry: one checkout path or a list of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepoPaths {
    Single(String),
    Many(Vec<String>),
    /// Anything else (numbers, nested mappings). Skipped during aggregation.
    Unsupported(serde_yaml::Value),
}

impl Config {
    /// The `repos` mapping, or `MissingRepos` if the key is absent
    pub fn repos(&self) -> Result<&IndexMap<String, RepoPaths>> {
        self.repos.as_ref().ok_or(Error::MissingRepos)
    }

    /// Look up the single path configured for `name`
    pub fn repo_path(&self, name: &str) -> Result<&str> {
        match self.repos()?.get(name) {
            Some(RepoPaths::Single(path)) => Ok(path),
            Some(_) => Err(Error::RepoNotSinglePath(name.to_string())),
            None => Err(Error::RepoNotFound(name.to_string())),
        }
    }

    /// Path of the Odoo checkout
    pub fn odoo_path(&self) -> Result<&str> {
        self.repo_path(ODOO_REPO)
    }

    pub fn python_version(&self) -> &str {
        self.python.as_deref().unwrap_or(DEFAULT_PYTHON_VERSION)
    }
}
