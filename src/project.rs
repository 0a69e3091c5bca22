//! Project root discovery and the files derived from it

use std::env;
use std::path::{Path, PathBuf};

use crate::config::{self, Config, CONFIG_FILENAME};
use crate::error::Result;

pub const PYRIGHT_CONFIG_FILENAME: &str = "pyrightconfig.json";
pub const VSCODE_DIR: &str = ".vscode";
pub const SETTINGS_FILENAME: &str = "settings.json";
pub const VENV_DIR: &str = "venv";
pub const REQUIREMENTS_FILENAME: &str = "requirements.txt";

/// A project checkout rooted at the directory holding `config.yaml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the project root.
    ///
    /// An explicit root always wins. Otherwise the current directory and its
    /// ancestors are searched for `config.yaml`, falling back to the current
    /// directory so commands that need no config still run.
    pub fn discover(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(root) = explicit {
            return Ok(Self::new(root));
        }

        let cwd = env::current_dir()?;
        Ok(Self::new(find_config_root(&cwd).unwrap_or(cwd)))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILENAME)
    }

    pub fn pyright_config_path(&self) -> PathBuf {
        self.root.join(PYRIGHT_CONFIG_FILENAME)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.join(VSCODE_DIR).join(SETTINGS_FILENAME)
    }

    pub fn venv_path(&self) -> PathBuf {
        self.root.join(VENV_DIR)
    }

    pub fn requirements_path(&self) -> PathBuf {
        self.root.join(REQUIREMENTS_FILENAME)
    }

    /// Load this project's `config.yaml`
    pub fn load_config(&self) -> Result<Config> {
        config::load_config(&self.config_path())
    }
}

/// Search upward from `start` for a directory containing `config.yaml`
fn find_config_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_FILENAME).exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_root_walks_upward() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "repos: {}\n").unwrap();
        let nested = dir.path().join("addons").join("my_module");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config_root(&nested).as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_explicit_root_wins() {
        let project = Project::discover(Some(PathBuf::from("/srv/project"))).unwrap();
        assert_eq!(project.root(), Path::new("/srv/project"));
    }

    #[test]
    fn test_derived_paths() {
        let project = Project::new("/p");
        assert_eq!(project.config_path(), Path::new("/p/config.yaml"));
        assert_eq!(project.pyright_config_path(), Path::new("/p/pyrightconfig.json"));
        assert_eq!(project.settings_path(), Path::new("/p/.vscode/settings.json"));
        assert_eq!(project.venv_path(), Path::new("/p/venv"));
        assert_eq!(project.requirements_path(), Path::new("/p/requirements.txt"));
    }
}
