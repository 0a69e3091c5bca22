//! Configuration loading and environment variable interpolation

use crate::error::{Error, Result};
use regex::Regex;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::Config;

pub const CONFIG_FILENAME: &str = "config.yaml";

/// Load configuration from a specific path
pub fn load_config(path: &Path) -> Result<Config> {
    tracing::info!("Loading configuration from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::ConfigNotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;
    parse_config(&content)
}

/// Parse configuration text, after environment interpolation
pub fn parse_config(content: &str) -> Result<Config> {
    let content = interpolate_env_vars(content);
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Interpolate environment variables in the format ${VAR_NAME} or ${VAR_NAME:-default}
fn interpolate_env_vars(content: &str) -> String {
    // This regex is a compile-time constant, panicking is acceptable here
    // as it indicates a programming error in the codebase, not a runtime issue
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
        .expect("Invalid regex pattern - this is a bug in the codebase");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        env::var(var_name).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}

/// Generate a default configuration file content
pub fn default_config_content() -> &'static str {
    r#"# odoodev configuration
#
# Every entry under `repos` is added to the editor and type-checker search
# paths, in the order listed here. An entry is either a single path or a list
# of paths. `odoo` is required and must be a single path; its `addons`
# directory is appended automatically.
#
# ${VAR} and ${VAR:-default} are replaced from the environment.

repos:
  odoo: ${HOME}/src/odoo
  # enterprise: ${HOME}/src/enterprise
  # oca:
  #   - ${HOME}/src/oca/web
  #   - ${HOME}/src/oca/server-tools

# Python version for the virtualenv (quote it, 3.10 is not 3.1)
python: "3.10"
"#
}
