//! Editor and type-checker settings generation

mod persist;

pub use persist::{merge_and_persist, shallow_merge, to_pretty_json, write_json_atomic};

use serde_json::{json, Map, Value};

/// Formatter used for Python files
const PYTHON_FORMATTER: &str = "ms-python.black-formatter";

/// Formatter used for the web/data file types
const PRETTIER_FORMATTER: &str = "esbenp.prettier-vscode";

/// Build the `pyrightconfig.json` document for the aggregated paths
pub fn build_pyright_config(paths: &[String]) -> Map<String, Value> {
    let mut config = Map::new();
    config.insert("extraPaths".to_string(), json!(paths));
    config
}

/// Build the VS Code settings managed by odoodev.
///
/// `paths` becomes the autocomplete search path. `odoo_path` is excluded from
/// linting and put on pylint's `sys.path` so `pylint_odoo` can import it.
pub fn build_settings(paths: &[String], odoo_path: &str) -> Map<String, Value> {
    let settings = json!({
        "python.autoComplete.extraPaths": paths,
        "python.formatting.provider": "none",
        "python.linting.flake8Enabled": true,
        "python.linting.ignorePatterns": [format!("{}/**/*.py", odoo_path)],
        "python.linting.pylintArgs": [
            format!("--init-hook=\"import sys;sys.path.append('{}')\"", odoo_path),
            "--load-plugins=pylint_odoo",
        ],
        "python.linting.pylintEnabled": true,
        "python.defaultInterpreterPath": "python3",
        "restructuredtext.confPath": "",
        "search.followSymlinks": false,
        "search.useIgnoreFiles": false,
        "[python]": { "editor.defaultFormatter": PYTHON_FORMATTER },
        "[json]": { "editor.defaultFormatter": PRETTIER_FORMATTER },
        "[jsonc]": { "editor.defaultFormatter": PRETTIER_FORMATTER },
        "[markdown]": { "editor.defaultFormatter": PRETTIER_FORMATTER },
        "[yaml]": { "editor.defaultFormatter": PRETTIER_FORMATTER },
        "[xml]": { "editor.formatOnSave": false },
    });

    settings.as_object().cloned().unwrap_or_default()
}
