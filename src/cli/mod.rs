//! CLI interface for odoodev

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "odoodev")]
#[command(author = "Krakaw")]
#[command(version)]
#[command(about = "Bootstrap Odoo development environments", long_about = None)]
pub struct Cli {
    /// Project root (defaults to the nearest directory containing config.yaml)
    #[arg(long, global = true, env = "ODOODEV_ROOT")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter config.yaml
    Init,

    /// Generate pyrightconfig.json from the configured repos
    Pyright,

    /// Create or update .vscode/settings.json
    Settings,

    /// Install the Odoo checkout's requirements.txt
    #[command(alias = "check_odoo")]
    CheckOdoo,

    /// Make sure uv is installed, installing it if missing
    #[command(alias = "check_uv")]
    CheckUv,

    /// Install the project's requirements.txt
    Deps,

    /// Check uv and create the virtualenv if missing
    Check,

    /// Run check, deps, check-odoo and pyright in order
    Install,

    /// Run pre-commit hooks on all files
    Lint {
        /// Pass --verbose to pre-commit
        #[arg(short, long)]
        verbose: bool,

        /// Subdirectory of the project to lint from
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

impl Commands {
    /// Name used for the tracing span around the command
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Init => "init",
            Commands::Pyright => "pyright",
            Commands::Settings => "settings",
            Commands::CheckOdoo => "check-odoo",
            Commands::CheckUv => "check-uv",
            Commands::Deps => "deps",
            Commands::Check => "check",
            Commands::Install => "install",
            Commands::Lint { .. } => "lint",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_underscore_aliases() {
        let cli = Cli::try_parse_from(["odoodev", "check_odoo"]).unwrap();
        assert!(matches!(cli.command, Commands::CheckOdoo));

        let cli = Cli::try_parse_from(["odoodev", "check_uv"]).unwrap();
        assert!(matches!(cli.command, Commands::CheckUv));
    }

    #[test]
    fn test_lint_arguments() {
        let cli =
            Cli::try_parse_from(["odoodev", "lint", "--verbose", "--path", "addons"]).unwrap();
        match cli.command {
            Commands::Lint { verbose, path } => {
                assert!(verbose);
                assert_eq!(path, Some(PathBuf::from("addons")));
            }
            _ => panic!("expected lint"),
        }
    }

    #[test]
    fn test_root_is_global() {
        let cli = Cli::try_parse_from(["odoodev", "pyright", "--root", "/srv/p"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/srv/p")));
    }
}
