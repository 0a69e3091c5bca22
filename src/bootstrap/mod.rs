//! Virtualenv and dependency bootstrap through `uv`
//!
//! Every step is a blocking, sequential wrapper over an external command.
//! Commands run from the project root unless stated otherwise.

mod runner;

pub use runner::{CommandRunner, CommandSpec, SystemRunner};

use std::path::Path;

use crate::error::Result;
use crate::project::{Project, REQUIREMENTS_FILENAME, VENV_DIR};

const UV: &str = "uv";
const UV_INSTALL_SH: &str = "https://astral.sh/uv/install.sh";
const UV_INSTALL_PS1: &str = "https://astral.sh/uv/install.ps1";

/// Outcome of [`check_uv`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvStatus {
    AlreadyInstalled,
    Installed,
}

/// Outcome of [`ensure_venv`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenvStatus {
    Exists,
    Created,
}

/// The upstream installer invocation for the current (or given) platform
pub fn uv_installer(windows: bool) -> CommandSpec {
    if windows {
        CommandSpec::new("powershell")
            .arg("-c")
            .arg(format!("irm {} | iex", UV_INSTALL_PS1))
    } else {
        CommandSpec::new("sh")
            .arg("-c")
            .arg(format!("curl -LsSf {} | sh", UV_INSTALL_SH))
    }
}

/// Make sure `uv` is available, running the upstream installer if not
pub fn check_uv(runner: &dyn CommandRunner) -> Result<UvStatus> {
    tracing::info!("Checking uv installation");

    if runner.probe(&CommandSpec::new(UV).arg("--version")) {
        tracing::info!("uv is already installed");
        return Ok(UvStatus::AlreadyInstalled);
    }

    let windows = cfg!(windows);
    tracing::info!("Installing uv on {}", if windows { "Windows" } else { "Unix" });
    runner.run(&uv_installer(windows))?;
    Ok(UvStatus::Installed)
}

/// Create `<root>/venv` with the given Python version if it does not exist
pub fn ensure_venv(
    runner: &dyn CommandRunner,
    project: &Project,
    python_version: &str,
) -> Result<VenvStatus> {
    tracing::info!("Checking virtual environment with Python {}", python_version);

    if project.venv_path().exists() {
        return Ok(VenvStatus::Exists);
    }

    tracing::info!("Creating virtual environment");
    runner.run(
        &CommandSpec::new(UV)
            .args(["venv", VENV_DIR, "--python", python_version])
            .current_dir(project.root()),
    )?;
    Ok(VenvStatus::Created)
}

/// `uv pip install -r <requirements>`
pub fn install_requirements(
    runner: &dyn CommandRunner,
    project: &Project,
    requirements: &Path,
) -> Result<()> {
    runner.run(
        &CommandSpec::new(UV)
            .args(["pip", "install", "-r"])
            .arg(requirements.to_string_lossy())
            .current_dir(project.root()),
    )
}

/// Install the project's own `requirements.txt`
pub fn install_project_deps(runner: &dyn CommandRunner, project: &Project) -> Result<()> {
    tracing::info!("Installing additional dependencies");
    install_requirements(runner, project, Path::new(REQUIREMENTS_FILENAME))
}

/// Install the requirements shipped with the Odoo checkout
pub fn install_odoo_deps(
    runner: &dyn CommandRunner,
    project: &Project,
    odoo_path: &str,
) -> Result<()> {
    tracing::info!("Installing Odoo dependencies");
    let requirements = Path::new(odoo_path).join(REQUIREMENTS_FILENAME);
    install_requirements(runner, project, &requirements)
}

/// Run every pre-commit hook against all files under `<root>/<subpath>`
pub fn lint(
    runner: &dyn CommandRunner,
    project: &Project,
    verbose: bool,
    subpath: &Path,
) -> Result<()> {
    let mut cmd = CommandSpec::new(UV)
        .args([
            "run",
            "pre-commit",
            "run",
            "--show-diff-on-failure",
            "--all-files",
            "--color=always",
        ])
        .current_dir(project.root().join(subpath));
    if verbose {
        cmd = cmd.arg("--verbose");
    }

    runner.run(&cmd)
}
