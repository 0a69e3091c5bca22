//! CLI command implementations

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::bootstrap::{self, CommandRunner, UvStatus, VenvStatus};
use crate::cli::{error, info, print_paths, success, warn, Commands};
use crate::config::{self, Config, ADDONS_SUFFIX, ODOO_REPO};
use crate::project::Project;
use crate::settings;

/// Execute one subcommand against `project`
pub fn dispatch(command: &Commands, project: &Project, runner: &dyn CommandRunner) -> Result<()> {
    match command {
        Commands::Init => init(project),
        Commands::Pyright => pyright(project),
        Commands::Settings => vscode_settings(project),
        Commands::CheckOdoo => check_odoo(project, runner),
        Commands::CheckUv => check_uv(runner),
        Commands::Deps => deps(project, runner),
        Commands::Check => check(project, runner),
        Commands::Install => install(project, runner),
        Commands::Lint { verbose, path } => lint(project, runner, *verbose, path.as_deref()),
    }
}

/// Write a starter config.yaml
pub fn init(project: &Project) -> Result<()> {
    let config_path = project.config_path();

    if config_path.exists() {
        warn(&format!("{} already exists", config_path.display()));
        return Ok(());
    }

    fs::write(&config_path, config::default_config_content())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    success(&format!("Created {}", config_path.display()));
    info("List your repositories under 'repos' and run 'odoodev install'");

    Ok(())
}

/// Generate pyrightconfig.json
pub fn pyright(project: &Project) -> Result<()> {
    tracing::info!("Creating pyrightconfig.json");

    let config = load_config(project)?;
    let paths = aggregate(&config)?;

    let path = project.pyright_config_path();
    settings::write_json_atomic(&path, &settings::build_pyright_config(&paths))
        .with_context(|| format!("Failed to create {}", path.display()))?;

    success(&format!("Wrote {} with {} extra paths", path.display(), paths.len()));
    print_paths(&paths);
    Ok(())
}

/// Create or update .vscode/settings.json
pub fn vscode_settings(project: &Project) -> Result<()> {
    tracing::info!("Creating or updating settings.json in .vscode directory");

    let config = load_config(project)?;
    let paths = aggregate(&config)?;
    let odoo_path = config.odoo_path().context("Failed to get Odoo path")?;

    let generated = settings::build_settings(&paths, odoo_path);
    let path = project.settings_path();
    let merged = settings::merge_and_persist(&path, &generated)
        .with_context(|| format!("Failed to create or update {}", path.display()))?;

    let kept = merged.len() - generated.len();
    success(&format!(
        "Updated {} ({} managed keys, {} kept)",
        path.display(),
        generated.len(),
        kept
    ));
    Ok(())
}

/// Install the Odoo checkout's requirements
pub fn check_odoo(project: &Project, runner: &dyn CommandRunner) -> Result<()> {
    let config = load_config(project)?;
    let odoo_path = config.odoo_path().context("Failed to get Odoo path")?;
    tracing::info!("Odoo path obtained: {}", odoo_path);

    bootstrap::install_odoo_deps(runner, project, odoo_path)
        .context("Failed to install Odoo dependencies")?;

    success("Odoo dependencies installed successfully");
    Ok(())
}

/// Make sure uv is installed
pub fn check_uv(runner: &dyn CommandRunner) -> Result<()> {
    match bootstrap::check_uv(runner).context("Failed to check/install uv")? {
        UvStatus::AlreadyInstalled => info("uv is already installed"),
        UvStatus::Installed => success("uv installed"),
    }
    Ok(())
}

/// Install the project's requirements
pub fn deps(project: &Project, runner: &dyn CommandRunner) -> Result<()> {
    if !project.requirements_path().exists() {
        warn(&format!("{} not found", project.requirements_path().display()));
    }

    bootstrap::install_project_deps(runner, project)
        .context("Failed to install additional dependencies")?;

    success("Additional dependencies installed successfully");
    Ok(())
}

/// Check uv, then create the virtualenv if missing
pub fn check(project: &Project, runner: &dyn CommandRunner) -> Result<()> {
    check_uv(runner)?;

    let config = load_config(project)?;
    let status = bootstrap::ensure_venv(runner, project, config.python_version())
        .context("Failed to check/create virtual environment")?;

    match status {
        VenvStatus::Exists => info(&format!("{} already exists", project.venv_path().display())),
        VenvStatus::Created => success(&format!("Created {}", project.venv_path().display())),
    }
    Ok(())
}

/// Run check, deps, check-odoo and pyright, continuing past failures
pub fn install(project: &Project, runner: &dyn CommandRunner) -> Result<()> {
    let mut failed = Vec::new();
    run_step("check", &mut failed, || check(project, runner));
    run_step("deps", &mut failed, || deps(project, runner));
    run_step("check-odoo", &mut failed, || check_odoo(project, runner));
    run_step("pyright", &mut failed, || pyright(project));

    if !failed.is_empty() {
        anyhow::bail!("install finished with failed steps: {}", failed.join(", "));
    }

    success("Finished installing development environment");
    Ok(())
}

/// Run pre-commit hooks
pub fn lint(
    project: &Project,
    runner: &dyn CommandRunner,
    verbose: bool,
    path: Option<&Path>,
) -> Result<()> {
    bootstrap::lint(runner, project, verbose, path.unwrap_or(Path::new("")))
        .context("Failed to run lint")?;
    Ok(())
}

/// Run one install step, logging and recording its failure instead of returning it
fn run_step(name: &'static str, failed: &mut Vec<&'static str>, step: impl FnOnce() -> Result<()>) {
    let span = tracing::info_span!("step", step = name);
    let _enter = span.enter();

    if let Err(e) = step() {
        tracing::warn!("{:#}", e);
        error(&format!("{}: {:#}", name, e));
        failed.push(name);
    }
}

fn load_config(project: &Project) -> Result<Config> {
    project
        .load_config()
        .context("Failed to load configuration")
}

fn aggregate(config: &Config) -> Result<Vec<String>> {
    config::aggregate_paths(config, ODOO_REPO, ADDONS_SUFFIX).context("Failed to collect repo paths")
}
