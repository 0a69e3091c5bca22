use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use odoodev::bootstrap::SystemRunner;
use odoodev::cli::{self, commands, Cli};
use odoodev::Project;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "odoodev=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let span = tracing::info_span!("command", command = cli.command.name());
    let _enter = span.enter();

    // Failures are reported here and the process still exits zero
    let result = Project::discover(cli.root.clone())
        .map_err(anyhow::Error::from)
        .and_then(|project| {
            tracing::debug!("Project root: {}", project.root().display());
            commands::dispatch(&cli.command, &project, &SystemRunner)
        });

    if let Err(e) = result {
        tracing::debug!("{:?}", e);
        cli::error(&format!("{:#}", e));
    }

    Ok(())
}
