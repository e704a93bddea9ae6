use std::process::ExitCode;

use projtree::cli::Cli;
use projtree::fs::RealFileSystem;
use projtree::{GenerateError, generate};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    let config = cli.to_config();
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(err) => {
            eprintln!("projtree: cannot determine current directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    match generate(&RealFileSystem, &config, &cwd).await {
        Ok(generated) => {
            tracing::debug!(entries = generated.entries, "tree complete");
            println!("Project structure written to {}", generated.output.display());
        }
        Err(GenerateError::SourceNotFound { path }) => {
            println!("Error: Source path {} does not exist.", path.display());
        }
        Err(GenerateError::OutputWrite { path, source }) => {
            println!("Error writing to {}: {source}", path.display());
        }
        Err(err) => {
            eprintln!("projtree: {err:#}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
