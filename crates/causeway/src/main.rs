//! Causeway CLI binary.

use anyhow::Result;
use causeway::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the causeway CLI.
///
/// Runs on tokio's current_thread runtime; the CLI is a sequence of
/// I/O-bound steps with nothing to parallelize.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Diagnostics are filtered via RUST_LOG, e.g.
    // RUST_LOG=causeway=debug,causeway_graph=trace causeway repl routes.map
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("causeway=info,causeway_graph=info")),
        )
        .with_target(false)
        .init();

    tracing::debug!("Starting causeway CLI");

    let cli = Cli::parse_args();
    cli.execute().await?;

    tracing::debug!("Causeway CLI completed successfully");
    Ok(())
}
