//! Serve command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use relnotes_config::load_or_default;
use relnotes_provider::ProviderRegistry;
use relnotes_server::{Generator, create_router};
use tracing::info;

/// Arguments for the serve command.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind (default from configuration)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (default from configuration)
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Configuration file (default: nearest relnotes.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Runs the serve command.
pub fn run(args: ServeArgs) -> Result<()> {
    let config =
        load_or_default(args.config.as_deref()).context("failed to load configuration")?;
    let host = args.host.unwrap_or(config.server.host);
    let port = args.port.unwrap_or(config.server.port);

    let registry =
        ProviderRegistry::from_config(&config.github).context("failed to configure providers")?;
    let app = create_router(Generator::new(registry));

    let rt = tokio::runtime::Runtime::new().context("failed to create async runtime")?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind((host.as_str(), port))
            .await
            .with_context(|| format!("failed to bind {host}:{port}"))?;
        info!(
            "relnotes API listening on http://{}",
            listener.local_addr()?
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("server error")
    })
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
