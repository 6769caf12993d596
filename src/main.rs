use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cutting_estimator::api::{AppState, create_router};
use cutting_estimator::config::ConfigLoader;
use cutting_estimator::init_tracing;

/// Concrete-cutting estimate server.
#[derive(Debug, Parser)]
#[command(name = "cutting-estimator", version, about)]
struct Cli {
    /// Directory holding estimator.yaml and rates.yaml
    #[arg(long, env = "ESTIMATOR_CONFIG", default_value = "./config/default")]
    config: PathBuf,

    /// Address to listen on
    #[arg(long, env = "ESTIMATOR_BIND", default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = ConfigLoader::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    info!(
        estimator = %config.metadata().name,
        profiles = config.profile_names().len(),
        default_profile = %config.metadata().default_profile,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("binding {}", cli.bind))?;

    info!(address = %cli.bind, "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
