use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use portfolio::relay::{EmailJsRelay, MessageRelay};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Personal portfolio website server
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Serves the portfolio site and relays contact messages", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = portfolio::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    portfolio::observability::init_observability(
        "portfolio",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: portfolio::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    if !config.relay.is_configured() {
        tracing::warn!(
            fallback = %config.relay.to_email,
            "relay credentials missing; contact form will direct visitors to the fallback address"
        );
    }

    let relay: Arc<dyn MessageRelay> = Arc::new(EmailJsRelay::new(config.relay.clone()));

    let app = portfolio::create_app(config, relay)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
