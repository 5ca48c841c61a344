use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use squad_page::config::load_config;
use squad_page::lifecycle::signals::shutdown_on_signal;
use squad_page::observability::{logging, metrics};
use squad_page::{Shutdown, SiteServer};

#[derive(Parser)]
#[command(name = "squad-page")]
#[command(about = "Server-rendered squad page backed by the FDND content service", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listening port. Takes precedence over the PORT environment variable.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.listener.port = port;
    }

    logging::init_logging(&config.observability.log_level);
    tracing::info!("squad-page v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        content_service = %config.directory.base_url,
        tribe = %config.directory.tribe,
        cohort = %config.directory.cohort,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(
        "Application started on http://localhost:{}",
        listener.local_addr()?.port()
    );

    let shutdown = Shutdown::new();
    let server = SiteServer::new(config)?;
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(shutdown_on_signal(shutdown));

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
