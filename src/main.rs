use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use shape_service::config::{load_config, ServiceConfig};
use shape_service::http::HttpServer;
use shape_service::observability::{init_tracing, LifecycleLog};
use shape_service::registry::ShapeRegistry;

#[derive(Parser)]
#[command(name = "shape-service")]
#[command(about = "In-memory shape registry HTTP service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration (defaults when no file is given)
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    init_tracing(&config.observability);

    tracing::info!("shape-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let lifecycle_log = LifecycleLog::new(&config.observability.lifecycle_log_path);
    lifecycle_log.record_startup();

    let registry = Arc::new(ShapeRegistry::new(config.registry.seed.clone()));
    let seeded = registry.list().await;
    tracing::info!(shapes = ?seeded, "Shape list");

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    // Create and run HTTP server
    let server = HttpServer::new(&config, registry);
    server.run(listener).await?;

    lifecycle_log.record_shutdown();
    tracing::info!("Shutdown complete");
    Ok(())
}
