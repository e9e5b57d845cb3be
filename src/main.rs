//! AirPods case catalog server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http server ──▶ routing ──▶ handlers ──▶ views
//!                     (middleware)    (pages)       │          (askama)
//!                                                   ▼
//!                                              catalog store
//!                                              (static data)
//!
//!     Cross-Cutting: config, observability, security headers, lifecycle
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use fundas_catalog::config::{load_config, validate_config, AppConfig, ConfigError};
use fundas_catalog::lifecycle::{spawn_signal_listener, Shutdown};
use fundas_catalog::observability::{init_logging, metrics};
use fundas_catalog::HttpServer;

#[derive(Parser)]
#[command(name = "fundas-catalog")]
#[command(about = "Server-rendered catalog of AirPods cases", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `server.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Enable debug mode.
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => AppConfig::default(),
        };
        if let Some(bind) = &self.bind {
            config.server.bind_address = bind.clone();
        }
        if self.debug {
            config.server.debug = true;
        }
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    init_logging(&config)?;

    tracing::info!("fundas-catalog v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.server.bind_address,
        debug = config.server.debug,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(e) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    error = %e,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
