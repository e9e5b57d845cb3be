//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Derive the default filter from config
//!
//! # Design Decisions
//! - `RUST_LOG` wins over config when set
//! - Debug mode forces `debug` for this crate and tower-http

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Filter directive used when `RUST_LOG` is absent.
pub fn default_filter(config: &AppConfig) -> String {
    let level = if config.server.debug {
        "debug".to_string()
    } else {
        config.observability.log_level.to_ascii_lowercase()
    };
    format!("fundas_catalog={level},tower_http={level}")
}

/// Install the global subscriber.
pub fn init_logging(
    config: &AppConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(config).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
