//! # ShortUUID Worker
//!
//! Converts 128-bit UUIDs to and from compact, human-typable strings, and
//! derives name-based UUIDs:
//!
//! - **Short ids**: the UUID's value in base 36 (`0-9a-z`, 25 characters at
//!   most) or base 62 (`0-9A-Za-z`, 22 characters at most)
//! - **Name-based UUIDs**: versions 3 (MD5) and 5 (SHA-1) over an optional
//!   namespace and a name
//! - **Base64 layout**: the 16-byte big-endian form as unpadded URL-safe Base64
//!
//! The codec functions are re-exported at the crate root and can be used
//! without the HTTP worker:
//!
//! ```
//! use shortuuid_worker::{short_to_uuid, uuid_to_short};
//! use uuid::Uuid;
//!
//! let uuid = Uuid::parse_str("a8e41dc6-74c9-42c5-bb03-3bfd623044c5").unwrap();
//! let short_id = uuid_to_short(&uuid, true);
//! assert_eq!(short_id, "58gxXh69c8X7f2Id3D84W5");
//! assert_eq!(short_to_uuid(&short_id, true), Ok(uuid));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! HTTP (Axum) → api::handlers → ShortUuidService → basen · bits · short · named
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

use std::net::SocketAddr;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::api::create_router;
use crate::api::state::AppState;
use crate::config::AppConfig;

pub use crate::domain::Base;
pub use crate::error::{CodecError, ErrorKind};
pub use crate::service::NameVersion;
pub use crate::service::basen::{decode as decode_basen, encode as encode_basen};
pub use crate::service::bits::{from_base64 as uuid_from_base64, to_base64 as uuid_to_base64};
pub use crate::service::named::generate_by_number as named_uuid;
pub use crate::service::short::{
    decode as short_to_uuid, encode as uuid_to_short, random as random_short, try_shorten,
};

/// Run the short UUID worker service.
///
/// This function:
/// 1. Loads configuration from files and environment
/// 2. Initializes logging and the metrics recorder
/// 3. Creates the service state
/// 4. Starts the HTTP server
/// 5. Handles graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded
/// - The metrics recorder cannot be installed
/// - HTTP server fails to bind
pub async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        case_sensitive = config.codec.case_sensitive,
        "Starting ShortUUID Worker"
    );

    let metrics = if config.observability.metrics_enabled {
        Some(PrometheusBuilder::new().install_recorder()?)
    } else {
        None
    };

    let state = AppState::new(Arc::new(config.clone()), metrics);
    let app = create_router(state);

    let addr = SocketAddr::new(config.server.host, config.server.port);
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize logging based on configuration.
fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.observability.log_format == "json" {
        subscriber.with(fmt::layer().json()).init();
    } else {
        subscriber.with(fmt::layer()).init();
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
