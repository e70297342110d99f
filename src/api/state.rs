//! Application state for Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::service::ShortUuidService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Short UUID service.
    pub short_uuid_service: Arc<ShortUuidService>,
    /// Prometheus handle, present when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: Arc<AppConfig>, metrics: Option<PrometheusHandle>) -> Self {
        let short_uuid_service = Arc::new(ShortUuidService::new(&config.codec));

        Self {
            config,
            short_uuid_service,
            metrics,
        }
    }
}
