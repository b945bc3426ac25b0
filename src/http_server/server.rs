//! # HTTP Server
//!
//! Combines the informational and patient routers behind one CORS layer.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use super::config::HttpServerConfig;
use super::info_routes::info_routes;
use super::patient_routes::{patient_routes, PatientState};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::registry::PatientRegistry;
use crate::storage::MemoryStore;

/// HTTP server for the patient API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Server over a volatile in-memory registry with default configuration
    pub fn new() -> Self {
        let registry = PatientRegistry::new(Arc::new(MemoryStore::new()));
        Self::with_registry(HttpServerConfig::default(), Arc::new(registry))
    }

    pub fn with_registry(config: HttpServerConfig, registry: Arc<PatientRegistry>) -> Self {
        let router = Self::build_router(&config, registry);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, registry: Arc<PatientRegistry>) -> Router {
        let patient_state = Arc::new(PatientState::new(registry));

        Router::new()
            .merge(info_routes())
            .merge(patient_routes(patient_state))
            .layer(config.cors_layer())
    }

    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        log_event_with_fields(Event::Serving, &[("addr", &addr.to_string())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::Shutdown);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, serve until the process is killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
