//! Web layer module
//!
//! This module provides the HTTP interface for the contact logging service.
//! Handlers stay thin and delegate to the service layer.
//!
//! - **Handlers**: HTTP request handlers
//! - **Responses**: Response bodies and error to status mapping
//! - **Extractors**: Request metadata and payload validation
//! - **Utils**: Request logging

use anyhow::{Context, Result};
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{config::Config, services::ContactLogService};

pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod utils;

pub use extractors::{LogPayload, RequestContext};
pub use responses::{ErrorResponse, HealthResponse, LogResponse};

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: &Config, state: AppState) -> Result<Self> {
        let addr = config.bind_address()?;

        Ok(Self {
            app: Self::router(state),
            addr,
        })
    }

    /// Build the application router
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/log", post(handlers::log::log_contact))
            .route("/health", get(handlers::health::health_check))
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
            .with_state(state)
    }

    /// Serve until SIGINT or SIGTERM, then drain in-flight requests
    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr)
            .await
            .with_context(|| format!("Failed to bind to {}", self.addr))?;

        info!("Listening on http://{}", self.addr);

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Web server stopped");
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down gracefully"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received SIGTERM, shutting down gracefully");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub contact_log_service: ContactLogService,
    pub start_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(contact_log_service: ContactLogService) -> Self {
        Self {
            contact_log_service,
            start_time: chrono::Utc::now(),
        }
    }
}
