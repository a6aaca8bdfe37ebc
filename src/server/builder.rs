//! ServerBuilder for fluent API to build HTTP servers

use super::router::build_api_routes;
use crate::config::CorsConfig;
use crate::core::WellnessStorage;
use crate::handlers::AppState;
use anyhow::Result;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the wellness API server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_storage(InMemoryStorage::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    storage: Option<Arc<dyn WellnessStorage>>,
    cors: CorsConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            storage: None,
            cors: CorsConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    /// Set the storage backend (required)
    pub fn with_storage(self, storage: impl WellnessStorage + 'static) -> Self {
        self.with_shared_storage(Arc::new(storage))
    }

    /// Set a storage backend that is also held elsewhere, e.g. by a seeder
    pub fn with_shared_storage(mut self, storage: Arc<dyn WellnessStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_cors(mut self, cors: CorsConfig) -> Self {
        self.cors = cors;
        self
    }

    /// Add routes outside `/api`, merged at the root
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the router
    ///
    /// Layout:
    /// - `/health`, `/healthz`
    /// - `/api/...` resource routes
    /// - any custom routes
    pub fn build(self) -> Result<Router> {
        let storage = self
            .storage
            .ok_or_else(|| anyhow::anyhow!("Storage is required. Call .with_storage()"))?;

        let mut app = health_routes().nest("/api", build_api_routes(AppState::new(storage)));

        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        if self.cors.permissive {
            app = app.layer(CorsLayer::permissive());
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `addr`, serves until SIGTERM or Ctrl+C, then drains
    /// in-flight requests.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "wellness-api"
    }))
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
///
/// A signal handler that fails to install never fires; the other one still
/// can.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
