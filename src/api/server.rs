//! Marksheet API Server implementation
//!
//! HTTP JSON API over the viewer pipeline using Axum. Each request reopens
//! the workbook; only the immutable configuration is shared.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers;
use crate::config::ViewerConfig;

/// API Server configuration
#[derive(Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub version: String,
    pub viewer: ViewerConfig,
}

impl AppState {
    pub fn new(viewer: ViewerConfig) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            viewer,
        }
    }
}

/// Build the router with all endpoints
pub fn router(state: Arc<AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health and info endpoints
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/version", get(handlers::version))
        .route("/banner", get(handlers::banner))
        // Selection endpoints
        .route("/api/v1/universities", get(handlers::universities))
        .route("/api/v1/semesters", get(handlers::semesters))
        .route("/api/v1/students", get(handlers::students))
        .route("/api/v1/result", get(handlers::result))
        // State and middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Run the API server
pub async fn run_api_server(config: ApiConfig, viewer: ViewerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "marksheet_server=info,marksheet_viewer=info,tower_http=info".into()
            }),
        )
        .init();

    let workbook = viewer.workbook.display().to_string();
    let app = router(Arc::new(AppState::new(viewer)));

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Marksheet API Server starting on http://{}", addr);
    info!("   Workbook: {}", workbook);
    info!("   Endpoints: /api/v1/universities, /api/v1/semesters, /api/v1/students, /api/v1/result");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Marksheet API Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
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

    info!("Shutdown signal received, stopping server...");
}
