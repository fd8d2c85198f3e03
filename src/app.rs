use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

use crate::allowed_origins::AllowedOriginSet;
use crate::config::OriginConfig;
use crate::constants::{HEALTH_MESSAGE, route};
use crate::cors::Cors;
use crate::error::AppError;
use crate::middleware::cors_middleware;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::Origin;

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
}

/// Downstream API routers, each nested under its fixed prefix. Their
/// request handling is owned elsewhere; unset mounts answer 404.
#[derive(Default)]
pub struct RouteMounts {
    pub user: Router,
    pub cart: Router,
    pub items: Router,
    pub orders: Router,
}

/// Credentialed CORS engine over the allow-list derived from `config`.
pub fn build_cors(config: &OriginConfig) -> Result<Cors, ValidationError> {
    let origins = AllowedOriginSet::from_config(config);
    let origin = Origin::from_allowed(origins);

    match &origin {
        Origin::List(origins) => {
            info!(allowed_origins = origins.len(), "CORS allow-list ready");
        }
        Origin::Any => {
            warn!("CORS allow-list is empty; every origin will be reflected");
        }
    }

    Cors::new(CorsOptions::credentialed(origin))
}

pub fn build_router(cors: SharedCors, uploads_dir: impl AsRef<Path>, mounts: RouteMounts) -> Router {
    let state = AppState { cors };

    Router::new()
        .route(route::ROOT, get(health))
        .nest(route::USER, mounts.user)
        .nest_service(route::UPLOADS, ServeDir::new(uploads_dir.as_ref()))
        .nest(route::CART, mounts.cart)
        .nest(route::ITEMS, mounts.items)
        .nest(route::ORDERS, mounts.orders)
        .layer(from_fn_with_state(state, cors_middleware))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(addr: SocketAddr, router: Router) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })?;
    info!("Server started on http://{addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Serve)?;

    info!("Server shut down");
    Ok(())
}

async fn health() -> &'static str {
    HEALTH_MESSAGE
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for ctrl-c: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!("failed to listen for SIGTERM: {err}");
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

    info!("Shutdown signal received");
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
