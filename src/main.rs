use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use foodie_backend::{AppError, OriginConfig, RouteMounts, ServerConfig, app};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let server = ServerConfig::from_env()?;
    let cors = Arc::new(app::build_cors(&OriginConfig::from_env())?);
    let router = app::build_router(cors, &server.uploads_dir, RouteMounts::default());

    app::serve(server.socket_addr(), router).await
}
