//! Food-ordering API gateway.
//!
//! Every request first passes a credentialed CORS check against an allow-list
//! built once at startup from `FRONTEND_URL`, `ADMIN_URL`, `CORS_ORIGINS` and
//! the built-in deployment origins. The user, cart, item and order routers
//! are mounted behind it, together with static `/uploads`.

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod middleware;

mod allowed_headers;
mod allowed_methods;
mod allowed_origins;
mod context;
mod cors;
mod header_builder;
mod headers;
mod options;
mod origin;
mod result;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use allowed_origins::AllowedOriginSet;
pub use app::{AppState, RouteMounts, SharedCors, build_cors, build_router};
pub use config::{ConfigError, OriginConfig, ServerConfig};
pub use context::RequestContext;
pub use cors::Cors;
pub use error::AppError;
pub use headers::Headers;
pub use options::{CorsOptions, ValidationError};
pub use origin::{Origin, OriginDecision};
pub use result::{CorsDecision, CorsRejection, CorsResult};
