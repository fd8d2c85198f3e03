use std::io;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::ConfigError;
use crate::options::ValidationError;

/// Startup and serving faults. CORS rejections never surface here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid CORS configuration: {0}")]
    Cors(#[from] ValidationError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server stopped unexpectedly: {0}")]
    Serve(#[source] io::Error),
}
