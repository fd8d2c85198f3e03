use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::constants::env as keys;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_UPLOADS_DIR: &str = "uploads";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a valid port number, got {value:?}")]
    InvalidPort { key: &'static str, value: String },
    #[error("{key} must be a valid IP address, got {value:?}")]
    InvalidHost { key: &'static str, value: String },
}

/// Origin inputs for the CORS allow-list. Every field is optional; a missing
/// value is simply left out of the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OriginConfig {
    pub frontend_url: Option<String>,
    pub admin_url: Option<String>,
    /// Raw comma-separated value of `CORS_ORIGINS`.
    pub cors_origins: Option<String>,
}

impl OriginConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            frontend_url: lookup(keys::FRONTEND_URL),
            admin_url: lookup(keys::ADMIN_URL),
            cors_origins: lookup(keys::CORS_ORIGINS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub uploads_dir: PathBuf,
    pub stripe_key_loaded: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            uploads_dir: PathBuf::from(DEFAULT_UPLOADS_DIR),
            stripe_key_loaded: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match non_empty(lookup(keys::PORT)) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                key: keys::PORT,
                value,
            })?,
            None => {
                debug!("{} not set, using default {}", keys::PORT, defaults.port);
                defaults.port
            }
        };

        let host = match non_empty(lookup(keys::HOST)) {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidHost {
                key: keys::HOST,
                value,
            })?,
            None => defaults.host,
        };

        let uploads_dir = non_empty(lookup(keys::UPLOADS_DIR))
            .map(PathBuf::from)
            .unwrap_or(defaults.uploads_dir);

        let stripe_key_loaded = non_empty(lookup(keys::STRIPE_SECRET_KEY)).is_some();
        info!(stripe_key_loaded, "server configuration loaded");

        Ok(Self {
            host,
            port,
            uploads_dir,
            stripe_key_loaded,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|inner| !inner.trim().is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
