//! Server configuration read from the environment.
//!
//! | Variable                  | Default     |
//! |---------------------------|-------------|
//! | `TODO_HOST`               | `0.0.0.0`   |
//! | `TODO_PORT`               | `8080`      |
//! | `TODO_CORS_ORIGIN_SUFFIX` | `home.arpa` |

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ORIGIN_SUFFIX: &str = "home.arpa";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TODO_PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),

    #[error("invalid CORS origin suffix: {0}")]
    InvalidOriginSuffix(#[from] regex::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Browsers on any subdomain of this suffix may call the service.
    pub cors_origin_suffix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origin_suffix: DEFAULT_CORS_ORIGIN_SUFFIX.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match lookup("TODO_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };
        Ok(Self {
            host: lookup("TODO_HOST").unwrap_or(defaults.host),
            port,
            cors_origin_suffix: lookup("TODO_CORS_ORIGIN_SUFFIX")
                .unwrap_or(defaults.cors_origin_suffix),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
