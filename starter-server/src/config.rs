//! Server configuration

use anyhow::{Context, Result};
use starter_core::VersionStrategy;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

/// Origins allowed to call the API from a browser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin (`*`)
    Any,

    /// An explicit list of origins
    List(Vec<String>),

    /// Localhost origins used during development
    #[default]
    Development,
}

impl CorsOrigins {
    /// Parse `*` or a comma-separated list of origins
    fn parse(value: &str) -> Self {
        if value.trim() == "*" {
            return Self::Any;
        }
        let origins = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self::List(origins)
    }
}

/// Server configuration, read once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Which request header carries the API version
    pub strategy: VersionStrategy,

    /// CORS allowed origins
    pub cors_origins: CorsOrigins,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            strategy: VersionStrategy::default(),
            cors_origins: CorsOrigins::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// - `STARTER_HOST` / `STARTER_PORT`: bind address
    /// - `STARTER_VERSION_STRATEGY`: `accept` or `header`
    /// - `STARTER_CORS_ORIGINS`: `*` or comma-separated list of origins
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("STARTER_PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid STARTER_PORT: {:?}", port))?,
            None => defaults.port,
        };

        let strategy = match lookup("STARTER_VERSION_STRATEGY") {
            Some(strategy) => strategy
                .parse::<VersionStrategy>()
                .context("Invalid STARTER_VERSION_STRATEGY")?,
            None => defaults.strategy,
        };

        Ok(Self {
            host: lookup("STARTER_HOST").unwrap_or(defaults.host),
            port,
            strategy,
            cors_origins: lookup("STARTER_CORS_ORIGINS")
                .map(|origins| CorsOrigins::parse(&origins))
                .unwrap_or(defaults.cors_origins),
        })
    }

    /// Socket address to listen on
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid STARTER_HOST: {:?}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
