//! Server configuration.

use std::net::{IpAddr, SocketAddr};

/// Error from reading configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {key}: {value:?}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
}

/// Configuration parameters for the subway server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub host: IpAddr,

    /// Port to listen on.
    pub port: u16,

    /// Maximum number of combined network graphs kept in the cache.
    /// Each entry corresponds to one network version.
    pub graph_cache_capacity: u64,
}

impl ServerConfig {
    pub const HOST_VAR: &'static str = "SUBWAY_HOST";
    pub const PORT_VAR: &'static str = "SUBWAY_PORT";
    pub const GRAPH_CACHE_VAR: &'static str = "SUBWAY_GRAPH_CACHE_CAPACITY";

    /// Create a new configuration with the given parameters.
    pub fn new(host: IpAddr, port: u16, graph_cache_capacity: u64) -> Self {
        Self {
            host,
            port,
            graph_cache_capacity,
        }
    }

    /// Read configuration from the process environment, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// keys it does not resolve.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: parse_var(&lookup, Self::HOST_VAR)?.unwrap_or(defaults.host),
            port: parse_var(&lookup, Self::PORT_VAR)?.unwrap_or(defaults.port),
            graph_cache_capacity: parse_var(&lookup, Self::GRAPH_CACHE_VAR)?
                .unwrap_or(defaults.graph_cache_capacity),
        })
    }

    /// Returns the listener address.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError { key, value }),
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            graph_cache_capacity: 4,
        }
    }
}
