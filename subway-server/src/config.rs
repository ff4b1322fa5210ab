//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "SUBWAY_BIND_ADDR";

/// Environment variable controlling whether the reference network is loaded.
pub const SEED_VAR: &str = "SUBWAY_SEED";

/// Errors reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be true, false, 1 or 0 (got {value})")]
    InvalidBool { var: &'static str, value: String },
}

/// Configuration for the subway map server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Load the reference stations and lines at startup.
    pub seed: bool,
}

impl ServerConfig {
    /// Read configuration from the process environment, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidAddr {
                var: BIND_ADDR_VAR,
                value,
            })?,
            None => defaults.bind_addr,
        };

        let seed = match lookup(SEED_VAR) {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidBool {
                var: SEED_VAR,
                value,
            })?,
            None => defaults.seed,
        };

        Ok(Self { bind_addr, seed })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 3000)),
            seed: true,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
